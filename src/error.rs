use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single tutor action. None of these are fatal to the caller.
#[derive(Debug, Error)]
pub enum TutorError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message} (status {status})")]
    Status { status: StatusCode, message: String },
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
