// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct CodeExplainRequest<'a> {
    pub code: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CodeExplainResponse {
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct OnboardRequest<'a> {
    pub topic: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct OnboardResponse {
    /// Newline-delimited guide text.
    pub guide: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct FaqAskRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct FaqAskResponse {
    pub answer: String,
}

/// Optional body of a non-success response.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
