use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::TutorError;
use crate::message::{
    ChatRequest, ChatResponse, CodeExplainRequest, CodeExplainResponse, ErrorBody, Faq,
    FaqAskRequest, FaqAskResponse, OnboardRequest, OnboardResponse,
};

pub const CHAT_PATH: &str = "/api/tutor/chat";
pub const EXPLAIN_CODE_PATH: &str = "/api/tutor/explainCode";
pub const ONBOARD_PATH: &str = "/api/tutor/onboard";
pub const FAQ_PATH: &str = "/api/tutor/faq";
pub const FAQ_ASK_PATH: &str = "/api/tutor/faq/ask";

/// Thin JSON client over the tutor endpoints. One call, one round trip.
#[derive(Debug, Clone)]
pub struct TutorApi {
    client: Client,
    base_url: String,
}

impl TutorApi {
    pub fn new(config: &ClientConfig) -> Result<Self, TutorError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn chat(&self, query: &str) -> Result<ChatResponse, TutorError> {
        self.post(CHAT_PATH, &ChatRequest { query }, "Failed to get AI response.")
            .await
    }

    pub async fn explain_code(&self, code: &str) -> Result<CodeExplainResponse, TutorError> {
        self.post(
            EXPLAIN_CODE_PATH,
            &CodeExplainRequest { code },
            "Failed to explain code.",
        )
        .await
    }

    pub async fn onboard(&self, topic: &str) -> Result<OnboardResponse, TutorError> {
        self.post(ONBOARD_PATH, &OnboardRequest { topic }, "Failed to generate guide.")
            .await
    }

    /// The listing endpoint never carries a useful error body, so only the
    /// status is checked.
    pub async fn faqs(&self) -> Result<Vec<Faq>, TutorError> {
        let url = self.url(FAQ_PATH);
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TutorError::Status {
                status,
                message: "Failed to load FAQs.".to_string(),
            });
        }
        Ok(response.json().await?)
    }

    pub async fn ask_faq(&self, question: &str) -> Result<FaqAskResponse, TutorError> {
        self.post(
            FAQ_ASK_PATH,
            &FaqAskRequest { question },
            "Failed to get FAQ answer.",
        )
        .await
    }

    async fn post<B, R>(&self, path: &str, body: &B, fallback: &str) -> Result<R, TutorError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        let response = check_status(response, fallback).await?;
        Ok(response.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pass 2xx responses through; otherwise pull `error` out of the body if
/// there is one.
async fn check_status(response: Response, fallback: &str) -> Result<Response, TutorError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| fallback.to_string());

    Err(TutorError::Status { status, message })
}
