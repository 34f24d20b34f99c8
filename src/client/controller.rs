// src/client/controller.rs
use tracing::{error, warn};

use super::api::TutorApi;
use super::region::{InputField, OutputRegion, Sender, Transcript};
use crate::error::TutorError;
use crate::message::Faq;

const CHAT_ERROR: &str = "Oops! Something went wrong. Please try again.";
const EXPLAIN_ERROR: &str = "Error: Could not explain the code. Please try again.";
const ONBOARD_ERROR: &str = "Error: Could not generate the onboarding guide. Please try again.";
const FAQ_LIST_ERROR: &str = "Error: Could not load FAQs. Please try again.";
const FAQ_ASK_ERROR: &str = "Error: Could not retrieve answer. Please try again.";

/// Surface for blocking validation alerts.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Default notifier: alerts go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        warn!(alert = message, "validation failed");
    }
}

/// Runs tutor actions. Every action gets its input and output handles passed
/// in explicitly; overlapping calls on the same region are not cancelled.
#[derive(Debug, Clone)]
pub struct Controller<N = LogNotifier> {
    api: TutorApi,
    notifier: N,
}

impl Controller<LogNotifier> {
    pub fn new(api: TutorApi) -> Self {
        Self::with_notifier(api, LogNotifier)
    }
}

impl<N: Notifier> Controller<N> {
    pub fn with_notifier(api: TutorApi, notifier: N) -> Self {
        Self { api, notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Append the query to the transcript, clear the input, then append the
    /// reply (or a canned apology).
    pub async fn send_message(
        &self,
        input: &InputField,
        transcript: &Transcript,
    ) -> Result<(), TutorError> {
        let query = self.read_input(input, "Please enter a query!").await?;

        transcript.append(Sender::User, query.as_str()).await;
        input.clear().await;

        match self.api.chat(&query).await {
            Ok(data) => {
                transcript.append(Sender::Ai, data.response).await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error sending message");
                transcript.append(Sender::Ai, CHAT_ERROR).await;
                Err(e)
            }
        }
    }

    pub async fn explain_code(
        &self,
        input: &InputField,
        output: &OutputRegion,
    ) -> Result<(), TutorError> {
        let code = self
            .read_input(input, "Please paste some code to explain!")
            .await?;

        output.set_html("Thinking...").await;

        match self.api.explain_code(&code).await {
            Ok(data) => {
                output.set_html(render_explanation(&data.explanation)).await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error explaining code");
                output.set_html(EXPLAIN_ERROR).await;
                Err(e)
            }
        }
    }

    pub async fn generate_onboarding_guide(
        &self,
        input: &InputField,
        output: &OutputRegion,
    ) -> Result<(), TutorError> {
        let topic = self
            .read_input(input, "Please enter a topic for the onboarding guide!")
            .await?;

        output.set_html("Generating guide...").await;

        match self.api.onboard(&topic).await {
            Ok(data) => {
                output.set_html(render_guide(&topic, &data.guide)).await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error generating onboarding guide");
                output.set_html(ONBOARD_ERROR).await;
                Err(e)
            }
        }
    }

    /// No input to validate; also what the page runs when it becomes ready.
    pub async fn load_faqs(&self, output: &OutputRegion) -> Result<(), TutorError> {
        output.set_html("Loading FAQs...").await;

        match self.api.faqs().await {
            Ok(faqs) => {
                output.set_html(render_faqs(&faqs)).await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error loading FAQs");
                output.set_html(FAQ_LIST_ERROR).await;
                Err(e)
            }
        }
    }

    pub async fn ask_faq_question(
        &self,
        input: &InputField,
        output: &OutputRegion,
    ) -> Result<(), TutorError> {
        let question = self.read_input(input, "Please enter a question!").await?;

        output.set_html("Searching for answer...").await;

        match self.api.ask_faq(&question).await {
            Ok(data) => {
                output.set_html(render_answer(&question, &data.answer)).await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error asking FAQ question");
                output.set_html(FAQ_ASK_ERROR).await;
                Err(e)
            }
        }
    }

    async fn read_input(
        &self,
        input: &InputField,
        alert: &'static str,
    ) -> Result<String, TutorError> {
        let value = input.value().await;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.notifier.alert(alert);
            return Err(TutorError::Validation(alert));
        }
        Ok(trimmed.to_string())
    }
}

fn render_explanation(explanation: &str) -> String {
    format!("<strong>Explanation:</strong><br>{explanation}")
}

fn render_guide(topic: &str, guide: &str) -> String {
    format!(
        "<strong>Onboarding Guide for \"{topic}\":</strong><br><br>{}",
        guide.replace('\n', "<br>")
    )
}

fn render_faqs(faqs: &[Faq]) -> String {
    if faqs.is_empty() {
        return "No FAQs found.".to_string();
    }

    let mut html = String::from("<strong>Pre-defined FAQs:</strong><br><br>");
    for (index, faq) in faqs.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="faq-item"><strong>Q{}:</strong> {}<br><strong>A:</strong> {}</div>"#,
            index + 1,
            faq.question,
            faq.answer
        ));
    }
    html
}

fn render_answer(question: &str, answer: &str) -> String {
    format!("<strong>Your Question:</strong> {question}<br><strong>AI Answer:</strong> {answer}")
}
