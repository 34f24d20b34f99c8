//! Client side of the tutor: JSON calls against `/api/tutor/*` rendered into
//! page regions.

pub mod api;
pub mod controller;
pub mod region;

pub use api::TutorApi;
pub use controller::{Controller, LogNotifier, Notifier};
pub use region::{ChatEntry, InputField, OutputRegion, Sender, Transcript};

use crate::error::TutorError;

/// One user action with the text typed into its input, if it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Chat(String),
    ExplainCode(String),
    Onboard(String),
    ListFaqs,
    AskFaq(String),
}

/// Outcome of [`TutorPage::run`]: what the action's region shows, and
/// whether the action succeeded.
#[derive(Debug)]
pub struct ActionReport {
    pub rendered: String,
    pub result: Result<(), TutorError>,
}

/// Every input and output region of the tutor page, wired to one controller.
#[derive(Clone)]
pub struct TutorPage<N = LogNotifier> {
    pub controller: Controller<N>,
    pub chat_input: InputField,
    pub chat_output: Transcript,
    pub code_input: InputField,
    pub code_output: OutputRegion,
    pub onboard_topic_input: InputField,
    pub onboard_output: OutputRegion,
    pub faq_list_output: OutputRegion,
    pub faq_ask_input: InputField,
    pub faq_answer_output: OutputRegion,
}

impl<N: Notifier> TutorPage<N> {
    pub fn new(controller: Controller<N>) -> Self {
        Self {
            controller,
            chat_input: InputField::default(),
            chat_output: Transcript::new(),
            code_input: InputField::default(),
            code_output: OutputRegion::new(),
            onboard_topic_input: InputField::default(),
            onboard_output: OutputRegion::new(),
            faq_list_output: OutputRegion::new(),
            faq_ask_input: InputField::default(),
            faq_answer_output: OutputRegion::new(),
        }
    }

    /// Page readiness: list the FAQs once.
    pub async fn ready(&self) -> Result<(), TutorError> {
        self.load_faqs().await
    }

    pub async fn send_message(&self) -> Result<(), TutorError> {
        self.controller
            .send_message(&self.chat_input, &self.chat_output)
            .await
    }

    pub async fn explain_code(&self) -> Result<(), TutorError> {
        self.controller
            .explain_code(&self.code_input, &self.code_output)
            .await
    }

    pub async fn generate_onboarding_guide(&self) -> Result<(), TutorError> {
        self.controller
            .generate_onboarding_guide(&self.onboard_topic_input, &self.onboard_output)
            .await
    }

    pub async fn load_faqs(&self) -> Result<(), TutorError> {
        self.controller.load_faqs(&self.faq_list_output).await
    }

    pub async fn ask_faq_question(&self) -> Result<(), TutorError> {
        self.controller
            .ask_faq_question(&self.faq_ask_input, &self.faq_answer_output)
            .await
    }

    /// Fill the action's input, run it, and read back its region. The chat
    /// region is read as plain `LABEL: message` lines.
    pub async fn run(&self, action: Action) -> ActionReport {
        let (result, rendered) = match action {
            Action::Chat(query) => {
                self.chat_input.set_value(query).await;
                let result = self.send_message().await;
                (result, self.chat_output.lines().await.join("\n"))
            }
            Action::ExplainCode(code) => {
                self.code_input.set_value(code).await;
                let result = self.explain_code().await;
                (result, self.code_output.html().await)
            }
            Action::Onboard(topic) => {
                self.onboard_topic_input.set_value(topic).await;
                let result = self.generate_onboarding_guide().await;
                (result, self.onboard_output.html().await)
            }
            Action::ListFaqs => {
                let result = self.load_faqs().await;
                (result, self.faq_list_output.html().await)
            }
            Action::AskFaq(question) => {
                self.faq_ask_input.set_value(question).await;
                let result = self.ask_faq_question().await;
                (result, self.faq_answer_output.html().await)
            }
        };

        ActionReport { rendered, result }
    }
}
