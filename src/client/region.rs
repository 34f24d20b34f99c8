// src/client/region.rs
use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Text of one input control. Clones share the same value.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    value: Arc<RwLock<String>>,
}

impl InputField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(RwLock::new(value.into())),
        }
    }

    pub async fn value(&self) -> String {
        self.value.read().await.clone()
    }

    pub async fn set_value(&self, value: impl Into<String>) {
        *self.value.write().await = value.into();
    }

    pub async fn clear(&self) {
        self.value.write().await.clear();
    }
}

/// One area of the page an action renders into. Writes replace the whole
/// content, so whichever response lands last is what remains.
#[derive(Clone, Debug, Default)]
pub struct OutputRegion {
    html: Arc<RwLock<String>>,
}

impl OutputRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_html(&self, html: impl Into<String>) {
        *self.html.write().await = html.into();
    }

    pub async fn html(&self) -> String {
        self.html.read().await.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// CSS class used for styling.
    pub fn class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Ai => "ai",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "USER",
            Sender::Ai => "AI",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub sender: Sender,
    pub message: String,
}

impl ChatEntry {
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="chat-message {}"><strong>{}:</strong> {}</div>"#,
            self.sender.class(),
            self.sender.label(),
            self.message
        )
    }
}

impl fmt::Display for ChatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender.label(), self.message)
    }
}

/// Running chat transcript; append-only.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Arc<RwLock<Vec<ChatEntry>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, sender: Sender, message: impl Into<String>) -> usize {
        let mut guard = self.entries.write().await;
        guard.push(ChatEntry {
            sender,
            message: message.into(),
        });
        guard.len()
    }

    pub async fn entries(&self) -> Vec<ChatEntry> {
        self.entries.read().await.clone()
    }

    /// Plain-text view, one `LABEL: message` line per entry.
    pub async fn lines(&self) -> Vec<String> {
        let guard = self.entries.read().await;
        guard.iter().map(ToString::to_string).collect()
    }

    pub async fn html(&self) -> String {
        let guard = self.entries.read().await;
        guard.iter().map(ChatEntry::to_html).collect()
    }
}
