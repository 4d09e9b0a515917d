//! Assistant conversation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the assistant page. Each prompt is sent with a short window of
//! the conversation so far; the window is taken before the new user message
//! is appended, so the prompt never appears twice in one request.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use catalog::{ChatMessage, ChatRole};

pub const GREETING: &str = "Hello! I am the museum's AI guide. I can explain artifacts, their history \
and cultural meaning, or help you plan a visit.\n\n**You can ask me about:**\n\n\
- bronzes, ceramics, jade, calligraphy and painting\n\
- tips and etiquette for visiting a museum\n\
- the historical background of a piece";

pub const FAILURE_REPLY: &str =
    "Sorry, I cannot reply right now. Please check your connection or try again later.";

/// Quick-start prompts shown until the first exchange.
pub const PRESETS: [(&str, &str); 4] = [
    ("Tell me about bronze ware", "Artifact knowledge"),
    ("What should I know before visiting a museum?", "Visiting guide"),
    ("What can you help me with?", "Features"),
    ("Recommend a few museums", "Museum picks"),
];

/// A rendered conversation turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatEntry {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatEntry>,
    pub input: String,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { messages: vec![ChatEntry::new(ChatRole::Assistant, GREETING)], input: String::new(), loading: false }
    }
}

impl ChatState {
    /// Presets are offered only while the greeting is the whole conversation.
    pub fn show_presets(&self) -> bool {
        self.messages.len() == 1
    }

    /// The last `window` messages as wire history.
    pub fn history_window(&self, window: usize) -> Vec<ChatMessage> {
        let start = self.messages.len().saturating_sub(window);
        self.messages[start..]
            .iter()
            .map(|m| ChatMessage { role: m.role, content: m.content.clone() })
            .collect()
    }

    /// Take the pending input as a prompt. Returns the prompt text and the
    /// history to send with it, or `None` when input is blank or a request
    /// is already in flight.
    pub fn begin_send(&mut self, window: usize) -> Option<(String, Vec<ChatMessage>)> {
        if self.loading || self.input.trim().is_empty() {
            return None;
        }
        let prompt = std::mem::take(&mut self.input);
        let history = self.history_window(window);
        self.messages.push(ChatEntry::new(ChatRole::User, prompt.clone()));
        self.loading = true;
        Some((prompt, history))
    }

    /// Append the assistant reply, or the apology on failure.
    pub fn finish_send(&mut self, reply: Result<String, String>) {
        let content = match reply {
            Ok(text) => text,
            Err(_) => FAILURE_REPLY.to_owned(),
        };
        self.messages.push(ChatEntry::new(ChatRole::Assistant, content));
        self.loading = false;
    }
}
