//! Chat transcript state for an assistant widget.
//!
//! A session owns the ordered message list, the simulated typing delay, and
//! per-message feedback. Replies are queued on a [`TimerQueue`] keyed by the
//! caller's clock, so closing the widget (which drops or clears the session)
//! also drops any reply that has not been delivered yet.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use widget_core::TimerQueue;

use crate::knowledge_base::KnowledgeBase;
use crate::router::ResponseTable;

/// Unique identifier for a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Bot,
    User,
}

/// Reader feedback on a bot message. Set once; later writes are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Helpful,
    NotHelpful,
}

/// One entry in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub origin: Origin,
    pub text: String,
    pub feedback: Option<Feedback>,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Bot,
            text: text.into(),
            feedback: None,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::User,
            text: text.into(),
            feedback: None,
        }
    }
}

/// Static per-widget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// First bot message of a fresh transcript.
    pub greeting: String,
    /// Bot reply when the responder has no answer.
    pub fallback: String,
    /// Simulated typing time before a reply appears.
    pub typing_delay_ms: u64,
    /// Whether reopening the widget starts a fresh transcript.
    pub reset_on_open: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            greeting: "Hi! Ask me anything.".to_string(),
            fallback: "Sorry, I don't know that one yet.".to_string(),
            typing_delay_ms: 900,
            reset_on_open: false,
        }
    }
}

/// Anything that can turn a user message into a reply.
///
/// Returning None means "no answer"; the session substitutes its configured
/// fallback text.
pub trait Responder {
    fn respond(&self, input: &str) -> Option<String>;
}

impl Responder for KnowledgeBase {
    fn respond(&self, input: &str) -> Option<String> {
        self.best_match(input).map(String::from)
    }
}

impl Responder for ResponseTable {
    fn respond(&self, input: &str) -> Option<String> {
        self.lookup(input).map(String::from)
    }
}

/// Append-only transcript plus the pending-reply queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    id: SessionId,
    config: SessionConfig,
    messages: Vec<ChatMessage>,
    pending: TimerQueue<String>,
}

impl ChatSession {
    /// Start a session with the greeting already in the transcript.
    pub fn new(config: SessionConfig) -> Self {
        let greeting = ChatMessage::bot(config.greeting.clone());
        Self {
            id: SessionId::new(),
            config,
            messages: vec![greeting],
            pending: TimerQueue::default(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a reply is queued but not yet delivered.
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Record a user message and queue the bot's reply.
    ///
    /// Input that is blank after trimming is ignored and returns false. The
    /// transcript keeps the input exactly as typed; only the responder sees
    /// the trimmed form. The reply becomes visible once
    /// [`advance`](Self::advance) passes the configured typing delay.
    pub fn send(&mut self, input: &str, responder: &dyn Responder, now: u64) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::user(input));
        let reply = responder
            .respond(trimmed)
            .unwrap_or_else(|| self.config.fallback.clone());
        self.pending
            .schedule(now, self.config.typing_delay_ms, reply);
        debug!(session = %self.id, "queued bot reply");
        true
    }

    /// Deliver every reply whose typing delay has elapsed. Returns the number
    /// of messages appended.
    pub fn advance(&mut self, now: u64) -> usize {
        let due = self.pending.drain_due(now);
        let count = due.len();
        for reply in due {
            self.messages.push(ChatMessage::bot(reply));
        }
        count
    }

    /// Called when the widget is (re)opened.
    pub fn open(&mut self) {
        if self.config.reset_on_open {
            self.clear();
        }
    }

    /// Drop the transcript and any undelivered replies, keeping only a fresh
    /// greeting.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.messages.clear();
        self.messages
            .push(ChatMessage::bot(self.config.greeting.clone()));
    }

    /// Attach feedback to a bot message. Returns false for out-of-range
    /// indices, user messages, and messages that already carry feedback.
    pub fn set_feedback(&mut self, index: usize, feedback: Feedback) -> bool {
        match self.messages.get_mut(index) {
            Some(message) if message.origin == Origin::Bot && message.feedback.is_none() => {
                message.feedback = Some(feedback);
                true
            }
            _ => false,
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
