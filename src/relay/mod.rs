//! The guide panel's side channel. A relay sees chat history and a snapshot
//! of the player's position, never the session itself.

pub mod oracle;
pub mod worker;

use thiserror::Error;

pub use oracle::OracleRelay;
pub use worker::RelayWorker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::User,
            content: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// What the relay is told about the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayContext {
    pub level_id: u32,
    /// The last status line shown to the player, usually a hint.
    pub hint: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("guide unavailable: {0}")]
    Unavailable(String),

    #[error("there is no question to answer")]
    EmptyQuestion,

    #[error("guide returned an empty reply")]
    EmptyReply,

    #[error("guide is still answering the previous question")]
    Busy,

    #[error("guide worker stopped before replying")]
    WorkerGone,
}

pub trait AssistanceRelay: Send + Sync {
    fn reply(&self, history: &[ChatMessage], context: &RelayContext)
        -> Result<String, RelayError>;
}
