use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Complete,
    Incorrect,
    Hint,
    HintsExhausted,
}

/// The last user-facing line produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        StatusMessage {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    pub from: u32,
    pub to: u32,
    pub due: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    Locked,
    Active,
    Solved,
}

/// In-memory progress for one play-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(super) current_level_id: u32,
    pub(super) solved_level_ids: Vec<u32>,
    pub(super) revealed_rewards: Vec<String>,
    pub(super) hints_shown: usize,
    pub(super) last_message: Option<StatusMessage>,
    pub(super) pending_advance: Option<PendingAdvance>,
    pub(super) closed: bool,
}

impl SessionState {
    pub fn new(first_level_id: u32) -> Self {
        SessionState {
            current_level_id: first_level_id,
            solved_level_ids: Vec::new(),
            revealed_rewards: Vec::new(),
            hints_shown: 0,
            last_message: None,
            pending_advance: None,
            closed: false,
        }
    }

    pub fn current_level_id(&self) -> u32 {
        self.current_level_id
    }

    pub fn solved_level_ids(&self) -> &[u32] {
        &self.solved_level_ids
    }

    pub fn revealed_rewards(&self) -> &[String] {
        &self.revealed_rewards
    }

    pub fn hints_shown(&self) -> usize {
        self.hints_shown
    }

    pub fn last_message(&self) -> Option<&StatusMessage> {
        self.last_message.as_ref()
    }

    pub fn pending_advance(&self) -> Option<&PendingAdvance> {
        self.pending_advance.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_solved(&self, id: u32) -> bool {
        self.solved_level_ids.contains(&id)
    }

    /// Reward granted for `id`, if that level has been solved.
    pub fn reward_for(&self, id: u32) -> Option<&str> {
        let position = self.solved_level_ids.iter().position(|&s| s == id)?;
        self.revealed_rewards.get(position).map(String::as_str)
    }

    pub fn level_status(&self, id: u32) -> LevelStatus {
        if self.is_solved(id) {
            LevelStatus::Solved
        } else if id == self.current_level_id {
            LevelStatus::Active
        } else {
            LevelStatus::Locked
        }
    }

    /// Cancel any scheduled advance and close the session for good.
    pub fn teardown(&mut self) {
        if let Some(pending) = self.pending_advance.take() {
            debug!(from = pending.from, to = pending.to, "cancelled pending advance");
        }
        self.closed = true;
    }
}
