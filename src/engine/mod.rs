//! Level progression: answer checking, hint disclosure, the deferred advance
//! to the next level and final key assembly.

pub mod progress;
pub mod session;
pub mod validate;

pub use progress::{
    assemble_key, key_fragment, HintOutcome, ProgressEngine, SubmitOutcome, DEFAULT_ADVANCE_DELAY,
};
pub use session::{LevelStatus, SessionState, StatusKind, StatusMessage};
pub use validate::{answer_matches, normalize_answer};
