mod engine;
mod provider;
mod snapshot;
mod timer;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::RunnerError;
pub use engine::{QUESTION_TIME_SECS, QuizSession, QuizState, Transition};
pub use provider::{QuestionSet, create_session, create_session_seeded, create_session_with};
pub use snapshot::{QuizSnapshot, Resolution};
pub use workflow::{QuizHandle, QuizRunner, RunnerConfig};
