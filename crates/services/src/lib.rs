#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use sessions as session;

pub use error::RunnerError;

pub use sessions::{
    QUESTION_TIME_SECS, QuestionSet, QuizHandle, QuizRunner, QuizSession,
    QuizSnapshot, QuizState, Resolution, RunnerConfig, Transition, create_session,
    create_session_seeded, create_session_with,
};
