//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `QuizHandle`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunnerError {
    #[error("quiz runner has stopped")]
    Closed,
}
