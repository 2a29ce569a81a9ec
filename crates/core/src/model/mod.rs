mod outcome;
mod pool;
mod question;

pub use outcome::QuizOutcome;
pub use pool::{PoolError, QuestionPool};
pub use question::{ImageRef, Question, QuestionDraft, QuestionError};
