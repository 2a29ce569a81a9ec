mod quiz_vm;
mod score_vm;
mod time_fmt;

pub use quiz_vm::{AnswerFeedback, QuizVm};
pub use score_vm::{PASS_PERCENT, ScoreVm};
pub use time_fmt::format_countdown;
