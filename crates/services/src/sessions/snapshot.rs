use brainteaser_core::model::{Question, QuizOutcome};

/// How the current question was resolved, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Unanswered,
    Correct,
    Incorrect,
}

impl Resolution {
    #[must_use]
    pub fn is_resolved(self) -> bool {
        !matches!(self, Resolution::Unanswered)
    }
}

/// Everything the presentation layer needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub index: usize,
    pub total: usize,
    pub question: Option<Question>,
    pub time_remaining: u32,
    pub resolution: Resolution,
    pub score: u32,
    pub outcome: Option<QuizOutcome>,
}

impl QuizSnapshot {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.total
    }
}
