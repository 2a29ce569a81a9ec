use brainteaser_core::model::QuizOutcome;

/// Minimum share of correct answers, in percent, needed to pass.
pub const PASS_PERCENT: u32 = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub score_label: String,
    pub progress_percent: u32,
    pub passed: bool,
    pub status_message: &'static str,
    pub accent_class: &'static str,
}

impl ScoreVm {
    #[must_use]
    pub fn passed(outcome: QuizOutcome) -> bool {
        outcome.total() > 0
            && u64::from(outcome.score()) * 100 >= u64::from(outcome.total()) * u64::from(PASS_PERCENT)
    }
}

impl From<QuizOutcome> for ScoreVm {
    fn from(outcome: QuizOutcome) -> Self {
        let passed = Self::passed(outcome);
        let progress_percent = if outcome.total() == 0 {
            0
        } else {
            outcome.score() * 100 / outcome.total()
        };

        Self {
            score_label: format!("{}/{}", outcome.score(), outcome.total()),
            progress_percent,
            passed,
            status_message: if passed {
                "😊 You have passed"
            } else {
                "😔 Better luck next time!"
            },
            accent_class: if passed { "passed" } else { "failed" },
        }
    }
}
