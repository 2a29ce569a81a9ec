/// Final result of a completed quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuizOutcome {
    score: u32,
    total: u32,
}

impl QuizOutcome {
    /// Scores above `total` are clamped.
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self {
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Share of correctly answered questions in `[0.0, 1.0]`.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.score as f32 / self.total as f32;
        ratio
    }
}
