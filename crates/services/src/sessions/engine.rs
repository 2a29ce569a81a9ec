use std::fmt;

use brainteaser_core::model::{Question, QuizOutcome};

use super::provider::QuestionSet;
use super::snapshot::{QuizSnapshot, Resolution};

/// Seconds granted for each question.
pub const QUESTION_TIME_SECS: u32 = 5;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    AwaitingAnswer { index: usize },
    Resolved { index: usize, correct: bool },
    /// Only held while `advance` runs.
    Advancing,
    Complete { final_score: u32 },
}

/// What a single operation did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Operation was not valid in the current state.
    Ignored,
    Ticked {
        time_remaining: u32,
    },
    Resolved {
        index: usize,
        correct: bool,
        timed_out: bool,
    },
    NextQuestion {
        index: usize,
    },
    Completed(QuizOutcome),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Single-attempt quiz state machine.
///
/// Steps through a `QuestionSet` one question at a time. Each question is
/// resolved exactly once, either by `submit_answer` or by the countdown
/// reaching zero through `tick`. Calls made in the wrong state are ignored.
pub struct QuizSession {
    questions: QuestionSet,
    state: QuizState,
    current: usize,
    time_remaining: u32,
    score: u32,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            state: QuizState::AwaitingAnswer { index: 0 },
            current: 0,
            time_remaining: QUESTION_TIME_SECS,
            score: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The question on screen; `None` once the session is complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// True once the current question has been resolved.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        !matches!(self.state, QuizState::AwaitingAnswer { .. })
    }

    /// Outcome of the most recent question. Only meaningful when answered.
    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        match self.state {
            QuizState::Resolved { correct, .. } => Some(correct),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Complete { .. })
    }

    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self.state {
            QuizState::Complete { final_score } => {
                Some(QuizOutcome::new(final_score, self.total_u32()))
            }
            _ => None,
        }
    }

    /// One second of the countdown elapsed.
    ///
    /// Reaching zero resolves the question as incorrect, whatever its answer.
    pub fn tick(&mut self) -> Transition {
        let QuizState::AwaitingAnswer { index } = self.state else {
            return Transition::Ignored;
        };

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return Transition::Ticked {
                time_remaining: self.time_remaining,
            };
        }

        self.state = QuizState::Resolved {
            index,
            correct: false,
        };
        Transition::Resolved {
            index,
            correct: false,
            timed_out: true,
        }
    }

    /// Answer the current question. Only the first submission counts.
    pub fn submit_answer(&mut self, choice: bool) -> Transition {
        let QuizState::AwaitingAnswer { index } = self.state else {
            return Transition::Ignored;
        };
        let Some(question) = self.questions.get(index) else {
            return Transition::Ignored;
        };

        let correct = question.is_correct(choice);
        if correct {
            self.score = self.score.saturating_add(1);
        }
        self.state = QuizState::Resolved { index, correct };
        Transition::Resolved {
            index,
            correct,
            timed_out: false,
        }
    }

    /// Move past a resolved question, completing the session after the last one.
    pub fn advance(&mut self) -> Transition {
        let QuizState::Resolved { index, .. } = self.state else {
            return Transition::Ignored;
        };

        self.state = QuizState::Advancing;
        let next = index + 1;
        if next < self.questions.len() {
            self.current = next;
            self.time_remaining = QUESTION_TIME_SECS;
            self.state = QuizState::AwaitingAnswer { index: next };
            return Transition::NextQuestion { index: next };
        }

        self.state = QuizState::Complete {
            final_score: self.score,
        };
        Transition::Completed(QuizOutcome::new(self.score, self.total_u32()))
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let resolution = match self.last_answer_correct() {
            Some(true) => Resolution::Correct,
            Some(false) => Resolution::Incorrect,
            None => Resolution::Unanswered,
        };
        QuizSnapshot {
            index: self.current,
            total: self.total(),
            question: self.current_question().cloned(),
            time_remaining: self.time_remaining,
            resolution,
            score: self.score,
            outcome: self.outcome(),
        }
    }

    fn total_u32(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("state", &self.state)
            .field("time_remaining", &self.time_remaining)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
