use thiserror::Error;

use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PoolError {
    #[error("question pool cannot be empty")]
    Empty,

    #[error("invalid question at position {index}: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("question pool is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The fixed master list of questions a session is drawn from.
///
/// Always holds at least one question, so a session built from it can never
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    /// # Errors
    ///
    /// Returns `PoolError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, PoolError> {
        if questions.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { questions })
    }

    /// The five questions shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            questions: vec![
                Question::builtin("Is the Great Wall of China in Japan?", "q1", false),
                Question::builtin("Is the capital of France Paris?", "q2", true),
                Question::builtin("Do penguins fly?", "q3", false),
                Question::builtin("Is water made of H2O?", "q4", true),
                Question::builtin("Is the sun a planet?", "q5", false),
            ],
        }
    }

    /// Parse a pool from a JSON array of `{ "prompt", "image", "answer" }`.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Parse` for malformed JSON, `PoolError::InvalidQuestion`
    /// for the first entry that fails validation and `PoolError::Empty` for `[]`.
    pub fn from_json(raw: &str) -> Result<Self, PoolError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| PoolError::InvalidQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionPool {
    fn default() -> Self {
        Self::builtin()
    }
}
