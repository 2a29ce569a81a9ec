use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question image reference cannot be empty")]
    EmptyImage,
}

//
// ─── IMAGE REFERENCE ───────────────────────────────────────────────────────────
//

/// Opaque identifier of the asset shown next to a question.
///
/// The core never resolves it; the presentation layer maps it to a file.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyImage` for blank identifiers.
    pub fn parse(raw: impl Into<String>) -> Result<Self, QuestionError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::EmptyImage);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageRef({})", self.0)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it arrives from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub image: String,
    pub answer: bool,
}

impl QuestionDraft {
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or image reference is blank.
    pub fn validate(self) -> Result<Question, QuestionError> {
        Question::new(self.prompt, self.image, self.answer)
    }
}

/// A single true/false question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    prompt: String,
    image: ImageRef,
    answer: bool,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyImage`
    /// when either text field is blank.
    pub fn new(
        prompt: impl Into<String>,
        image: impl Into<String>,
        answer: bool,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        let image = ImageRef::parse(image)?;
        Ok(Self {
            prompt,
            image,
            answer,
        })
    }

    pub(crate) fn builtin(prompt: &str, image: &str, answer: bool) -> Self {
        Self {
            prompt: prompt.to_string(),
            image: ImageRef(image.to_string()),
            answer,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// The correct answer.
    #[must_use]
    pub fn answer(&self) -> bool {
        self.answer
    }

    /// Whether `choice` matches the correct answer.
    #[must_use]
    pub fn is_correct(&self, choice: bool) -> bool {
        self.answer == choice
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_rejects_blank_prompt() {
        let err = Question::new("   ", "q1", true).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn question_rejects_blank_image() {
        let err = Question::new("Is water wet?", "", true).unwrap_err();
        assert_eq!(err, QuestionError::EmptyImage);
    }

    #[test]
    fn image_ref_is_trimmed() {
        let image = ImageRef::parse("  q3 ").unwrap();
        assert_eq!(image.as_str(), "q3");
    }

    #[test]
    fn is_correct_compares_choice_with_answer() {
        let question = Question::new("Do penguins fly?", "q3", false).unwrap();
        assert!(question.is_correct(false));
        assert!(!question.is_correct(true));
    }

    #[test]
    fn draft_validates_into_question() {
        let draft = QuestionDraft {
            prompt: "Is the sun a planet?".into(),
            image: "q5".into(),
            answer: false,
        };
        let question = draft.validate().unwrap();
        assert_eq!(question.prompt(), "Is the sun a planet?");
        assert_eq!(question.image().as_str(), "q5");
        assert!(!question.answer());
    }
}
