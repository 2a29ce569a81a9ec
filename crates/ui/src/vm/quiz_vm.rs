use services::{QuizSnapshot, Resolution};

use crate::vm::time_fmt::format_countdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect,
}

impl AnswerFeedback {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AnswerFeedback::Correct => "😊 Correct",
            AnswerFeedback::Incorrect => "😞 Incorrect",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            AnswerFeedback::Correct => "result correct",
            AnswerFeedback::Incorrect => "result incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    pub question_number: usize,
    pub total: usize,
    pub prompt: String,
    pub image: String,
    pub progress_percent: u32,
    pub timer_label: String,
    pub answers_enabled: bool,
    pub feedback: Option<AnswerFeedback>,
    pub next_label: &'static str,
}

impl From<&QuizSnapshot> for QuizVm {
    fn from(snapshot: &QuizSnapshot) -> Self {
        let (prompt, image) = snapshot.question.as_ref().map_or_else(
            || (String::new(), String::new()),
            |q| (q.prompt().to_string(), q.image().to_string()),
        );
        let question_number = (snapshot.index + 1).min(snapshot.total.max(1));
        let progress_percent = if snapshot.total == 0 {
            0
        } else {
            u32::try_from(question_number * 100 / snapshot.total).unwrap_or(100)
        };
        let feedback = match snapshot.resolution {
            Resolution::Unanswered => None,
            Resolution::Correct => Some(AnswerFeedback::Correct),
            Resolution::Incorrect => Some(AnswerFeedback::Incorrect),
        };
        let next_label = if snapshot.is_last_question() {
            "Finish Quiz →"
        } else {
            "Next Question →"
        };

        Self {
            question_number,
            total: snapshot.total,
            prompt,
            image,
            progress_percent,
            timer_label: format_countdown(snapshot.time_remaining),
            answers_enabled: feedback.is_none() && !snapshot.is_complete(),
            feedback,
            next_label,
        }
    }
}
