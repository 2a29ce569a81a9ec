use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use brainteaser_core::model::{Question, QuestionPool};

/// The fixed, ordered questions of one quiz attempt.
///
/// Built once from a pool and never reordered afterwards. Never empty,
/// because `QuestionPool` rejects empty input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Keep the pool order. Useful when the caller needs a predictable sequence.
    #[must_use]
    pub fn in_pool_order(pool: &QuestionPool) -> Self {
        Self {
            questions: pool.questions().to_vec(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Shuffle the whole pool into a new question set using the thread RNG.
#[must_use]
pub fn create_session(pool: &QuestionPool) -> QuestionSet {
    let mut rng = rand::rng();
    create_session_with(pool, &mut rng)
}

/// Shuffle the whole pool with an RNG seeded from `seed`, for repeatable runs.
#[must_use]
pub fn create_session_seeded(pool: &QuestionPool, seed: u64) -> QuestionSet {
    create_session_with(pool, &mut StdRng::seed_from_u64(seed))
}

/// Shuffle the whole pool into a new question set using `rng`.
#[must_use]
pub fn create_session_with<R: Rng + ?Sized>(pool: &QuestionPool, rng: &mut R) -> QuestionSet {
    let mut questions = pool.questions().to_vec();
    questions.as_mut_slice().shuffle(rng);
    tracing::debug!(questions = questions.len(), "created question set");
    QuestionSet { questions }
}
