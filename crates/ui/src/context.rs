use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use brainteaser_core::model::QuestionPool;
use services::{QuestionSet, RunnerConfig, create_session, create_session_seeded};

pub trait UiApp: Send + Sync {
    fn player_name(&self) -> String;
    fn question_pool(&self) -> QuestionPool;

    fn runner_config(&self) -> RunnerConfig {
        RunnerConfig::default()
    }

    /// Fixed seed for repeatable question order. `None` shuffles randomly.
    fn shuffle_seed(&self) -> Option<u64> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    player_name: String,
    pool: QuestionPool,
    runner_config: RunnerConfig,
    shuffle_seed: Option<u64>,
    attempts: Arc<AtomicU64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            player_name: app.player_name(),
            pool: app.question_pool(),
            runner_config: app.runner_config(),
            shuffle_seed: app.shuffle_seed(),
            attempts: Arc::new(AtomicU64::new(0)),
        }
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    #[must_use]
    pub fn runner_config(&self) -> RunnerConfig {
        self.runner_config
    }

    /// Shuffle the pool for a new attempt.
    ///
    /// With a fixed seed, attempt `n` uses `seed + n`, so replays differ
    /// from each other but are repeatable across launches.
    #[must_use]
    pub fn next_question_set(&self) -> QuestionSet {
        let attempt = self.attempts.fetch_add(1, Ordering::AcqRel);
        match self.shuffle_seed {
            Some(seed) => create_session_seeded(&self.pool, seed.wrapping_add(attempt)),
            None => create_session(&self.pool),
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SeededApp;

    impl UiApp for SeededApp {
        fn player_name(&self) -> String {
            "Ada".into()
        }

        fn question_pool(&self) -> QuestionPool {
            QuestionPool::builtin()
        }

        fn shuffle_seed(&self) -> Option<u64> {
            Some(42)
        }
    }

    #[test]
    fn seeded_attempts_are_repeatable() {
        let app: Arc<dyn UiApp> = Arc::new(SeededApp);
        let first = build_app_context(&app);
        let second = build_app_context(&app);

        assert_eq!(first.next_question_set(), second.next_question_set());
        assert_eq!(first.next_question_set(), second.next_question_set());
        assert_eq!(first.player_name(), "Ada");
        assert_eq!(first.pool().len(), 5);
    }

    #[test]
    fn attempts_share_counter_across_clones() {
        let app: Arc<dyn UiApp> = Arc::new(SeededApp);
        let ctx = build_app_context(&app);
        let clone = ctx.clone();

        let _ = ctx.next_question_set();
        let from_clone = clone.next_question_set();
        let expected = create_session_seeded(&QuestionPool::builtin(), 43);
        assert_eq!(from_clone, expected);
    }
}
