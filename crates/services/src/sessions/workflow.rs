use std::fmt;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use brainteaser_core::model::QuizOutcome;

use super::engine::{QuizSession, Transition};
use super::provider::QuestionSet;
use super::snapshot::QuizSnapshot;
use super::timer::CountdownTimer;
use crate::error::RunnerError;

/// Everything the runner reacts to, funnelled through one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunnerEvent {
    Submit(bool),
    Advance,
    Tick { question: usize },
}

/// Runtime knobs for `QuizRunner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    pub tick_period: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_secs(1),
        }
    }
}

//
// ─── HANDLE ────────────────────────────────────────────────────────────────────
//

/// Cloneable front end to a running quiz.
///
/// Commands are queued without blocking. State changes are observed through
/// `subscribe` or `changed`.
#[derive(Clone)]
pub struct QuizHandle {
    events: mpsc::UnboundedSender<RunnerEvent>,
    snapshots: watch::Receiver<QuizSnapshot>,
}

impl QuizHandle {
    /// # Errors
    ///
    /// Returns `RunnerError::Closed` if the runner has stopped.
    pub fn submit_answer(&self, choice: bool) -> Result<(), RunnerError> {
        self.send(RunnerEvent::Submit(choice))
    }

    /// # Errors
    ///
    /// Returns `RunnerError::Closed` if the runner has stopped.
    pub fn advance(&self) -> Result<(), RunnerError> {
        self.send(RunnerEvent::Advance)
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.snapshots.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.snapshots.clone()
    }

    /// Wait for the next published state.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::Closed` once the runner is gone and every
    /// snapshot has been seen.
    pub async fn changed(&mut self) -> Result<QuizSnapshot, RunnerError> {
        self.snapshots
            .changed()
            .await
            .map_err(|_| RunnerError::Closed)?;
        Ok(self.snapshots.borrow_and_update().clone())
    }

    /// Resolves with the final outcome, or `None` if the runner stopped early.
    pub async fn completion(&self) -> Option<QuizOutcome> {
        let mut snapshots = self.snapshots.clone();
        let snapshot = snapshots.wait_for(QuizSnapshot::is_complete).await.ok()?;
        snapshot.outcome
    }

    fn send(&self, event: RunnerEvent) -> Result<(), RunnerError> {
        self.events.send(event).map_err(|_| RunnerError::Closed)
    }
}

impl fmt::Debug for QuizHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizHandle")
            .field("closed", &self.events.is_closed())
            .finish_non_exhaustive()
    }
}

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

/// Drives a `QuizSession` in real time.
///
/// Owns the session and the per-question countdown. User commands and timer
/// ticks share one queue, so they are applied strictly in arrival order.
pub struct QuizRunner {
    session: QuizSession,
    config: RunnerConfig,
    events_tx: mpsc::UnboundedSender<RunnerEvent>,
    events_rx: mpsc::UnboundedReceiver<RunnerEvent>,
    snapshots: watch::Sender<QuizSnapshot>,
    timer: Option<CountdownTimer>,
}

impl QuizRunner {
    #[must_use]
    pub fn new(questions: QuestionSet, config: RunnerConfig) -> (QuizHandle, Self) {
        let session = QuizSession::new(questions);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(session.snapshot());

        let handle = QuizHandle {
            events: events_tx.clone(),
            snapshots: snapshot_rx,
        };
        let runner = Self {
            session,
            config,
            events_tx,
            events_rx,
            snapshots,
            timer: None,
        };
        (handle, runner)
    }

    /// Spawn `run` onto the current tokio runtime.
    #[must_use]
    pub fn spawn(
        questions: QuestionSet,
        config: RunnerConfig,
    ) -> (QuizHandle, tokio::task::JoinHandle<Option<QuizOutcome>>) {
        let (handle, runner) = Self::new(questions, config);
        (handle, tokio::spawn(runner.run()))
    }

    /// Process events until the session completes or every handle is dropped.
    ///
    /// Returns the final outcome, or `None` when detached before completion.
    pub async fn run(mut self) -> Option<QuizOutcome> {
        tracing::info!(questions = self.session.total(), "quiz started");
        self.start_timer();

        loop {
            let event = tokio::select! {
                event = self.events_rx.recv() => event,
                () = self.snapshots.closed() => None,
            };
            let Some(event) = event else {
                tracing::debug!(
                    index = self.session.current_index(),
                    "quiz abandoned before completion"
                );
                return None;
            };
            if let Some(outcome) = self.handle_event(event) {
                return Some(outcome);
            }
        }
    }

    fn handle_event(&mut self, event: RunnerEvent) -> Option<QuizOutcome> {
        let transition = match event {
            RunnerEvent::Submit(choice) => self.session.submit_answer(choice),
            RunnerEvent::Advance => self.session.advance(),
            RunnerEvent::Tick { question } => {
                let live = self.timer.as_ref().map(CountdownTimer::question);
                if live != Some(question) || question != self.session.current_index() {
                    tracing::trace!(question, "discarding stale tick");
                    return None;
                }
                self.session.tick()
            }
        };

        let outcome = match transition {
            Transition::Ignored => return None,
            Transition::Ticked { .. } => None,
            Transition::Resolved {
                index,
                correct,
                timed_out,
            } => {
                self.stop_timer();
                tracing::debug!(index, correct, timed_out, "question resolved");
                None
            }
            Transition::NextQuestion { .. } => {
                self.start_timer();
                None
            }
            Transition::Completed(outcome) => {
                self.stop_timer();
                tracing::info!(
                    score = outcome.score(),
                    total = outcome.total(),
                    "quiz complete"
                );
                Some(outcome)
            }
        };

        self.snapshots.send_replace(self.session.snapshot());
        outcome
    }

    fn start_timer(&mut self) {
        self.stop_timer();
        self.timer = Some(CountdownTimer::start(
            self.session.current_index(),
            self.config.tick_period,
            self.events_tx.clone(),
        ));
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl fmt::Debug for QuizRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizRunner")
            .field("session", &self.session)
            .field("config", &self.config)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
