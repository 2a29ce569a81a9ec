use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::workflow::RunnerEvent;

/// Periodic countdown task for one question.
///
/// Sends `RunnerEvent::Tick` once per period, tagged with the question it was
/// started for. The task is aborted when the timer is cancelled or dropped.
#[derive(Debug)]
pub(crate) struct CountdownTimer {
    question: usize,
    task: JoinHandle<()>,
}

impl CountdownTimer {
    /// Must be called from within a tokio runtime.
    pub(crate) fn start(
        question: usize,
        period: Duration,
        events: UnboundedSender<RunnerEvent>,
    ) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(RunnerEvent::Tick { question }).is_err() {
                    break;
                }
            }
        });
        tracing::trace!(question, "countdown started");
        Self { question, task }
    }

    pub(crate) fn question(&self) -> usize {
        self.question
    }

    pub(crate) fn cancel(self) {
        drop(self);
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.task.abort();
        tracing::trace!(question = self.question, "countdown cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn timer_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CountdownTimer::start(2, Duration::from_secs(1), tx);

        let started = Instant::now();
        let first = rx.recv().await.unwrap();
        assert!(matches!(first, RunnerEvent::Tick { question: 2 }));
        assert!(started.elapsed() >= Duration::from_secs(1));

        let second = rx.recv().await.unwrap();
        assert!(matches!(second, RunnerEvent::Tick { question: 2 }));
        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(timer.question(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_stops_sending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CountdownTimer::start(0, Duration::from_secs(1), tx);
        timer.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        // The aborted task drops its sender, closing the channel.
        assert!(rx.recv().await.is_none());
    }
}
