// Recurring timer as a scoped resource
//
// `AutoAdvance` owns a background task that sends one event per period into
// the page's event channel. The task never touches page state, so every
// transition is still applied by the single consumer of that channel.
//
// Lifecycle: acquired by `start`, released by `stop` or on drop. Release is
// idempotent, so an explicit `stop` followed by the drop cancels only once.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Handle to a running recurring timer
#[derive(Debug)]
pub struct AutoAdvance {
    task: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    /// Start sending `event` into `tx` every `period`
    ///
    /// The first event fires one full period after start. The task ends on
    /// its own if the receiver is dropped.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start<E>(period: Duration, tx: mpsc::Sender<E>, event: E) -> Self
    where
        E: Clone + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            // After a stall, resume the regular cadence instead of bursting
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticks.tick().await;
                if tx.send(event.clone()).await.is_err() {
                    tracing::debug!("Auto-advance receiver closed, stopping timer");
                    break;
                }
            }
        });

        tracing::debug!("Auto-advance timer started ({} ms)", period.as_millis());

        Self { task: Some(task) }
    }

    /// Whether the timer still holds its task
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the timer (no-op if already stopped)
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Auto-advance timer stopped");
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;
    use tokio::time::{sleep, timeout};

    #[derive(Debug, Clone, PartialEq)]
    struct Tick;

    #[tokio::test]
    async fn test_fires_repeatedly() {
        let (tx, mut rx) = mpsc::channel(16);
        let timer = AutoAdvance::start(Duration::from_millis(20), tx, Tick);
        assert!(timer.is_running());

        for _ in 0..3 {
            let tick = timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
            assert_eq!(tick, Some(Tick));
        }
    }

    #[tokio::test]
    async fn test_first_tick_waits_one_period() {
        let (tx, mut rx) = mpsc::channel(16);
        let _timer = AutoAdvance::start(Duration::from_millis(300), tx, Tick);

        // Nothing fires immediately on start
        let early = timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(early.is_err());
    }

    #[tokio::test]
    async fn test_stop_cancels_ticks() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut timer = AutoAdvance::start(Duration::from_millis(10), tx, Tick);

        timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
        timer.stop();
        assert!(!timer.is_running());

        // Drain anything sent before the stop, then expect silence
        while rx.try_recv().is_ok() {}
        sleep(Duration::from_millis(60)).await;
        assert!(matches!(
            rx.try_recv(),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected)
        ));
    }

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let (tx, _rx) = mpsc::channel(16);
        let mut timer = AutoAdvance::start(Duration::from_millis(10), tx, Tick);
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
    }

    #[tokio::test]
    async fn test_drop_releases_timer() {
        let (tx, mut rx) = mpsc::channel(16);
        {
            let _timer = AutoAdvance::start(Duration::from_millis(10), tx, Tick);
            timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
        }

        while rx.try_recv().is_ok() {}
        sleep(Duration::from_millis(60)).await;

        // The aborted task dropped its sender, so the channel reports closed
        assert_eq!(rx.recv().await, None);
    }
}
