use parking_lot::RwLock;
use railmock_core::Operation;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tracing::debug;

/// Artificial latency per operation. Unset operations answer immediately.
#[derive(Debug, Default)]
pub struct DelayController {
    delays: RwLock<BTreeMap<Operation, Duration>>,
}

impl DelayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(delays: BTreeMap<Operation, Duration>) -> Self {
        Self { delays: RwLock::new(delays) }
    }

    pub fn set(&self, op: Operation, delay: Duration) {
        self.delays.write().insert(op, delay);
    }

    pub fn get(&self, op: Operation) -> Duration {
        self.delays.read().get(&op).copied().unwrap_or_default()
    }

    /// Current delay of every operation, including the zero ones.
    pub fn snapshot(&self) -> BTreeMap<Operation, Duration> {
        Operation::ALL.into_iter().map(|op| (op, self.get(op))).collect()
    }

    /// Suspends the calling task for the configured delay of `op`.
    pub async fn apply(&self, op: Operation) {
        let delay = self.get(op);
        if delay.is_zero() {
            return;
        }
        debug!("Delaying {} by {:?}", op, delay);
        tokio::time::sleep(delay).await;
    }

    /// Applies the delay of `op`, then runs `work`, on a task of its own.
    /// Once started it runs to completion even if the caller stops waiting.
    pub async fn run<F, T>(self: Arc<Self>, op: Operation, work: F) -> Result<T, JoinError>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        tokio::spawn(async move {
            self.apply(op).await;
            work.await
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_defaults_to_zero() {
        let delays = DelayController::new();
        assert_eq!(delays.get(Operation::Login), Duration::ZERO);

        let snapshot = delays.snapshot();
        assert_eq!(snapshot.len(), Operation::ALL.len());
        assert!(snapshot.values().all(|d| d.is_zero()));
    }

    #[test]
    fn test_set_overrides_table() {
        let delays = DelayController::from_table(BTreeMap::from([(Operation::Reserve, Duration::from_millis(10))]));
        delays.set(Operation::Reserve, Duration::from_millis(20));
        assert_eq!(delays.get(Operation::Reserve), Duration::from_millis(20));
        assert_eq!(delays.get(Operation::Login), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_apply_sleeps_for_configured_duration() {
        let delays = DelayController::new();
        delays.set(Operation::SearchTrains, Duration::from_secs(3));

        let started = Instant::now();
        delays.apply(Operation::SearchTrains).await;
        assert!(started.elapsed() >= Duration::from_secs(3));

        let started = Instant::now();
        delays.apply(Operation::ListStations).await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_completes_after_caller_gives_up() {
        let delays = Arc::new(DelayController::new());
        delays.set(Operation::CommitReservation, Duration::from_secs(1));

        let done = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = done.clone();
        let work = delays.clone().run(Operation::CommitReservation, async move {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
        });

        let gave_up = tokio::time::timeout(Duration::from_millis(500), work).await;
        assert!(gave_up.is_err());
        assert!(!done.load(std::sync::atomic::Ordering::SeqCst));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(done.load(std::sync::atomic::Ordering::SeqCst));
    }
}
