use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use tokio::time::sleep;

use crate::{BrokerClient, ClientError, ProducerRecord, SendAck};

/// Which sends the mock rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Acknowledge everything.
    None,
    /// Reject every send.
    All,
    /// Reject every n-th send (1-based count).
    EveryNth(u64),
}

/// In-memory broker stand-in for tests and demos.
///
/// Acknowledges every record after a configurable delay, optionally
/// rejecting sends per [`FailureMode`], and tracks the peak number of
/// concurrent in-flight calls so tests can assert the engine's concurrency
/// bound.
pub struct MockBroker {
    delay: Duration,
    failure: FailureMode,
    attempts: AtomicU64,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockBroker {
    pub fn new(delay: Duration) -> Self {
        Self::with_failure(delay, FailureMode::None)
    }

    /// A broker that rejects every send.
    pub fn failing(delay: Duration) -> Self {
        Self::with_failure(delay, FailureMode::All)
    }

    /// A broker that rejects every `nth` send.
    pub fn flaky(delay: Duration, nth: u64) -> Self {
        Self::with_failure(delay, FailureMode::EveryNth(nth))
    }

    pub fn with_failure(delay: Duration, failure: FailureMode) -> Self {
        Self {
            delay,
            failure,
            attempts: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Total sends attempted against this mock, acknowledged or rejected.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Peak number of concurrently in-flight sends observed so far.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrokerClient for MockBroker {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn send(&self, record: &ProducerRecord) -> Result<SendAck, ClientError> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        let count = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

        let rejected = match self.failure {
            FailureMode::None => false,
            FailureMode::All => true,
            FailureMode::EveryNth(nth) => nth > 0 && count % nth == 0,
        };
        if rejected {
            return Err(ClientError::Rejected(format!(
                "mock rejected record for topic {}",
                record.topic
            )));
        }

        Ok(SendAck {
            acked_at: SystemTime::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn acknowledges_and_counts() {
        let broker = MockBroker::new(Duration::ZERO);
        let record = ProducerRecord::new("orders", "v");

        broker.send(&record).await.unwrap();
        broker.send(&record).await.unwrap();
        assert_eq!(broker.attempts(), 2);
    }

    #[tokio::test]
    async fn failing_mode_rejects_everything() {
        let broker = MockBroker::failing(Duration::ZERO);
        let record = ProducerRecord::new("orders", "v");

        let err = broker.send(&record).await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected(_)));
        assert!(err.to_string().contains("orders"));
    }

    #[tokio::test]
    async fn flaky_mode_rejects_every_nth() {
        let broker = MockBroker::flaky(Duration::ZERO, 3);
        let record = ProducerRecord::new("orders", "v");

        let mut rejected = 0;
        for _ in 0..9 {
            if broker.send(&record).await.is_err() {
                rejected += 1;
            }
        }
        assert_eq!(rejected, 3);
    }

    #[tokio::test]
    async fn tracks_peak_in_flight() {
        let broker = Arc::new(MockBroker::new(Duration::from_millis(50)));
        let record = ProducerRecord::new("orders", "v");

        let mut handles = Vec::new();
        for _ in 0..4 {
            let broker = Arc::clone(&broker);
            let record = record.clone();
            handles.push(tokio::spawn(async move { broker.send(&record).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert!(broker.max_in_flight() >= 2, "overlap expected under delay");
        assert!(broker.max_in_flight() <= 4);
    }
}
