use std::sync::atomic::{AtomicU64, Ordering};

use async_channel::{Receiver, Sender};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use surge_model::{Metric, RunConfig};

use crate::CompletionPolicy;

/// A scheduling signal: attempt one more send now.
///
/// Carries its emission instant so the worker can report latency from tick
/// to broker acknowledgment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tick {
    pub at: Instant,
}

/// Mutable per-run bundle of queues, counters, and control signals.
///
/// Created once at prepare and shared (via `Arc`) by that run's scheduler
/// and workers; status and stop only read it. Both queues are bounded by
/// the concurrency limit: a full job queue stalls the scheduler, a full
/// metrics queue stalls workers until a status poll drains it.
pub struct RunState {
    config: RunConfig,
    policy: CompletionPolicy,
    pub(crate) job_tx: Sender<Tick>,
    pub(crate) job_rx: Receiver<Tick>,
    pub(crate) metric_tx: Sender<Metric>,
    pub(crate) metric_rx: Receiver<Metric>,
    pub(crate) cancel: CancellationToken,
    attempts: AtomicU64,
    successes: AtomicU64,
}

impl RunState {
    pub(crate) fn new(config: RunConfig) -> Self {
        let capacity = config.max_concurrency.max(1);
        let (job_tx, job_rx) = async_channel::bounded(capacity);
        let (metric_tx, metric_rx) = async_channel::bounded(capacity);
        Self {
            policy: CompletionPolicy::from_mode(&config.mode),
            config,
            job_tx,
            job_rx,
            metric_tx,
            metric_rx,
            cancel: CancellationToken::new(),
            attempts: AtomicU64::new(0),
            successes: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn successes(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    pub(crate) fn record_success(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    /// Failed sends count toward the attempt total (the rate denominator)
    /// but not toward successes.
    pub(crate) fn record_failure(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of attempts that succeeded; zero attempts reads as 0
    /// rather than dividing by zero.
    pub fn success_rate(&self) -> f64 {
        let attempts = self.attempts();
        if attempts == 0 {
            return 0.0;
        }
        self.successes() as f64 / attempts as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.policy.is_complete(self.attempts())
    }

    /// Pull whatever metrics are queued right now without blocking.
    pub(crate) fn drain_metrics(&self) -> Vec<Metric> {
        let mut drained = Vec::new();
        while let Ok(metric) = self.metric_rx.try_recv() {
            drained.push(metric);
        }
        drained
    }

    /// Close the job queue so idle workers exit and the scheduler stops
    /// producing.
    pub(crate) fn close_jobs(&self) {
        self.job_tx.close();
    }

    /// Close the metrics queue, releasing any worker blocked on a full
    /// queue. Outcomes emitted after this point are dropped.
    pub(crate) fn close_metrics(&self) {
        self.metric_rx.close();
    }
}
