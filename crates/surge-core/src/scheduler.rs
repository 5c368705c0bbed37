use std::sync::Arc;

use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::run_state::{RunState, Tick};

/// Timer-driven tick generator for one run.
///
/// Fires one tick immediately, then one per configured inter-tick delay,
/// until the stop token is cancelled or the job queue is closed. Pushing a
/// tick awaits when the queue is full; that backpressure keeps the
/// scheduler at most one tick ahead of a saturated worker pool.
pub(crate) async fn run_scheduler(state: Arc<RunState>) {
    let mut interval = time::interval(state.config().tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    debug!(
        topic = %state.config().topic,
        interval_ms = interval.period().as_millis() as u64,
        "scheduler started"
    );

    loop {
        tokio::select! {
            _ = state.cancel.cancelled() => {
                debug!(topic = %state.config().topic, "scheduler stopped");
                break;
            }
            _ = interval.tick() => {
                trace!("tick");
                if state.job_tx.send(Tick { at: Instant::now() }).await.is_err() {
                    // Job queue closed by stop while we were blocked on a
                    // full queue.
                    break;
                }
            }
        }
    }
}
