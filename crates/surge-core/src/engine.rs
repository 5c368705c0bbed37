use std::sync::Arc;

use tracing::{info, warn};

use surge_client::BrokerClient;
use surge_model::{RunConfig, RunId, StatusReport, StopReport, Verdict};

use crate::{CoreError, RunRegistry, run_state::RunState, scheduler, worker};

/// Orchestrates the run lifecycle: prepare, start, status, stop.
///
/// One engine instance owns one registry of live runs; all lifecycle calls
/// are addressed by run id, so arbitrarily many runs can be active at once.
/// Must be used from within a tokio runtime — prepare and start spawn the
/// per-run tasks.
pub struct Engine {
    registry: RunRegistry,
    client: Arc<dyn BrokerClient>,
}

impl Engine {
    pub fn new(client: Arc<dyn BrokerClient>) -> Self {
        Self {
            registry: RunRegistry::new(),
            client,
        }
    }

    /// Validate the config, build the run state, and pre-spawn the worker
    /// pool. Workers sit idle on the job queue until start.
    ///
    /// Preparing under an id that is still registered overwrites the prior
    /// entry; the displaced run can no longer be stopped through the
    /// registry and drains on its own.
    pub fn prepare(&self, id: &RunId, config: RunConfig) -> Result<(), CoreError> {
        config.validate()?;

        let state = Arc::new(RunState::new(config));
        let workers = state.config().max_concurrency;
        for _ in 0..workers {
            tokio::spawn(worker::run_worker(
                Arc::clone(&state),
                Arc::clone(&self.client),
            ));
        }

        if self.registry.register(id.clone(), state).is_some() {
            warn!(run = %id, "prepare overwrote a live run state");
        }
        info!(run = %id, workers, client = self.client.name(), "run prepared");
        Ok(())
    }

    /// Launch the scheduler; the first tick fires immediately.
    pub fn start(&self, id: &RunId) -> Result<(), CoreError> {
        let state = self
            .registry
            .lookup(id)
            .ok_or_else(|| CoreError::RunNotFound(id.clone()))?;

        tokio::spawn(scheduler::run_scheduler(state));
        info!(run = %id, "run started");
        Ok(())
    }

    /// Drain currently queued metrics and report completion.
    ///
    /// Never blocks. In fixed-target mode the scheduler is halted as soon
    /// as the target is met, but the run still needs an explicit stop to be
    /// finalized and evicted.
    pub fn status(&self, id: &RunId) -> Result<StatusReport, CoreError> {
        let state = self
            .registry
            .lookup(id)
            .ok_or_else(|| CoreError::RunNotFound(id.clone()))?;

        let metrics = state.drain_metrics();
        let completed = state.is_complete();
        if completed {
            state.cancel.cancel();
        }
        Ok(StatusReport { completed, metrics })
    }

    /// Finalize a run: halt scheduling, drain, score, evict.
    ///
    /// Stopping an unknown or already-evicted id yields an
    /// `AlreadyStopped` report rather than an error, so double stops are
    /// harmless. In-flight sends are not awaited; outcomes landing after
    /// the final drain are dropped.
    pub fn stop(&self, id: &RunId) -> StopReport {
        let Some(state) = self.registry.remove(id) else {
            info!(run = %id, "stop on unknown or already-stopped run");
            return StopReport::already_stopped();
        };

        state.cancel.cancel();
        state.close_jobs();

        let metrics = state.drain_metrics();
        state.close_metrics();

        let rate = state.success_rate();
        let verdict = Verdict::from_rate(rate, state.config().success_rate_threshold);
        info!(
            run = %id,
            attempts = state.attempts(),
            successes = state.successes(),
            rate,
            passed = verdict.passed(),
            "run stopped"
        );
        StopReport::finished(verdict, metrics)
    }
}
