use async_trait::async_trait;
use surge_model::{RunConfig, RunId, StatusReport, StopReport};

use crate::error::ApiError;

/// Load-run lifecycle API handler.
///
/// This trait abstracts the backend implementation, allowing users to:
/// - Use the provided `EngineAdapter`
/// - Implement custom handlers with additional logic (auth, rate limiting, etc.)
#[async_trait]
pub trait ApiHandler: Send + Sync + 'static {
    /// Validate a run configuration and stand up its worker pool.
    async fn prepare_run(&self, id: &RunId, config: RunConfig) -> Result<(), ApiError>;

    /// Begin scheduling sends for a prepared run.
    async fn start_run(&self, id: &RunId) -> Result<(), ApiError>;

    /// Drain queued metrics and report whether the run has completed.
    async fn run_status(&self, id: &RunId) -> Result<StatusReport, ApiError>;

    /// Finalize a run and return its scored report.
    async fn stop_run(&self, id: &RunId) -> Result<StopReport, ApiError>;
}
