use std::sync::Arc;

use async_trait::async_trait;
use surge_core::Engine;
use surge_model::{RunConfig, RunId, StatusReport, StopReport};

use crate::error::ApiError;
use crate::handler::ApiHandler;

/// Adapter that bridges `Engine` to `ApiHandler`.
///
/// This is a ready-to-use implementation that directly delegates to the engine.
pub struct EngineAdapter {
    engine: Arc<Engine>,
}

impl EngineAdapter {
    /// Create a new adapter wrapping the given engine.
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl ApiHandler for EngineAdapter {
    async fn prepare_run(&self, id: &RunId, config: RunConfig) -> Result<(), ApiError> {
        self.engine.prepare(id, config).map_err(ApiError::from)
    }

    async fn start_run(&self, id: &RunId) -> Result<(), ApiError> {
        self.engine.start(id).map_err(ApiError::from)
    }

    async fn run_status(&self, id: &RunId) -> Result<StatusReport, ApiError> {
        self.engine.status(id).map_err(ApiError::from)
    }

    async fn stop_run(&self, id: &RunId) -> Result<StopReport, ApiError> {
        Ok(self.engine.stop(id))
    }
}
