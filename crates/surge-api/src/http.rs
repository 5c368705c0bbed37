use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use surge_model::{RunConfig, RunId, StatusReport, StopReport};

use crate::{error::ApiError, handler::ApiHandler};

/// HTTP API service builder.
pub struct HttpApi<H> {
    handler: Arc<H>,
}

impl<H> HttpApi<H>
where
    H: ApiHandler,
{
    /// Create new HTTP API with the given handler.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - POST /api/v1/runs/:id/prepare - Validate config, stand up the run
    /// - POST /api/v1/runs/:id/start - Begin scheduling sends
    /// - GET /api/v1/runs/:id/status - Drain metrics, report completion
    /// - POST /api/v1/runs/:id/stop - Finalize and score the run
    pub fn router(self) -> Router {
        Router::new()
            .route("/api/v1/runs/{id}/prepare", post(prepare_run::<H>))
            .route("/api/v1/runs/{id}/start", post(start_run::<H>))
            .route("/api/v1/runs/{id}/status", get(run_status::<H>))
            .route("/api/v1/runs/{id}/stop", post(stop_run::<H>))
            .with_state(self.handler)
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct PrepareRunRequest {
    config: RunConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct RunAcceptedResponse {
    run_id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/runs/:id/prepare
async fn prepare_run<H>(
    State(handler): State<Arc<H>>,
    Path(id): Path<String>,
    Json(req): Json<PrepareRunRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let run_id = RunId::from(id);
    handler.prepare_run(&run_id, req.config).await?;

    let response = RunAcceptedResponse {
        run_id: run_id.to_string(),
    };

    Ok(Json(response))
}

/// POST /api/v1/runs/:id/start
async fn start_run<H>(
    State(handler): State<Arc<H>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let run_id = RunId::from(id);
    handler.start_run(&run_id).await?;

    let response = RunAcceptedResponse {
        run_id: run_id.to_string(),
    };

    Ok(Json(response))
}

/// GET /api/v1/runs/:id/status
async fn run_status<H>(
    State(handler): State<Arc<H>>,
    Path(id): Path<String>,
) -> Result<Json<StatusReport>, ApiError>
where
    H: ApiHandler,
{
    let run_id = RunId::from(id);
    let report = handler.run_status(&run_id).await?;

    Ok(Json(report))
}

/// POST /api/v1/runs/:id/stop
async fn stop_run<H>(
    State(handler): State<Arc<H>>,
    Path(id): Path<String>,
) -> Result<Json<StopReport>, ApiError>
where
    H: ApiHandler,
{
    let run_id = RunId::from(id);
    let report = handler.stop_run(&run_id).await?;

    Ok(Json(report))
}
