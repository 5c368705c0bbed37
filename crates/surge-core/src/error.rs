use surge_model::{ConfigError, RunId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("run not found: {0}")]
    RunNotFound(RunId),

    #[error("invalid run config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
