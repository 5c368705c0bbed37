use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{KeyValue, LoadMode};

/// Fallback inter-tick delay when the configured inputs cannot produce one.
const DEFAULT_TICK: Duration = Duration::from_millis(1000);

/// Declarative parameters for one load run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Target topic name.
    pub topic: String,
    /// Load shape: fixed record count or steady rate.
    pub mode: LoadMode,
    /// Upper bound on concurrently executing sends (also sizes the queues).
    pub max_concurrency: usize,
    /// Run duration; in fixed-count mode the records are spread across it.
    pub duration_ms: u64,
    /// Minimum success rate (percent) for a passing verdict.
    pub success_rate_threshold: f64,
    /// Pad each record value with zero bytes up to this size. 0 = no padding.
    #[serde(default)]
    pub record_size_bytes: usize,
    /// Record key; `None` leaves partitioning to the broker client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_key: Option<String>,
    /// Record value before padding.
    pub record_value: String,
    /// Record headers attached to every send.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub record_headers: Vec<KeyValue>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("maxConcurrency must be at least 1")]
    ZeroConcurrency,
    #[error("durationMs must be positive for fixed-count runs")]
    NonPositiveDuration,
    #[error("successRateThreshold must be within 0..=100, got {0}")]
    ThresholdOutOfRange(f64),
    #[error("topic must not be empty")]
    EmptyTopic,
}

impl RunConfig {
    /// Check the fields a run cannot operate without.
    ///
    /// Called at prepare time, before any worker is spawned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.mode.is_fixed() && self.duration_ms == 0 {
            return Err(ConfigError::NonPositiveDuration);
        }
        if !(0.0..=100.0).contains(&self.success_rate_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.success_rate_threshold));
        }
        if self.topic.is_empty() {
            return Err(ConfigError::EmptyTopic);
        }
        Ok(())
    }

    /// Inter-tick delay derived from the load shape.
    ///
    /// Fixed count spreads the records over the duration; continuous divides
    /// one second by the rate. Degenerate inputs fall back to one tick per
    /// second, and the result is never below one millisecond.
    pub fn tick_interval(&self) -> Duration {
        let interval = match self.mode {
            LoadMode::FixedCount { number_of_records } => {
                if number_of_records == 0 || self.duration_ms == 0 {
                    DEFAULT_TICK
                } else {
                    Duration::from_millis(self.duration_ms / number_of_records)
                }
            }
            LoadMode::Continuous { records_per_second } => {
                if records_per_second == 0 {
                    DEFAULT_TICK
                } else {
                    Duration::from_millis(1000 / records_per_second)
                }
            }
        };
        interval.max(Duration::from_millis(1))
    }
}
