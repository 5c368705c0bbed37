use serde::{Deserialize, Serialize};

/// Load shape for a run.
///
/// Each variant carries the single parameter that drives the inter-tick
/// delay derivation in [`RunConfig::tick_interval`](crate::RunConfig::tick_interval).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LoadMode {
    /// Send a fixed number of records spread evenly over the run duration,
    /// then self-complete.
    FixedCount { number_of_records: u64 },
    /// Send at a steady rate until an external stop arrives.
    Continuous { records_per_second: u64 },
}

impl LoadMode {
    /// Returns a short symbolic identifier, primarily for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadMode::FixedCount { .. } => "fixedCount",
            LoadMode::Continuous { .. } => "continuous",
        }
    }

    /// Returns `true` if the run self-completes after a fixed record count.
    pub fn is_fixed(&self) -> bool {
        matches!(self, LoadMode::FixedCount { .. })
    }
}
