mod domain;
pub use domain::{
    ConfigError, KeyValue, LoadMode, Metric, RunConfig, RunId, StatusReport, StopOutcome,
    StopReport, Verdict,
};
pub use domain::{METRIC_SEND_ERROR, METRIC_SEND_LATENCY, TAG_ERROR, TAG_TOPIC};
