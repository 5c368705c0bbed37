mod kv;
pub use kv::KeyValue;

mod run_id;
pub use run_id::RunId;

mod mode;
pub use mode::LoadMode;

mod run_config;
pub use run_config::{ConfigError, RunConfig};

mod metric;
pub use metric::{METRIC_SEND_ERROR, METRIC_SEND_LATENCY, Metric, TAG_ERROR, TAG_TOPIC};

mod verdict;
pub use verdict::Verdict;

mod report;
pub use report::{StatusReport, StopOutcome, StopReport};
