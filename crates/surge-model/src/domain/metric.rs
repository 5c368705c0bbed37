use std::collections::HashMap;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

pub const METRIC_SEND_LATENCY: &str = "broker.send.latency";
pub const METRIC_SEND_ERROR: &str = "broker.send.error";
pub const TAG_TOPIC: &str = "topic";
pub const TAG_ERROR: &str = "error";

/// One immutable observation attached to a completed or failed send attempt.
///
/// Successful sends carry the latency in milliseconds; failed sends carry a
/// zero value and an `error` tag with the broker client's error text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub name: String,
    pub value: f64,
    #[serde(with = "time_serde")]
    pub timestamp: SystemTime,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl Metric {
    /// Latency observation for one acknowledged send.
    pub fn latency(topic: &str, elapsed_ms: f64) -> Self {
        Self {
            name: METRIC_SEND_LATENCY.to_string(),
            value: elapsed_ms,
            timestamp: SystemTime::now(),
            tags: HashMap::from([(TAG_TOPIC.to_string(), topic.to_string())]),
        }
    }

    /// Error observation for one failed send.
    pub fn send_error(topic: &str, error: &str) -> Self {
        Self {
            name: METRIC_SEND_ERROR.to_string(),
            value: 0.0,
            timestamp: SystemTime::now(),
            tags: HashMap::from([
                (TAG_TOPIC.to_string(), topic.to_string()),
                (TAG_ERROR.to_string(), error.to_string()),
            ]),
        }
    }

    pub fn is_error(&self) -> bool {
        self.name == METRIC_SEND_ERROR
    }
}

mod time_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let since_epoch = time
            .duration_since(UNIX_EPOCH)
            .map_err(serde::ser::Error::custom)?;
        (since_epoch.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + Duration::from_millis(millis))
    }
}
