use std::time::SystemTime;

use surge_model::KeyValue;

/// One record handed to the broker client for delivery.
#[derive(Debug, Clone)]
pub struct ProducerRecord {
    pub topic: String,
    pub key: Option<String>,
    pub value: Vec<u8>,
    pub headers: Vec<KeyValue>,
}

impl ProducerRecord {
    pub fn new(topic: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: topic.into(),
            key: None,
            value: value.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_headers(mut self, headers: Vec<KeyValue>) -> Self {
        self.headers = headers;
        self
    }

    /// Extend the value with zero bytes up to `size` bytes.
    ///
    /// No-op when `size` is 0 or the value is already at least that long.
    pub fn padded_to(mut self, size: usize) -> Self {
        if size > self.value.len() {
            self.value.resize(size, 0);
        }
        self
    }
}

/// Broker acknowledgment for one delivered record.
#[derive(Debug, Clone, Copy)]
pub struct SendAck {
    pub acked_at: SystemTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_extends_short_values() {
        let record = ProducerRecord::new("orders", "abc").padded_to(8);
        assert_eq!(record.value.len(), 8);
        assert_eq!(&record.value[..3], b"abc");
        assert!(record.value[3..].iter().all(|b| *b == 0));
    }

    #[test]
    fn padding_leaves_long_values_alone() {
        let record = ProducerRecord::new("orders", "abcdef").padded_to(3);
        assert_eq!(record.value, b"abcdef");
    }

    #[test]
    fn zero_size_means_no_padding() {
        let record = ProducerRecord::new("orders", "abc").padded_to(0);
        assert_eq!(record.value, b"abc");
    }

    #[test]
    fn builder_sets_key_and_headers() {
        let record = ProducerRecord::new("orders", "v")
            .with_key("k-1")
            .with_headers(vec![KeyValue::new("source", "surge")]);
        assert_eq!(record.key.as_deref(), Some("k-1"));
        assert_eq!(record.headers.len(), 1);
    }
}
