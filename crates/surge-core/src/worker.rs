use std::sync::Arc;

use tracing::warn;

use surge_client::{BrokerClient, ProducerRecord};
use surge_model::Metric;

use crate::run_state::RunState;

/// One concurrency slot: consumes ticks, performs sends, emits metrics.
///
/// Runs from prepare until the job queue is closed. Ticks arriving after
/// the completion policy is satisfied are consumed and discarded without
/// touching the broker. Every send that does reach the broker produces
/// exactly one metric; emission awaits when the metrics queue is full,
/// which stalls this slot until a status poll drains it.
pub(crate) async fn run_worker(state: Arc<RunState>, client: Arc<dyn BrokerClient>) {
    while let Ok(tick) = state.job_rx.recv().await {
        if state.is_complete() {
            continue;
        }

        let record = build_record(&state);
        let metric = match client.send(&record).await {
            Ok(_ack) => {
                state.record_success();
                let elapsed_ms = tick.at.elapsed().as_secs_f64() * 1000.0;
                Metric::latency(&state.config().topic, elapsed_ms)
            }
            Err(err) => {
                state.record_failure();
                warn!(
                    topic = %state.config().topic,
                    client = client.name(),
                    error = %err,
                    "broker send failed"
                );
                Metric::send_error(&state.config().topic, &err.to_string())
            }
        };

        if state.metric_tx.send(metric).await.is_err() {
            // Metrics queue closed by stop; this run is being finalized.
            break;
        }
    }
}

fn build_record(state: &RunState) -> ProducerRecord {
    let config = state.config();
    let mut record = ProducerRecord::new(config.topic.clone(), config.record_value.as_bytes());
    if let Some(key) = &config.record_key {
        record = record.with_key(key.clone());
    }
    record
        .with_headers(config.record_headers.clone())
        .padded_to(config.record_size_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use surge_client::MockBroker;
    use surge_model::{KeyValue, LoadMode, RunConfig};
    use tokio::time::Instant;

    use crate::run_state::Tick;

    fn state(mode: LoadMode) -> Arc<RunState> {
        Arc::new(RunState::new(RunConfig {
            topic: "orders".to_string(),
            mode,
            max_concurrency: 4,
            duration_ms: 1000,
            success_rate_threshold: 95.0,
            record_size_bytes: 64,
            record_key: Some("k-1".to_string()),
            record_value: "payload".to_string(),
            record_headers: vec![KeyValue::new("source", "surge")],
        }))
    }

    #[test]
    fn record_carries_key_headers_and_padding() {
        let state = state(LoadMode::Continuous { records_per_second: 1 });
        let record = build_record(&state);
        assert_eq!(record.topic, "orders");
        assert_eq!(record.key.as_deref(), Some("k-1"));
        assert_eq!(record.headers.len(), 1);
        assert_eq!(record.value.len(), 64);
    }

    #[tokio::test]
    async fn success_emits_latency_metric_and_counts() {
        let state = state(LoadMode::Continuous { records_per_second: 1 });
        let broker = Arc::new(MockBroker::new(Duration::ZERO));
        tokio::spawn(run_worker(Arc::clone(&state), broker.clone()));

        state.job_tx.send(Tick { at: Instant::now() }).await.unwrap();
        state.close_jobs();

        let metric = state.metric_rx.recv().await.unwrap();
        assert!(!metric.is_error());
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.successes(), 1);
        assert_eq!(broker.attempts(), 1);
    }

    #[tokio::test]
    async fn failure_emits_error_metric_and_counts_attempt_only() {
        let state = state(LoadMode::Continuous { records_per_second: 1 });
        let broker = Arc::new(MockBroker::failing(Duration::ZERO));
        tokio::spawn(run_worker(Arc::clone(&state), broker));

        state.job_tx.send(Tick { at: Instant::now() }).await.unwrap();
        state.close_jobs();

        let metric = state.metric_rx.recv().await.unwrap();
        assert!(metric.is_error());
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.successes(), 0);
    }

    #[tokio::test]
    async fn ticks_after_completion_are_discarded() {
        let state = state(LoadMode::FixedCount { number_of_records: 0 });
        let broker = Arc::new(MockBroker::new(Duration::ZERO));
        let handle = tokio::spawn(run_worker(Arc::clone(&state), broker.clone()));

        state.job_tx.send(Tick { at: Instant::now() }).await.unwrap();
        state.close_jobs();
        handle.await.unwrap();

        assert_eq!(broker.attempts(), 0);
        assert_eq!(state.attempts(), 0);
        assert!(state.drain_metrics().is_empty());
    }
}
