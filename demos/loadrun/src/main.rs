//! Drives a short continuous load run against the mock broker and prints
//! the scored report.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use uuid::Uuid;

use surge_client::MockBroker;
use surge_core::Engine;
use surge_model::{LoadMode, RunConfig, RunId};
use surge_observe::{LoggerConfig, logger_init};

#[tokio::main]
async fn main() -> Result<()> {
    logger_init(&LoggerConfig::default())?;

    let broker = Arc::new(MockBroker::new(Duration::from_millis(20)));
    let engine = Engine::new(broker.clone());
    let id = RunId::from(Uuid::new_v4().to_string());

    let config = RunConfig {
        topic: "demo-topic".to_string(),
        mode: LoadMode::Continuous { records_per_second: 5 },
        max_concurrency: 4,
        duration_ms: 10_000,
        success_rate_threshold: 95.0,
        record_size_bytes: 256,
        record_key: Some("demo".to_string()),
        record_value: "hello from loadrun".to_string(),
        record_headers: vec![("origin", "loadrun").into()],
    };

    engine.prepare(&id, config)?;
    engine.start(&id)?;

    for second in 1..=10u32 {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let status = engine.status(&id)?;
        info!(
            second,
            drained = status.metrics.len(),
            completed = status.completed,
            "status poll"
        );
    }

    let report = engine.stop(&id);
    info!(
        attempts = broker.attempts(),
        peak_in_flight = broker.max_in_flight(),
        final_drain = report.metrics.len(),
        "run finished"
    );

    match report.verdict() {
        Some(verdict) => info!(passed = verdict.passed(), "verdict: {verdict:?}"),
        None => info!("run was already stopped"),
    }
    Ok(())
}
