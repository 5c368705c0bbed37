use serde::{Deserialize, Serialize};

use crate::{Metric, Verdict};

/// Snapshot returned by a status poll while a run is live.
///
/// `metrics` holds whatever was queued at the instant of the poll; draining
/// never blocks, so an empty list only means nothing was queued right then.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub completed: bool,
    pub metrics: Vec<Metric>,
}

/// Terminal report returned by stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopReport {
    pub outcome: StopOutcome,
    pub metrics: Vec<Metric>,
}

/// How the stop call resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StopOutcome {
    /// The run was live and has now been finalized and scored.
    Finished(Verdict),
    /// The run was unknown or already evicted; nothing was done.
    AlreadyStopped,
}

impl StopReport {
    pub fn finished(verdict: Verdict, metrics: Vec<Metric>) -> Self {
        Self {
            outcome: StopOutcome::Finished(verdict),
            metrics,
        }
    }

    pub fn already_stopped() -> Self {
        Self {
            outcome: StopOutcome::AlreadyStopped,
            metrics: Vec::new(),
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.outcome {
            StopOutcome::Finished(verdict) => Some(verdict),
            StopOutcome::AlreadyStopped => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_stopped_has_no_verdict() {
        let report = StopReport::already_stopped();
        assert_eq!(report.outcome, StopOutcome::AlreadyStopped);
        assert!(report.verdict().is_none());
        assert!(report.metrics.is_empty());
    }

    #[test]
    fn finished_exposes_verdict() {
        let report = StopReport::finished(Verdict::from_rate(100.0, 95.0), Vec::new());
        assert!(report.verdict().is_some_and(Verdict::passed));
    }

    #[test]
    fn serde_roundtrip() {
        let report = StopReport::finished(
            Verdict::from_rate(10.0, 95.0),
            vec![Metric::latency("orders", 1.0)],
        );
        let json = serde_json::to_string(&report).unwrap();
        let back: StopReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.outcome, report.outcome);
        assert_eq!(back.metrics.len(), 1);
    }
}
