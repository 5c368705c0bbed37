use serde::{Deserialize, Serialize};

/// Final pass/fail outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum Verdict {
    /// Success rate met or exceeded the configured threshold.
    Passed { success_rate: f64 },
    /// Success rate fell below the threshold; `title` carries the computed
    /// rate in human-readable form.
    Failed {
        title: String,
        success_rate: f64,
        threshold: f64,
    },
}

impl Verdict {
    /// Score a computed success rate against the configured threshold.
    ///
    /// A rate exactly at the threshold passes.
    pub fn from_rate(success_rate: f64, threshold: f64) -> Self {
        if success_rate >= threshold {
            Verdict::Passed { success_rate }
        } else {
            Verdict::Failed {
                title: format!(
                    "success rate {success_rate:.2}% below threshold {threshold:.2}%"
                ),
                success_rate,
                threshold,
            }
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Passed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_at_threshold_passes() {
        assert!(Verdict::from_rate(95.0, 95.0).passed());
        assert!(Verdict::from_rate(100.0, 95.0).passed());
    }

    #[test]
    fn rate_below_threshold_fails_with_formatted_title() {
        let verdict = Verdict::from_rate(0.0, 100.0);
        assert!(!verdict.passed());
        match verdict {
            Verdict::Failed { title, success_rate, threshold } => {
                assert!(title.contains("0.00%"), "title was: {title}");
                assert!(title.contains("100.00%"));
                assert_eq!(success_rate, 0.0);
                assert_eq!(threshold, 100.0);
            }
            Verdict::Passed { .. } => unreachable!(),
        }
    }

    #[test]
    fn title_rounds_to_two_decimals() {
        let verdict = Verdict::from_rate(200.0 / 3.0, 95.0);
        match verdict {
            Verdict::Failed { title, .. } => assert!(title.contains("66.67%")),
            Verdict::Passed { .. } => unreachable!(),
        }
    }

    #[test]
    fn serde_roundtrip() {
        let verdict = Verdict::from_rate(50.0, 90.0);
        let json = serde_json::to_string(&verdict).unwrap();
        assert!(json.contains(r#""outcome":"failed""#));

        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verdict);
    }
}
