use surge_model::LoadMode;

/// Rule deciding whether a run has produced enough attempts to
/// self-terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Done once the total-attempt counter reaches the target.
    FixedTarget(u64),
    /// Never self-completes; the run ends only on an external stop.
    Continuous,
}

impl CompletionPolicy {
    pub fn from_mode(mode: &LoadMode) -> Self {
        match mode {
            LoadMode::FixedCount { number_of_records } => {
                CompletionPolicy::FixedTarget(*number_of_records)
            }
            LoadMode::Continuous { .. } => CompletionPolicy::Continuous,
        }
    }

    pub fn is_complete(&self, attempts: u64) -> bool {
        match self {
            CompletionPolicy::FixedTarget(target) => attempts >= *target,
            CompletionPolicy::Continuous => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_target_completes_at_target() {
        let policy = CompletionPolicy::FixedTarget(3);
        assert!(!policy.is_complete(0));
        assert!(!policy.is_complete(2));
        assert!(policy.is_complete(3));
        assert!(policy.is_complete(4));
    }

    #[test]
    fn continuous_never_completes() {
        let policy = CompletionPolicy::Continuous;
        assert!(!policy.is_complete(0));
        assert!(!policy.is_complete(u64::MAX));
    }

    #[test]
    fn derived_from_load_mode() {
        assert_eq!(
            CompletionPolicy::from_mode(&LoadMode::FixedCount { number_of_records: 7 }),
            CompletionPolicy::FixedTarget(7)
        );
        assert_eq!(
            CompletionPolicy::from_mode(&LoadMode::Continuous { records_per_second: 1 }),
            CompletionPolicy::Continuous
        );
    }
}
