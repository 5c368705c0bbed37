use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use surge_model::RunId;

use crate::RunState;

/// Concurrent map of live runs, owned by one engine instance.
///
/// Entries persist until stop removes them: a run that is never stopped
/// keeps its state and worker tasks alive for the life of the process.
#[derive(Clone, Default)]
pub struct RunRegistry {
    inner: Arc<RwLock<HashMap<RunId, Arc<RunState>>>>,
}

impl RunRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store state under `id`, returning the previous entry if one was
    /// still live.
    pub fn register(&self, id: RunId, state: Arc<RunState>) -> Option<Arc<RunState>> {
        let mut inner = self.inner.write().unwrap();
        inner.insert(id, state)
    }

    pub fn lookup(&self, id: &RunId) -> Option<Arc<RunState>> {
        let inner = self.inner.read().unwrap();
        inner.get(id).cloned()
    }

    pub fn remove(&self, id: &RunId) -> Option<Arc<RunState>> {
        let mut inner = self.inner.write().unwrap();
        inner.remove(id)
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surge_model::{LoadMode, RunConfig};

    fn mk_state() -> Arc<RunState> {
        Arc::new(RunState::new(RunConfig {
            topic: "orders".to_string(),
            mode: LoadMode::Continuous { records_per_second: 1 },
            max_concurrency: 1,
            duration_ms: 1000,
            success_rate_threshold: 95.0,
            record_size_bytes: 0,
            record_key: None,
            record_value: "v".to_string(),
            record_headers: Vec::new(),
        }))
    }

    #[test]
    fn register_and_lookup() {
        let registry = RunRegistry::new();
        let id = RunId::from("run-1");

        assert!(registry.lookup(&id).is_none());
        registry.register(id.clone(), mk_state());
        assert!(registry.lookup(&id).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_overwrites_and_returns_previous() {
        let registry = RunRegistry::new();
        let id = RunId::from("run-1");

        assert!(registry.register(id.clone(), mk_state()).is_none());
        assert!(registry.register(id.clone(), mk_state()).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_evicts_entry() {
        let registry = RunRegistry::new();
        let id = RunId::from("run-1");

        registry.register(id.clone(), mk_state());
        assert!(registry.remove(&id).is_some());
        assert!(registry.lookup(&id).is_none());
        assert!(registry.remove(&id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn runs_do_not_interfere() {
        let registry = RunRegistry::new();
        let a = RunId::from("run-a");
        let b = RunId::from("run-b");

        registry.register(a.clone(), mk_state());
        registry.register(b.clone(), mk_state());
        registry.remove(&a);

        assert!(registry.lookup(&a).is_none());
        assert!(registry.lookup(&b).is_some());
    }
}
