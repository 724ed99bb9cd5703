use crate::store::ConfigMapStore;
use async_trait::async_trait;
use dashmap::DashMap;
use profile_core::configmap::{ConfigMap, ConfigMapRef};
use profile_core::error::{ProfileError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// In-memory ConfigMap store keyed by `namespace/name`.
///
/// Used for standalone runs (seeded from a manifest file) and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    objects: Arc<DashMap<String, ConfigMap>>,
}

fn object_key(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a ConfigMap.
    pub fn put(&self, configmap: ConfigMap) {
        let key = object_key(&configmap.metadata.namespace, &configmap.metadata.name);
        debug!(configmap = %key, "Store updated");
        self.objects.insert(key, configmap);
    }

    pub fn remove(&self, namespace: &str, name: &str) -> Option<ConfigMap> {
        self.objects
            .remove(&object_key(namespace, name))
            .map(|(_, cm)| cm)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Seed a store from a YAML ConfigMap manifest.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let configmap: ConfigMap =
            serde_yaml::from_str(&raw).map_err(|source| ProfileError::Parse {
                resource: path.display().to_string(),
                source,
            })?;
        let store = Self::new();
        store.put(configmap);
        Ok(store)
    }
}

#[async_trait]
impl ConfigMapStore for MemoryStore {
    async fn get(&self, target: &ConfigMapRef) -> Result<ConfigMap> {
        self.objects
            .get(&object_key(&target.namespace, &target.name))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ProfileError::NotFound(target.to_string()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
