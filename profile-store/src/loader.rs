use crate::store::ConfigMapStore;
use profile_core::configmap::ConfigMapRef;
use profile_core::error::{ProfileError, Result};
use profile_core::plugin_config::PluginsConfiguration;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Result of one load of the plugin configuration document.
///
/// Every variant except `Loaded` means "no external configuration"; they are
/// kept apart so callers and logs can tell why.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(PluginsConfiguration),
    /// The loader was built without a store.
    StoreUnavailable,
    /// The ConfigMap does not exist.
    NotFound,
    /// The ConfigMap exists but has no entry under the data key.
    MissingKey,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn into_configuration(self) -> Option<PluginsConfiguration> {
        match self {
            LoadOutcome::Loaded(cfg) => Some(cfg),
            _ => None,
        }
    }
}

/// Fetches and parses the plugin configuration ConfigMap.
///
/// Holds no state between calls: every `load` hits the store once and builds
/// a fresh `PluginsConfiguration`.
pub struct ConfigLoader {
    store: Option<Arc<dyn ConfigMapStore>>,
    source: ConfigMapRef,
    fetch_timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Loader reading the well-known ConfigMap from `store`.
    pub fn new(store: Arc<dyn ConfigMapStore>) -> Self {
        Self {
            store: Some(store),
            source: ConfigMapRef::default(),
            fetch_timeout: None,
        }
    }

    /// Loader with no store; every load reports `StoreUnavailable`.
    pub fn without_store() -> Self {
        Self {
            store: None,
            source: ConfigMapRef::default(),
            fetch_timeout: None,
        }
    }

    pub fn with_source(mut self, source: ConfigMapRef) -> Self {
        self.source = source;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn source(&self) -> &ConfigMapRef {
        &self.source
    }

    /// Load the plugin configuration.
    ///
    /// Absence (no store, no ConfigMap, no data key) is `Ok`; transport
    /// failures and unparseable payloads are errors.
    pub async fn load(&self) -> Result<LoadOutcome> {
        let configmap = self.source.name.as_str();
        let namespace = self.source.namespace.as_str();

        let Some(store) = &self.store else {
            info!(configmap, namespace, "Store not initialized, skipping ConfigMap loading");
            return Ok(LoadOutcome::StoreUnavailable);
        };

        let fetched = match self.fetch_timeout {
            Some(limit) => match tokio::time::timeout(limit, store.get(&self.source)).await {
                Ok(result) => result,
                Err(_) => Err(ProfileError::Timeout {
                    resource: self.source.to_string(),
                    timeout_ms: whole_millis(limit),
                }),
            },
            None => store.get(&self.source).await,
        };

        let object = match fetched {
            Ok(object) => object,
            Err(e) if e.is_not_found() => {
                info!(configmap, namespace, "Plugin ConfigMap not found, using default plugin configuration");
                return Ok(LoadOutcome::NotFound);
            }
            Err(e) => {
                error!(configmap, namespace, backend = store.backend(), error = %e, "Failed to get plugin ConfigMap");
                return Err(e);
            }
        };

        let Some(payload) = object.get(&self.source.data_key) else {
            info!(
                configmap,
                namespace,
                key = %self.source.data_key,
                "ConfigMap found but missing data key, using default plugin configuration"
            );
            return Ok(LoadOutcome::MissingKey);
        };

        let resource = format!("{}[{}]", self.source, self.source.data_key);
        let config = PluginsConfiguration::from_yaml(payload, &resource).inspect_err(|e| {
            error!(configmap, namespace, error = %e, "Failed to parse plugin configuration from ConfigMap");
        })?;

        info!(
            configmap,
            namespace,
            plugin_count = config.len(),
            "Loaded plugin configuration from ConfigMap"
        );
        Ok(LoadOutcome::Loaded(config))
    }
}

/// Milliseconds in `limit`, saturating at `u64::MAX`.
fn whole_millis(limit: Duration) -> u64 {
    u64::try_from(limit.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_millis_saturates() {
        assert_eq!(whole_millis(Duration::from_millis(20)), 20);
        assert_eq!(whole_millis(Duration::from_micros(1500)), 1);
        assert_eq!(whole_millis(Duration::MAX), u64::MAX);
    }
}
