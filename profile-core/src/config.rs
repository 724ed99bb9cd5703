use crate::access::sanitize_cluster_admins;
use crate::configmap::ConfigMapRef;
use crate::plugin_config::PluginSpec;
use figment::{Figment, providers::{Env, Format, Yaml}};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level controller configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControllerConfig {
    #[serde(default)]
    pub plugins_source: PluginSourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
    /// Plugins applied when no plugin ConfigMap is available.
    #[serde(default)]
    pub default_plugins: Vec<PluginSpec>,
    /// Raw cluster-admin list; see [`ControllerConfig::cluster_admins`].
    #[serde(default, rename = "cluster_admins")]
    pub raw_cluster_admins: Vec<String>,
}

/// Where the plugin configuration document is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSourceConfig {
    #[serde(flatten)]
    pub configmap: ConfigMapRef,
    /// Upper bound on one store fetch. 0 disables the timeout.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_ms: u64,
}

/// Config store backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_mode")]
    pub mode: StoreMode,
    #[serde(default)]
    pub etcd: Option<EtcdConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    Memory,
    Etcd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtcdConfig {
    pub endpoints: Vec<String>,
    #[serde(default = "default_etcd_prefix")]
    pub prefix: String,
    #[serde(default = "default_etcd_timeout")]
    pub timeout_secs: u64,
}

// ── Defaults ──────────────────────────────────────────────────

fn default_fetch_timeout() -> u64 { 5000 }
fn default_mode() -> StoreMode { StoreMode::Memory }
fn default_etcd_prefix() -> String { "/registry".into() }
fn default_etcd_timeout() -> u64 { 30 }

// ── Impls ─────────────────────────────────────────────────────

impl Default for PluginSourceConfig {
    fn default() -> Self {
        Self {
            configmap: ConfigMapRef::default(),
            fetch_timeout_ms: default_fetch_timeout(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mode: StoreMode::Memory,
            etcd: None,
        }
    }
}

impl ControllerConfig {
    /// Load configuration from YAML file + env overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config: ControllerConfig = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("PROFILE_").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Cluster admins after trimming, blank removal and dedup.
    pub fn cluster_admins(&self) -> Vec<String> {
        sanitize_cluster_admins(&self.raw_cluster_admins)
    }

    /// Fetch timeout, `None` when disabled.
    pub fn fetch_timeout(&self) -> Option<std::time::Duration> {
        match self.plugins_source.fetch_timeout_ms {
            0 => None,
            ms => Some(std::time::Duration::from_millis(ms)),
        }
    }
}
