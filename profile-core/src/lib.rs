pub mod access;
pub mod config;
pub mod configmap;
pub mod error;
pub mod plugin_config;

pub use access::sanitize_cluster_admins;
pub use config::ControllerConfig;
pub use configmap::{ConfigMap, ConfigMapRef};
pub use error::{ProfileError, Result};
pub use plugin_config::{PluginSpec, PluginsConfiguration};
