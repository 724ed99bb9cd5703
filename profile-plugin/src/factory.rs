use crate::plugin::Plugin;
use crate::registry::PluginRegistry;
use profile_core::error::Result;
use profile_core::plugin_config::PluginSpec;
use std::sync::Arc;
use tracing::{error, info};

/// Result of instantiating one plugin spec.
#[derive(Debug)]
pub enum Instantiation {
    Ready(Box<dyn Plugin>),
    /// The spec has `enabled: false`.
    Disabled,
    /// No builder is registered for this kind.
    UnknownKind(String),
}

impl Instantiation {
    pub fn is_ready(&self) -> bool {
        matches!(self, Instantiation::Ready(_))
    }

    pub fn into_plugin(self) -> Option<Box<dyn Plugin>> {
        match self {
            Instantiation::Ready(plugin) => Some(plugin),
            _ => None,
        }
    }
}

/// Turns plugin specs into configured plugins using a fixed registry.
#[derive(Clone)]
pub struct PluginFactory {
    registry: Arc<PluginRegistry>,
}

impl PluginFactory {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Instantiate one spec.
    ///
    /// Disabled specs and unknown kinds are skipped without error. A config
    /// that does not fit the variant's shape is an error.
    pub fn instantiate(&self, spec: &PluginSpec) -> Result<Instantiation> {
        let plugin_kind = spec.kind.as_str();

        if !spec.enabled {
            info!(plugin_kind, "Plugin is disabled, skipping");
            return Ok(Instantiation::Disabled);
        }

        let Some(builder) = self.registry.get(plugin_kind) else {
            info!(plugin_kind, "Unknown plugin kind, skipping");
            return Ok(Instantiation::UnknownKind(spec.kind.clone()));
        };

        let plugin = builder.build(&spec.config).inspect_err(|e| {
            error!(plugin_kind, error = %e, "Failed to build plugin from config");
        })?;

        info!(plugin_kind, "Created plugin instance from config");
        Ok(Instantiation::Ready(plugin))
    }
}
