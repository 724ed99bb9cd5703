use crate::factory::{Instantiation, PluginFactory};
use crate::plugin::Plugin;
use profile_core::error::Result;
use profile_core::plugin_config::PluginSpec;
use profile_store::loader::{ConfigLoader, LoadOutcome};
use std::collections::BTreeMap;
use tracing::info;

/// Where the specs of a resolution pass came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecSource {
    ConfigMap,
    /// No ConfigMap configuration; the built-in default set was used.
    Defaults,
}

/// A spec that produced no plugin, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    Disabled(String),
    UnknownKind(String),
}

/// Plugins to apply to one Profile, in application order.
#[derive(Debug)]
pub struct ResolvedPlugins {
    pub source: SpecSource,
    pub plugins: Vec<Box<dyn Plugin>>,
    pub skipped: Vec<Skipped>,
}

impl ResolvedPlugins {
    pub fn kinds(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.kind()).collect()
    }

    /// Merged service-account annotations; later plugins win on conflicts.
    pub fn service_account_annotations(&self) -> BTreeMap<String, String> {
        self.plugins
            .iter()
            .flat_map(|p| p.service_account_annotations())
            .collect()
    }
}

/// Build the plugin set from specs, preserving their order.
///
/// The first spec that fails to build aborts the whole set.
pub fn build_plugins(
    factory: &PluginFactory,
    specs: &[PluginSpec],
    source: SpecSource,
) -> Result<ResolvedPlugins> {
    let mut plugins = Vec::with_capacity(specs.len());
    let mut skipped = Vec::new();

    for spec in specs {
        match factory.instantiate(spec)? {
            Instantiation::Ready(plugin) => plugins.push(plugin),
            Instantiation::Disabled => skipped.push(Skipped::Disabled(spec.kind.clone())),
            Instantiation::UnknownKind(kind) => skipped.push(Skipped::UnknownKind(kind)),
        }
    }

    Ok(ResolvedPlugins {
        source,
        plugins,
        skipped,
    })
}

/// One resolution pass: load the ConfigMap configuration, fall back to
/// `defaults` when there is none, and build every spec.
pub async fn resolve_plugins(
    loader: &ConfigLoader,
    factory: &PluginFactory,
    defaults: &[PluginSpec],
) -> Result<ResolvedPlugins> {
    let resolved = match loader.load().await? {
        LoadOutcome::Loaded(config) => {
            build_plugins(factory, &config.plugins, SpecSource::ConfigMap)?
        }
        outcome => {
            info!(?outcome, default_count = defaults.len(), "Using default plugin configuration");
            build_plugins(factory, defaults, SpecSource::Defaults)?
        }
    };

    info!(
        source = ?resolved.source,
        plugin_count = resolved.plugins.len(),
        skipped = resolved.skipped.len(),
        "Resolved profile plugins"
    );
    Ok(resolved)
}
