use crate::plugin::{PluginBuilder, PluginVariant, VariantBuilder};
use std::collections::HashMap;
use std::sync::Arc;

/// Discriminator → builder table.
///
/// Built once at startup, immutable thereafter. Kinds not in the table are
/// skipped by the factory rather than rejected.
pub struct PluginRegistry {
    builders: HashMap<String, Arc<dyn PluginBuilder>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Register a plugin builder.
    pub fn register(&mut self, builder: Arc<dyn PluginBuilder>) {
        let kind = builder.kind().to_string();
        tracing::info!(plugin_kind = %kind, "Registered plugin");
        if self.builders.insert(kind.clone(), builder).is_some() {
            tracing::warn!(plugin_kind = %kind, "Plugin builder replaced");
        }
    }

    /// Register a variant whose config deserializes straight into the type.
    pub fn register_variant<T: PluginVariant>(&mut self) {
        self.register(Arc::new(VariantBuilder::<T>::new()));
    }

    /// Get a plugin builder by kind.
    pub fn get(&self, kind: &str) -> Option<&Arc<dyn PluginBuilder>> {
        self.builders.get(kind)
    }

    /// All registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.builders.keys().map(|s| s.as_str()).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
