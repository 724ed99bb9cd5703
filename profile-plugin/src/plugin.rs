use profile_core::error::{ProfileError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Service account the plugins attach identity to in every profile namespace.
pub const DEFAULT_EDITOR_SERVICE_ACCOUNT: &str = "default-editor";

/// A configured plugin, ready to be applied to a Profile.
pub trait Plugin: fmt::Debug + Send + Sync {
    /// Discriminator this plugin was built from.
    fn kind(&self) -> &str;

    /// Annotations to set on the profile's `default-editor` service account.
    fn service_account_annotations(&self) -> BTreeMap<String, String>;

    /// Whether applying the plugin also changes cloud-side IAM policy.
    fn manages_cloud_iam(&self) -> bool {
        false
    }

    /// Access to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// A plugin variant that can be deserialized from a spec's `config`.
///
/// Registering a variant is one `PluginRegistry::register_variant::<T>()`
/// call; the config shape is the type's own serde definition.
pub trait PluginVariant: Plugin + DeserializeOwned + 'static {
    const KIND: &'static str;
}

/// Builds a plugin of one kind from its untyped config.
pub trait PluginBuilder: Send + Sync {
    fn kind(&self) -> &str;

    /// Create a configured instance. Fails if `config` does not fit the
    /// plugin's shape; never returns a partially populated plugin.
    fn build(&self, config: &Map<String, Value>) -> Result<Box<dyn Plugin>>;
}

/// Builder for any [`PluginVariant`]: deserializes the config straight into `T`.
pub struct VariantBuilder<T> {
    _variant: PhantomData<fn() -> T>,
}

impl<T> VariantBuilder<T> {
    pub fn new() -> Self {
        Self {
            _variant: PhantomData,
        }
    }
}

impl<T> Default for VariantBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PluginVariant> PluginBuilder for VariantBuilder<T> {
    fn kind(&self) -> &str {
        T::KIND
    }

    fn build(&self, config: &Map<String, Value>) -> Result<Box<dyn Plugin>> {
        let plugin: T = serde_json::from_value(Value::Object(config.clone())).map_err(|source| {
            ProfileError::PluginConfig {
                kind: T::KIND.to_string(),
                source,
            }
        })?;
        Ok(Box::new(plugin))
    }
}

/// Downcast a plugin to its concrete variant.
pub fn downcast<T: PluginVariant>(plugin: &dyn Plugin) -> Option<&T> {
    plugin.as_any().downcast_ref::<T>()
}
