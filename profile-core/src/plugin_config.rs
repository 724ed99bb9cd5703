use crate::error::{ProfileError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry of the plugin configuration document.
///
/// `config` stays untyped until a plugin builder picks the shape for `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    /// Discriminator, e.g. `WorkloadIdentity` or `AwsIamForServiceAccount`.
    ///
    /// Required. An entry without `kind` makes the whole document
    /// unparseable; it is not loaded and skipped as an unknown kind.
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub config: Map<String, Value>,
}

impl PluginSpec {
    pub fn new(kind: &str, enabled: bool) -> Self {
        Self {
            kind: kind.to_string(),
            enabled,
            config: Map::new(),
        }
    }

    /// Builder-style insert of one config entry.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.config.insert(key.to_string(), value.into());
        self
    }
}

/// A key written with no value (`enabled:`, `config:`) parses as null.
/// Null reads as the field's default, the same as an absent key.
///
/// Use together with `#[serde(default)]` so that absence is covered too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The whole plugin configuration document. Order is application order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginsConfiguration {
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,
}

impl PluginsConfiguration {
    /// Parse the YAML payload of the configuration document.
    ///
    /// `resource` names where the payload came from and is only used in the
    /// error message.
    pub fn from_yaml(payload: &str, resource: &str) -> Result<Self> {
        if payload.trim().is_empty() {
            return Ok(Self::default());
        }
        // `~` / `null` documents parse to None.
        let parsed: Option<Self> =
            serde_yaml::from_str(payload).map_err(|source| ProfileError::Parse {
                resource: resource.to_string(),
                source,
            })?;
        Ok(parsed.unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Discriminators in document order.
    pub fn kinds(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.kind.as_str()).collect()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &PluginSpec> {
        self.plugins.iter().filter(|p| p.enabled)
    }
}
