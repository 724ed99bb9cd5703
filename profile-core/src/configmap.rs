use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Well-known name of the plugin configuration ConfigMap.
pub const PLUGIN_CONFIG_MAP_NAME: &str = "profile-controller-plugins-config";
/// Namespace the plugin configuration ConfigMap lives in.
pub const PLUGIN_CONFIG_MAP_NAMESPACE: &str = "kubeflow";
/// Data key holding the YAML plugin document.
pub const PLUGIN_CONFIG_DATA_KEY: &str = "plugins.yaml";

/// Object metadata, the subset the controller reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// A key-value config object, shaped like a Kubernetes ConfigMap.
///
/// Manifests (`apiVersion`/`kind` headers included) deserialize directly;
/// the header fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMap {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl ConfigMap {
    pub fn new(name: &str, namespace: &str) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.to_string(),
                namespace: namespace.to_string(),
                labels: BTreeMap::new(),
            },
            data: BTreeMap::new(),
        }
    }

    /// Builder-style insert of one data entry.
    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(|s| s.as_str())
    }
}

/// Identity of the plugin configuration document: which ConfigMap, and which
/// data key inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigMapRef {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_data_key")]
    pub data_key: String,
}

fn default_name() -> String { PLUGIN_CONFIG_MAP_NAME.into() }
fn default_namespace() -> String { PLUGIN_CONFIG_MAP_NAMESPACE.into() }
fn default_data_key() -> String { PLUGIN_CONFIG_DATA_KEY.into() }

impl ConfigMapRef {
    pub fn new(name: &str, namespace: &str, data_key: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            data_key: data_key.to_string(),
        }
    }
}

impl Default for ConfigMapRef {
    fn default() -> Self {
        Self {
            name: default_name(),
            namespace: default_namespace(),
            data_key: default_data_key(),
        }
    }
}

impl fmt::Display for ConfigMapRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ref_is_well_known_identity() {
        let r = ConfigMapRef::default();
        assert_eq!(r.name, "profile-controller-plugins-config");
        assert_eq!(r.namespace, "kubeflow");
        assert_eq!(r.data_key, "plugins.yaml");
        assert_eq!(r.to_string(), "kubeflow/profile-controller-plugins-config");
    }

    #[test]
    fn configmap_manifest_deserializes() {
        let yaml = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: profile-controller-plugins-config
  namespace: kubeflow
data:
  plugins.yaml: |
    plugins: []
"#;
        let cm: ConfigMap = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cm.metadata.name, PLUGIN_CONFIG_MAP_NAME);
        assert_eq!(cm.metadata.namespace, PLUGIN_CONFIG_MAP_NAMESPACE);
        assert_eq!(cm.get(PLUGIN_CONFIG_DATA_KEY), Some("plugins: []\n"));
    }

    #[test]
    fn configmap_without_data_is_empty() {
        let cm: ConfigMap = serde_yaml::from_str("metadata:\n  name: x\n").unwrap();
        assert!(cm.data.is_empty());
        assert!(cm.get(PLUGIN_CONFIG_DATA_KEY).is_none());
    }
}
