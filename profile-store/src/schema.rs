/// etcd key schema for ConfigMaps.
///
/// All keys are prefixed with the configured prefix (default: `/registry`).
///
/// Schema:
/// ```text
/// /registry/configmaps/{namespace}/{name}
/// ```
pub struct KeySchema {
    prefix: String,
}

impl KeySchema {
    pub fn new(prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/').to_string();
        Self { prefix }
    }

    pub fn configmap_key(&self, namespace: &str, name: &str) -> String {
        format!("{}/configmaps/{}/{}", self.prefix, namespace, name)
    }
}
