use thiserror::Error;

/// Unified error type for the plugin configuration subsystem.
///
/// Absent-by-design outcomes (missing document, disabled plugin, unknown
/// kind) are never represented here; see `LoadOutcome` and `Instantiation`.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("ConfigMap not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Fetch of {resource} timed out after {timeout_ms}ms")]
    Timeout { resource: String, timeout_ms: u64 },

    #[error("Invalid plugin configuration in {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Plugin {kind} rejected its config: {source}")]
    PluginConfig {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ProfileError {
    /// A store failure that the loader must surface (anything but not-found).
    pub fn is_transport(&self) -> bool {
        matches!(self, ProfileError::Store(_) | ProfileError::Timeout { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::NotFound(_))
    }

    /// Configuration errors point at operator input rather than infrastructure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ProfileError::Parse { .. } | ProfileError::PluginConfig { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
