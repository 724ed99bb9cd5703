use async_trait::async_trait;
use profile_core::configmap::{ConfigMap, ConfigMapRef};
use profile_core::error::Result;

/// Read access to ConfigMap-shaped documents.
///
/// Implementations must return `ProfileError::NotFound` for a missing object
/// so callers can tell absence apart from transport failures.
#[async_trait]
pub trait ConfigMapStore: Send + Sync {
    /// Fetch the ConfigMap named by `target`. `target.data_key` is not
    /// consulted; the whole object is returned.
    async fn get(&self, target: &ConfigMapRef) -> Result<ConfigMap>;

    /// Backend name for logs.
    fn backend(&self) -> &'static str;
}
