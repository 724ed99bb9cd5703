use profile_core::plugin_config::null_as_default;
use profile_plugin::plugin::{Plugin, PluginVariant};
use serde::Deserialize;
use std::any::Any;
use std::collections::BTreeMap;

/// Annotation binding a Kubernetes service account to a GCP service account.
pub const GCP_SERVICE_ACCOUNT_ANNOTATION: &str = "iam.gke.io/gcp-service-account";

/// GKE Workload Identity: lets the profile's service account act as a GCP
/// service account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcpWorkloadIdentity {
    /// GCP service account email, e.g. `sa@project.iam.gserviceaccount.com`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gcp_service_account: String,
}

impl Plugin for GcpWorkloadIdentity {
    fn kind(&self) -> &str {
        Self::KIND
    }

    fn service_account_annotations(&self) -> BTreeMap<String, String> {
        let mut annotations = BTreeMap::new();
        if !self.gcp_service_account.is_empty() {
            annotations.insert(
                GCP_SERVICE_ACCOUNT_ANNOTATION.to_string(),
                self.gcp_service_account.clone(),
            );
        }
        annotations
    }

    // The GSA must also grant roles/iam.workloadIdentityUser to the KSA.
    fn manages_cloud_iam(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PluginVariant for GcpWorkloadIdentity {
    const KIND: &'static str = "WorkloadIdentity";
}
