use profile_core::plugin_config::null_as_default;
use profile_plugin::plugin::{Plugin, PluginVariant};
use serde::Deserialize;
use std::any::Any;
use std::collections::BTreeMap;

/// Annotation EKS reads to project an IAM role into a service account.
pub const AWS_ROLE_ARN_ANNOTATION: &str = "eks.amazonaws.com/role-arn";

/// IAM Roles for Service Accounts (IRSA) on EKS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsIamForServiceAccount {
    /// Role ARN, e.g. `arn:aws:iam::123456789012:role/profile`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub aws_iam_role: String,

    /// Only annotate the service account; leave the role's trust policy alone.
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotate_only: bool,
}

impl Plugin for AwsIamForServiceAccount {
    fn kind(&self) -> &str {
        Self::KIND
    }

    fn service_account_annotations(&self) -> BTreeMap<String, String> {
        let mut annotations = BTreeMap::new();
        if !self.aws_iam_role.is_empty() {
            annotations.insert(AWS_ROLE_ARN_ANNOTATION.to_string(), self.aws_iam_role.clone());
        }
        annotations
    }

    fn manages_cloud_iam(&self) -> bool {
        !self.annotate_only
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PluginVariant for AwsIamForServiceAccount {
    const KIND: &'static str = "AwsIamForServiceAccount";
}
