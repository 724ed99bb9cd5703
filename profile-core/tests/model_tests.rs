use profile_core::configmap::{
    ConfigMap, ConfigMapRef, PLUGIN_CONFIG_DATA_KEY, PLUGIN_CONFIG_MAP_NAME,
    PLUGIN_CONFIG_MAP_NAMESPACE,
};
use profile_core::error::ProfileError;
use profile_core::plugin_config::{PluginSpec, PluginsConfiguration};

// =============================================================================
// PluginsConfiguration Tests
// =============================================================================

#[test]
fn test_two_plugin_document_keeps_order() {
    let yaml = r#"
plugins:
  - kind: WorkloadIdentity
    enabled: true
    config:
      gcpServiceAccount: "test@project.iam.gserviceaccount.com"
  - kind: AwsIamForServiceAccount
    enabled: true
    config:
      awsIamRole: "arn:aws:iam::123456789:role/test"
      annotateOnly: false
"#;
    let cfg = PluginsConfiguration::from_yaml(yaml, "kubeflow/plugins").unwrap();
    assert_eq!(cfg.len(), 2);
    assert_eq!(cfg.kinds(), vec!["WorkloadIdentity", "AwsIamForServiceAccount"]);
    assert_eq!(
        cfg.plugins[0].config["gcpServiceAccount"],
        serde_json::json!("test@project.iam.gserviceaccount.com")
    );
    assert_eq!(cfg.plugins[1].config["annotateOnly"], serde_json::json!(false));
}

#[test]
fn test_disabled_entries_are_still_listed() {
    let yaml = r#"
plugins:
  - kind: WorkloadIdentity
    enabled: true
  - kind: AwsIamForServiceAccount
    enabled: false
    config:
      awsIamRole: ""
"#;
    let cfg = PluginsConfiguration::from_yaml(yaml, "test").unwrap();
    assert_eq!(cfg.len(), 2);
    assert_eq!(cfg.enabled().count(), 1);
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = PluginsConfiguration::from_yaml("invalid yaml: [[[", "kubeflow/plugins").unwrap_err();
    assert!(matches!(err, ProfileError::Parse { .. }));
    assert!(err.is_configuration());
    assert!(!err.is_transport());
}

#[test]
fn test_wrong_shape_is_parse_error() {
    // `plugins` must be a sequence
    let err = PluginsConfiguration::from_yaml("plugins: WorkloadIdentity", "test").unwrap_err();
    assert!(matches!(err, ProfileError::Parse { .. }));
}

#[test]
fn test_document_without_plugins_key_is_empty() {
    let cfg = PluginsConfiguration::from_yaml("other: value\n", "test").unwrap();
    assert!(cfg.is_empty());
}

#[test]
fn test_json_payload_is_accepted() {
    // JSON is a YAML subset
    let json = r#"{"plugins":[{"kind":"WorkloadIdentity","enabled":true,"config":{"gcpServiceAccount":"a@b"}}]}"#;
    let cfg = PluginsConfiguration::from_yaml(json, "test").unwrap();
    assert_eq!(cfg.kinds(), vec!["WorkloadIdentity"]);
}

#[test]
fn test_plugin_spec_serialization_roundtrip() {
    let spec = PluginSpec::new("AwsIamForServiceAccount", true)
        .with("awsIamRole", "arn:aws:iam::1:role/x")
        .with("annotateOnly", true);
    let json = serde_json::to_string(&spec).unwrap();
    let back: PluginSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}

// =============================================================================
// ConfigMap Tests
// =============================================================================

#[test]
fn test_configmap_builder() {
    let cm = ConfigMap::new(PLUGIN_CONFIG_MAP_NAME, PLUGIN_CONFIG_MAP_NAMESPACE)
        .with_data(PLUGIN_CONFIG_DATA_KEY, "plugins: []");
    assert_eq!(cm.metadata.name, "profile-controller-plugins-config");
    assert_eq!(cm.get("plugins.yaml"), Some("plugins: []"));
    assert!(cm.get("wrong-key").is_none());
}

#[test]
fn test_configmap_json_roundtrip() {
    let cm = ConfigMap::new("a", "b").with_data("k", "v");
    let bytes = serde_json::to_vec(&cm).unwrap();
    let back: ConfigMap = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(back, cm);
}

#[test]
fn test_configmap_ref_partial_override() {
    let r: ConfigMapRef = serde_json::from_str(r#"{"namespace":"profiles"}"#).unwrap();
    assert_eq!(r.name, PLUGIN_CONFIG_MAP_NAME);
    assert_eq!(r.namespace, "profiles");
    assert_eq!(r.data_key, PLUGIN_CONFIG_DATA_KEY);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_error_classification() {
    assert!(ProfileError::NotFound("kubeflow/x".into()).is_not_found());
    assert!(ProfileError::Store("denied".into()).is_transport());
    let timeout = ProfileError::Timeout {
        resource: "kubeflow/x".into(),
        timeout_ms: 10,
    };
    assert!(timeout.is_transport());
    assert_eq!(timeout.to_string(), "Fetch of kubeflow/x timed out after 10ms");
    assert!(!timeout.is_configuration());
    assert!(!ProfileError::NotFound("kubeflow/x".into()).is_configuration());
}
