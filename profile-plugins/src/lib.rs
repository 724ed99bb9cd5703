pub mod identity;

pub use identity::aws_iam::AwsIamForServiceAccount;
pub use identity::workload_identity::GcpWorkloadIdentity;

use profile_plugin::registry::PluginRegistry;

/// Register all built-in identity plugins.
pub fn register_all(registry: &mut PluginRegistry) {
    registry.register_variant::<GcpWorkloadIdentity>();
    registry.register_variant::<AwsIamForServiceAccount>();
}

/// A registry holding every built-in plugin.
pub fn builtin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    register_all(&mut registry);
    registry
}
