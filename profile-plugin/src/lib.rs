pub mod factory;
pub mod pipeline;
pub mod plugin;
pub mod registry;

pub use factory::{Instantiation, PluginFactory};
pub use pipeline::{ResolvedPlugins, SpecSource, resolve_plugins};
pub use plugin::{Plugin, PluginBuilder, PluginVariant};
pub use registry::PluginRegistry;
