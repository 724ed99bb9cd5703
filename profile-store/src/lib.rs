pub mod loader;
pub mod memory;
pub mod schema;
pub mod store;

#[cfg(feature = "etcd")]
pub mod etcd;

pub use loader::{ConfigLoader, LoadOutcome};
pub use memory::MemoryStore;
pub use store::ConfigMapStore;
