//! Cluster Store
//!
//! The persistence contract the onboarding engine writes through. Storage
//! engines implement [`ClusterStore`]; identifiers are always assigned by the
//! store, never by callers. Encryption of secret fields, where required, is the
//! implementation's concern.
//!
//! Enable the `in-memory` feature for [`InMemoryStore`], a thread-safe store
//! suitable for tests and one-shot tooling.

pub mod error;
#[path = "trait.rs"]
pub mod store_trait;
#[cfg(any(test, feature = "in-memory"))]
pub mod memory;

pub use error::StoreError;
pub use store_trait::ClusterStore;
#[cfg(any(test, feature = "in-memory"))]
pub use memory::InMemoryStore;
