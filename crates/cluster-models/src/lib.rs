//! Cluster Onboarding Models
//!
//! Types shared by the kubeconfig onboarding crates:
//! - `ClusterCandidate`: a detected, unresolved cluster connection
//! - `ResolverOverrides`: operator-supplied values that win over raw kubeconfig data
//! - `CredentialRecord`: a persisted credential for exactly one auth mechanism
//! - `ClusterDescriptor` / `Cluster`: the connectable cluster built from a candidate

pub mod candidate;
pub mod cluster;
pub mod credential;
pub mod mechanism;
pub mod overrides;

pub use candidate::*;
pub use cluster::*;
pub use credential::*;
pub use mechanism::*;
pub use overrides::*;
