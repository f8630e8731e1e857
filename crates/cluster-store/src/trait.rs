//! ClusterStore trait
//!
//! Abstracts entity persistence so the onboarding engine can run against a
//! database-backed store in production and [`crate::InMemoryStore`] in tests.

use crate::error::StoreError;
use cluster_models::{Cluster, ClusterCandidate, ClusterDescriptor, CredentialRecord};

/// Create/read operations for every entity the onboarding engine touches
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait ClusterStore: Send + Sync {
    // Credentials
    async fn create_credential(&self, record: CredentialRecord) -> Result<CredentialRecord, StoreError>;
    async fn read_credential(&self, id: u64) -> Result<CredentialRecord, StoreError>;

    // Clusters
    async fn create_cluster(&self, descriptor: ClusterDescriptor) -> Result<Cluster, StoreError>;
    async fn read_cluster(&self, id: u64) -> Result<Cluster, StoreError>;
    async fn update_cluster(&self, cluster: Cluster) -> Result<Cluster, StoreError>;

    // Cluster candidates
    async fn create_cluster_candidate(&self, candidate: ClusterCandidate) -> Result<ClusterCandidate, StoreError>;
    async fn read_cluster_candidate(&self, id: u64) -> Result<ClusterCandidate, StoreError>;
}
