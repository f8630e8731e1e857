//! In-memory ClusterStore
//!
//! Organized like a real backend, one module per table group:
//! - `credentials.rs` - credential records
//! - `clusters.rs` - clusters and cluster candidates

mod clusters;
mod credentials;

use crate::error::StoreError;
use crate::store_trait::ClusterStore;
use cluster_models::{Cluster, ClusterCandidate, ClusterDescriptor, CredentialRecord};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe store keeping every entity in memory
///
/// Clones share the same tables, so a clone handed to the engine can be
/// inspected by the test that created it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub(crate) credentials: Arc<Mutex<BTreeMap<u64, CredentialRecord>>>,
    pub(crate) clusters: Arc<Mutex<BTreeMap<u64, Cluster>>>,
    pub(crate) candidates: Arc<Mutex<BTreeMap<u64, ClusterCandidate>>>,
    // Counter for generating IDs
    pub(crate) next_id: Arc<Mutex<u64>>,
}

impl InMemoryStore {
    /// Empty store; the first id handed out is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored credential, in id order
    pub fn credentials(&self) -> Result<Vec<CredentialRecord>, StoreError> {
        Ok(lock(&self.credentials)?.values().cloned().collect())
    }

    /// Every stored cluster, in id order
    pub fn clusters(&self) -> Result<Vec<Cluster>, StoreError> {
        Ok(lock(&self.clusters)?.values().cloned().collect())
    }

    /// Generate next ID (ids start at 1; 0 means "not persisted")
    pub(crate) fn next_id(&self) -> Result<u64, StoreError> {
        let mut id = lock(&self.next_id)?;
        *id += 1;
        Ok(*id)
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|e| StoreError::Backend(format!("in-memory table poisoned: {}", e)))
}

#[async_trait::async_trait]
impl ClusterStore for InMemoryStore {
    async fn create_credential(&self, record: CredentialRecord) -> Result<CredentialRecord, StoreError> {
        credentials::create_credential(self, record)
    }

    async fn read_credential(&self, id: u64) -> Result<CredentialRecord, StoreError> {
        credentials::read_credential(self, id)
    }

    async fn create_cluster(&self, descriptor: ClusterDescriptor) -> Result<Cluster, StoreError> {
        clusters::create_cluster(self, descriptor)
    }

    async fn read_cluster(&self, id: u64) -> Result<Cluster, StoreError> {
        clusters::read_cluster(self, id)
    }

    async fn update_cluster(&self, cluster: Cluster) -> Result<Cluster, StoreError> {
        clusters::update_cluster(self, cluster)
    }

    async fn create_cluster_candidate(&self, candidate: ClusterCandidate) -> Result<ClusterCandidate, StoreError> {
        clusters::create_cluster_candidate(self, candidate)
    }

    async fn read_cluster_candidate(&self, id: u64) -> Result<ClusterCandidate, StoreError> {
        clusters::read_cluster_candidate(self, id)
    }
}

#[cfg(test)]
mod memory_test;
