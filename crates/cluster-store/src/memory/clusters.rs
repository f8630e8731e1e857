//! Clusters and cluster candidates for InMemoryStore

use super::{lock, InMemoryStore};
use crate::error::StoreError;
use cluster_models::{Cluster, ClusterCandidate, ClusterDescriptor};
use tracing::debug;

pub fn create_cluster(store: &InMemoryStore, descriptor: ClusterDescriptor) -> Result<Cluster, StoreError> {
    let cluster = Cluster {
        id: store.next_id()?,
        created_at: Some(chrono::Utc::now()),
        descriptor,
    };

    lock(&store.clusters)?.insert(cluster.id, cluster.clone());
    debug!("Stored cluster {} ({})", cluster.id, cluster.descriptor.name);
    Ok(cluster)
}

pub fn read_cluster(store: &InMemoryStore, id: u64) -> Result<Cluster, StoreError> {
    lock(&store.clusters)?
        .get(&id)
        .cloned()
        .ok_or(StoreError::NotFound { entity: "cluster", id })
}

pub fn update_cluster(store: &InMemoryStore, cluster: Cluster) -> Result<Cluster, StoreError> {
    let mut clusters = lock(&store.clusters)?;
    let existing = clusters
        .get_mut(&cluster.id)
        .ok_or(StoreError::NotFound { entity: "cluster", id: cluster.id })?;

    // created_at belongs to the store
    existing.descriptor = cluster.descriptor;
    Ok(existing.clone())
}

pub fn create_cluster_candidate(
    store: &InMemoryStore,
    mut candidate: ClusterCandidate,
) -> Result<ClusterCandidate, StoreError> {
    candidate.id = store.next_id()?;
    candidate.created_at = Some(chrono::Utc::now());

    lock(&store.candidates)?.insert(candidate.id, candidate.clone());
    debug!("Stored cluster candidate {} ({})", candidate.id, candidate.name);
    Ok(candidate)
}

pub fn read_cluster_candidate(store: &InMemoryStore, id: u64) -> Result<ClusterCandidate, StoreError> {
    lock(&store.candidates)?
        .get(&id)
        .cloned()
        .ok_or(StoreError::NotFound { entity: "cluster candidate", id })
}
