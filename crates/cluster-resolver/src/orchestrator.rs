//! Resolution entry points
//!
//! [`ClusterResolver`] is what request handlers call. It owns the ordering
//! guarantee: a cluster is only built once its credential has been stored, so
//! no cluster ever references a failed resolution.

use crate::builder::build;
use crate::candidate::ParsedCandidate;
use crate::dispatcher::dispatch;
use crate::encoding::sniff_field;
use crate::error::ResolveError;
use cluster_models::{Cluster, ClusterCandidate, ClusterDescriptor, CreateClusterRequest, CredentialRef, ResolverOverrides};
use cluster_store::ClusterStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Resolves candidates and manages the clusters built from them
#[derive(Debug)]
pub struct ClusterResolver<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for ClusterResolver<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ClusterResolver<S>
where
    S: ClusterStore + ?Sized,
{
    /// Creates a new resolver writing through `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolve a candidate's credential, build its cluster and persist it
    ///
    /// Errors from dispatch or build are returned as-is. If building fails
    /// after the credential was stored, the credential is left in place.
    pub async fn resolve_and_create(
        &self,
        candidate: &ClusterCandidate,
        overrides: &ResolverOverrides,
        project_id: u64,
        user_id: u64,
    ) -> Result<Cluster, ResolveError> {
        let parsed = ParsedCandidate::parse(candidate)?;
        self.resolve_parsed(&parsed, overrides, project_id, user_id).await
    }

    /// Same as [`Self::resolve_and_create`] for a candidate whose context was
    /// already selected, e.g. one loaded from disk with its location of origin
    pub async fn resolve_parsed(
        &self,
        parsed: &ParsedCandidate<'_>,
        overrides: &ResolverOverrides,
        project_id: u64,
        user_id: u64,
    ) -> Result<Cluster, ResolveError> {
        let candidate = parsed.candidate;
        let (mechanism, credential_id) =
            dispatch(&*self.store, parsed, overrides, project_id, user_id).await?;

        let descriptor = build(parsed, mechanism, credential_id, overrides).inspect_err(|e| {
            warn!(
                "Credential {} stored but cluster for candidate {} could not be built: {}",
                credential_id, candidate.id, e
            );
        })?;

        let cluster = self.store.create_cluster(descriptor).await?;
        info!(
            "Created cluster {} ({}) from candidate {} using {} credential {}",
            cluster.id, cluster.descriptor.name, candidate.id, mechanism, credential_id
        );
        Ok(cluster)
    }

    /// Load a stored candidate by id and resolve it
    pub async fn resolve_candidate(
        &self,
        candidate_id: u64,
        overrides: &ResolverOverrides,
        project_id: u64,
        user_id: u64,
    ) -> Result<Cluster, ResolveError> {
        let candidate = self.store.read_cluster_candidate(candidate_id).await?;
        self.resolve_and_create(&candidate, overrides, project_id, user_id).await
    }

    /// Register a cloud-managed cluster against an existing GCP or AWS credential
    ///
    /// The CA bundle, when given, is sniffed for base64.
    pub async fn create_cluster(&self, request: &CreateClusterRequest) -> Result<Cluster, ResolveError> {
        let credential = match (request.gcp_integration_id, request.aws_integration_id) {
            (Some(id), _) if id != 0 => CredentialRef::Gcp(id),
            (_, Some(id)) if id != 0 => CredentialRef::Aws(id),
            _ => {
                return Err(ResolveError::InvalidRequest(
                    "must include aws or gcp integration id".to_string(),
                ));
            }
        };

        let record = self.store.read_credential(credential.credential_id()).await?;
        if record.mechanism() != credential.mechanism() {
            return Err(ResolveError::InvalidRequest(format!(
                "credential {} is a {} credential, not {}",
                record.id,
                record.mechanism(),
                credential.mechanism()
            )));
        }

        let mut descriptor = ClusterDescriptor::new(request.project_id, &request.name, &request.server, credential);
        if !request.certificate_authority_data.is_empty() {
            descriptor.certificate_authority_data =
                sniff_field("certificate_authority_data", &request.certificate_authority_data)?;
        }

        let cluster = self.store.create_cluster(descriptor).await?;
        info!(
            "Created cluster {} ({}) with {} credential {}",
            cluster.id,
            cluster.descriptor.name,
            credential.mechanism(),
            credential.credential_id()
        );
        Ok(cluster)
    }

    /// Change a cluster's display name; nothing else is touched
    pub async fn rename_cluster(&self, cluster_id: u64, name: &str) -> Result<Cluster, ResolveError> {
        let mut cluster = self.store.read_cluster(cluster_id).await?;
        cluster.descriptor.name = name.to_string();

        let cluster = self.store.update_cluster(cluster).await?;
        info!("Renamed cluster {} to {}", cluster.id, cluster.descriptor.name);
        Ok(cluster)
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod orchestrator_test;
