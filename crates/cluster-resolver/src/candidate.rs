//! Cluster candidates paired with their kubeconfig context

use crate::error::ResolveError;
use crate::resolvers::CredentialSource;
use cluster_models::{AuthMechanism, ClusterCandidate};
use kubeconfig::{CurrentContext, RawConfig};

/// A candidate together with the kubeconfig context it was detected in
///
/// Missing clusters or users in the kubeconfig leave the context at its
/// defaults; resolvers then report the empty required fields instead of failing
/// on the lookup.
#[derive(Debug, Clone)]
pub struct ParsedCandidate<'a> {
    /// The candidate as stored
    pub candidate: &'a ClusterCandidate,
    /// Its selected kubeconfig context
    pub context: CurrentContext,
}

impl<'a> ParsedCandidate<'a> {
    /// Parse the candidate's kubeconfig and select its context
    pub fn parse(candidate: &'a ClusterCandidate) -> Result<Self, ResolveError> {
        let raw = RawConfig::from_bytes(&candidate.kubeconfig)?;
        let context = raw.context(&candidate.context_name);
        Ok(Self { candidate, context })
    }

    /// Pair a candidate with an already-resolved context
    pub fn with_context(candidate: &'a ClusterCandidate, context: CurrentContext) -> Self {
        Self { candidate, context }
    }

    /// The declared mechanism; unknown tags are rejected here
    pub fn mechanism(&self) -> Result<AuthMechanism, ResolveError> {
        Ok(self.candidate.mechanism()?)
    }

    /// Raw credential data for the resolvers
    pub fn credential_source(&self) -> CredentialSource<'_> {
        CredentialSource {
            auth_info: &self.context.auth_info,
            kubeconfig: &self.candidate.kubeconfig,
        }
    }
}
