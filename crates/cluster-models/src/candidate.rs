//! Detected cluster connections awaiting credential resolution

use crate::mechanism::{AuthMechanism, UnknownMechanism};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cluster connection detected in an uploaded kubeconfig
///
/// The mechanism tag and kubeconfig bytes come from outside the trust boundary;
/// nothing here has been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClusterCandidate {
    /// Store-assigned id (0 until persisted)
    pub id: u64,
    /// Declared mechanism tag, parsed with [`ClusterCandidate::mechanism`]
    pub auth_mechanism: String,
    /// Project the candidate was detected for
    pub project_id: u64,
    /// Display name for the cluster
    pub name: String,
    /// API server URL from the kubeconfig
    pub server: String,
    /// Kubeconfig context the candidate was detected from (empty = current context)
    #[serde(default)]
    pub context_name: String,
    /// Raw kubeconfig the candidate was detected in
    #[serde(default)]
    pub kubeconfig: Vec<u8>,
    /// Set by the store on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ClusterCandidate {
    /// Parse the declared mechanism tag
    pub fn mechanism(&self) -> Result<AuthMechanism, UnknownMechanism> {
        self.auth_mechanism.parse()
    }
}
