//! Listing the clusters a kubeconfig can reach

use crate::config::RawConfig;
use serde::{Deserialize, Serialize};

/// One reachable cluster: a context whose cluster and user both exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Cluster entry name
    pub name: String,
    /// API server URL
    pub server: String,
    /// Context joining the cluster and user
    pub context: String,
    /// User entry name
    pub user: String,
}

impl RawConfig {
    /// Every joinable context, in context-name order
    pub fn all_cluster_configs(&self) -> Vec<ClusterConfig> {
        self.joined_contexts(|_| true)
    }

    /// Joinable contexts whose cluster name is in `allowed`
    pub fn cluster_configs(&self, allowed: &[String]) -> Vec<ClusterConfig> {
        self.joined_contexts(|cluster| allowed.iter().any(|name| name == cluster))
    }

    fn joined_contexts(&self, include: impl Fn(&str) -> bool) -> Vec<ClusterConfig> {
        self.contexts
            .iter()
            .filter_map(|(context_name, context)| {
                let cluster = self.clusters.get(&context.cluster)?;
                self.auth_infos.get(&context.auth_info)?;
                include(&context.cluster).then(|| ClusterConfig {
                    name: context.cluster.clone(),
                    server: cluster.server.clone(),
                    context: context_name.clone(),
                    user: context.auth_info.clone(),
                })
            })
            .collect()
    }
}
