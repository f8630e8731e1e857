//! Cluster Onboarding
//!
//! Takes the current context of a kubeconfig file, resolves its credential
//! with the declared auth mechanism and prints the resulting cluster as JSON.
//!
//! Configuration is read from environment variables:
//! - `KUBECONFIG` path to the kubeconfig (required)
//! - `AUTH_MECHANISM` one of x509, bearer, basic, local, oidc, gcp, aws (required)
//! - `PROJECT_ID`, `USER_ID` numeric owners (default 1)
//! - `CLUSTER_NAME` display name (defaults to the context's cluster name)
//! - `RESOLVER_OVERRIDES` path to a JSON file of operator overrides

mod error;

use crate::error::OnboardError;
use cluster_models::{AuthMechanism, ClusterCandidate, ResolverOverrides};
use cluster_resolver::{ClusterResolver, ParsedCandidate, ResolveError};
use cluster_store::{ClusterStore, InMemoryStore};
use kubeconfig::RawConfig;
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), OnboardError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting cluster onboarding");

    // Load configuration from environment variables
    let kubeconfig_path = required("KUBECONFIG")?;
    let mechanism: AuthMechanism = required("AUTH_MECHANISM")?
        .parse()
        .map_err(|e| OnboardError::InvalidConfig(format!("AUTH_MECHANISM: {}", e)))?;
    let project_id = numeric("PROJECT_ID")?;
    let user_id = numeric("USER_ID")?;
    let overrides = match env::var("RESOLVER_OVERRIDES").ok().filter(|p| !p.is_empty()) {
        Some(path) => read_overrides(&path)?,
        None => ResolverOverrides::default(),
    };

    info!("Configuration:");
    info!("  Kubeconfig: {}", kubeconfig_path);
    info!("  Auth mechanism: {}", mechanism);
    info!("  Project: {}, user: {}", project_id, user_id);
    info!("  Overrides: {:?}", overrides.supplied_fields());

    let (kubeconfig, config) = read_kubeconfig(&kubeconfig_path)?;
    for found in config.all_cluster_configs() {
        info!("Found cluster {} ({}) in context {}", found.name, found.server, found.context);
    }

    let context = config.current_context();
    if context.cluster.server.is_empty() {
        return Err(OnboardError::InvalidConfig(format!(
            "current context {:?} has no cluster server",
            context.context_name
        )));
    }

    let store = Arc::new(InMemoryStore::new());
    let candidate = store
        .create_cluster_candidate(ClusterCandidate {
            auth_mechanism: mechanism.to_string(),
            project_id,
            name: env::var("CLUSTER_NAME")
                .ok()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| context.cluster_name.clone()),
            server: context.cluster.server.clone(),
            context_name: context.context_name.clone(),
            kubeconfig,
            ..Default::default()
        })
        .await
        .map_err(ResolveError::from)?;

    let resolver = ClusterResolver::new(store);
    let parsed = ParsedCandidate::with_context(&candidate, context);
    let cluster = resolver
        .resolve_parsed(&parsed, &overrides, project_id, user_id)
        .await?;

    info!("Onboarded cluster {} ({})", cluster.id, cluster.descriptor.name);
    println!("{}", serde_json::to_string_pretty(&cluster)?);

    Ok(())
}

fn required(name: &str) -> Result<String, OnboardError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| OnboardError::InvalidConfig(format!("{} environment variable is required", name)))
}

fn numeric(name: &str) -> Result<u64, OnboardError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| OnboardError::InvalidConfig(format!("{} must be a number: {}", name, e))),
        Err(_) => Ok(1),
    }
}

/// Read the kubeconfig once, returning its bytes and the parsed config stamped
/// with `path` as the location of origin
fn read_kubeconfig(path: &str) -> Result<(Vec<u8>, RawConfig), OnboardError> {
    let bytes = std::fs::read(path).map_err(|source| OnboardError::Io {
        path: path.to_string(),
        source,
    })?;
    let mut config = RawConfig::from_bytes(&bytes).map_err(ResolveError::from)?;
    config.set_location_of_origin(path);
    Ok((bytes, config))
}

fn read_overrides(path: &str) -> Result<ResolverOverrides, OnboardError> {
    let bytes = std::fs::read(path).map_err(|source| OnboardError::Io {
        path: path.to_string(),
        source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}
