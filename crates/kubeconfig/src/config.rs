//! Kubeconfig document model
//!
//! The YAML form stores clusters, contexts and users as lists of named
//! entries; [`RawConfig`] re-keys them by name and decodes the base64
//! `*-data` fields into bytes.

use crate::error::KubeconfigError;
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// A parsed kubeconfig, keyed by entry name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    /// Cluster entries by name
    pub clusters: BTreeMap<String, ClusterInfo>,
    /// Context entries by name
    pub contexts: BTreeMap<String, ContextInfo>,
    /// User entries by name
    pub auth_infos: BTreeMap<String, AuthInfo>,
    /// Name of the current context (may be empty)
    pub current_context: String,
}

/// Connection details of a named cluster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterInfo {
    /// File this entry was loaded from; empty when parsed from bytes
    pub location_of_origin: String,
    /// API server URL
    pub server: String,
    /// Server name used for TLS verification
    pub tls_server_name: String,
    /// Skip API server certificate verification
    pub insecure_skip_tls_verify: bool,
    /// Decoded `certificate-authority-data`
    pub certificate_authority_data: Vec<u8>,
}

/// A named (cluster, user) pairing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextInfo {
    /// Name of the cluster entry
    pub cluster: String,
    /// Name of the user entry
    pub auth_info: String,
    /// Default namespace
    pub namespace: String,
}

/// Credentials of a named user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthInfo {
    /// File this entry was loaded from; empty when parsed from bytes
    pub location_of_origin: String,
    /// Decoded `client-certificate-data`
    pub client_certificate_data: Vec<u8>,
    /// Decoded `client-key-data`
    pub client_key_data: Vec<u8>,
    /// Static bearer token
    pub token: String,
    /// Basic auth username
    pub username: String,
    /// Basic auth password
    pub password: String,
    /// User to impersonate (`as`)
    pub impersonate: String,
    /// Groups to impersonate (`as-groups`)
    pub impersonate_groups: Vec<String>,
    /// Auth provider plugin settings, e.g. OIDC
    pub auth_provider: Option<AuthProviderConfig>,
}

impl AuthInfo {
    /// Value of an auth-provider config key, if the provider and key exist
    pub fn auth_provider_value(&self, key: &str) -> Option<&str> {
        self.auth_provider
            .as_ref()
            .and_then(|provider| provider.config.get(key))
            .map(String::as_str)
    }
}

/// Auth-provider plugin block (e.g. `oidc`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthProviderConfig {
    /// Plugin name
    pub name: String,
    /// Plugin settings, verbatim
    pub config: BTreeMap<String, String>,
}

/// A context resolved to its cluster and user entries
///
/// Entries that are not present in the kubeconfig are left at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentContext {
    /// Selected context name
    pub context_name: String,
    /// Cluster the context points at
    pub cluster_name: String,
    /// That cluster entry, or defaults if missing
    pub cluster: ClusterInfo,
    /// User the context points at
    pub auth_info_name: String,
    /// That user entry, or defaults if missing
    pub auth_info: AuthInfo,
}

impl RawConfig {
    /// Parse kubeconfig YAML
    ///
    /// Empty input produces an empty config rather than an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KubeconfigError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let file: Option<KubeconfigFile> = serde_yaml::from_slice(bytes)?;
        let file = file.unwrap_or_default();

        let mut config = RawConfig {
            current_context: file.current_context,
            ..Default::default()
        };

        for entry in file.clusters.unwrap_or_default() {
            let fields = entry.cluster.unwrap_or_default();
            let certificate_authority_data =
                decode_data(&entry.name, "certificate-authority-data", &fields.certificate_authority_data)?;
            config.clusters.insert(
                entry.name,
                ClusterInfo {
                    location_of_origin: String::new(),
                    server: fields.server,
                    tls_server_name: fields.tls_server_name,
                    insecure_skip_tls_verify: fields.insecure_skip_tls_verify,
                    certificate_authority_data,
                },
            );
        }

        for entry in file.contexts.unwrap_or_default() {
            let fields = entry.context.unwrap_or_default();
            config.contexts.insert(
                entry.name,
                ContextInfo {
                    cluster: fields.cluster,
                    auth_info: fields.user,
                    namespace: fields.namespace,
                },
            );
        }

        for entry in file.users.unwrap_or_default() {
            let fields = entry.user.unwrap_or_default();
            let client_certificate_data =
                decode_data(&entry.name, "client-certificate-data", &fields.client_certificate_data)?;
            let client_key_data = decode_data(&entry.name, "client-key-data", &fields.client_key_data)?;
            config.auth_infos.insert(
                entry.name,
                AuthInfo {
                    location_of_origin: String::new(),
                    client_certificate_data,
                    client_key_data,
                    token: fields.token,
                    username: fields.username,
                    password: fields.password,
                    impersonate: fields.impersonate,
                    impersonate_groups: fields.impersonate_groups.unwrap_or_default(),
                    auth_provider: fields.auth_provider.map(|provider| AuthProviderConfig {
                        name: provider.name,
                        config: provider.config.unwrap_or_default(),
                    }),
                },
            );
        }

        debug!(
            "Parsed kubeconfig: {} clusters, {} contexts, {} users",
            config.clusters.len(),
            config.contexts.len(),
            config.auth_infos.len()
        );

        Ok(config)
    }

    /// Read and parse a kubeconfig file, recording `path` as every entry's origin
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KubeconfigError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|source| KubeconfigError::Io {
            path: origin.clone(),
            source,
        })?;

        let mut config = Self::from_bytes(&bytes)?;
        config.set_location_of_origin(&origin);
        Ok(config)
    }

    /// Stamp every cluster and user entry with the file it came from
    pub fn set_location_of_origin(&mut self, origin: &str) {
        for cluster in self.clusters.values_mut() {
            cluster.location_of_origin = origin.to_string();
        }
        for auth_info in self.auth_infos.values_mut() {
            auth_info.location_of_origin = origin.to_string();
        }
    }

    /// Resolve a context by name; an empty name selects the current context
    pub fn context(&self, name: &str) -> CurrentContext {
        let context_name = if name.is_empty() { &self.current_context } else { name };
        let context = self.contexts.get(context_name).cloned().unwrap_or_default();

        CurrentContext {
            context_name: context_name.to_string(),
            cluster: self.clusters.get(&context.cluster).cloned().unwrap_or_default(),
            cluster_name: context.cluster,
            auth_info: self.auth_infos.get(&context.auth_info).cloned().unwrap_or_default(),
            auth_info_name: context.auth_info,
        }
    }

    /// Resolve the context named by `current-context`
    pub fn current_context(&self) -> CurrentContext {
        self.context("")
    }
}

fn decode_data(entry: &str, field: &'static str, value: &str) -> Result<Vec<u8>, KubeconfigError> {
    if value.is_empty() {
        return Ok(Vec::new());
    }
    general_purpose::STANDARD
        .decode(value.trim())
        .map_err(|source| KubeconfigError::InvalidData {
            entry: entry.to_string(),
            field,
            source,
        })
}

// On-disk YAML shape. Every section may be absent or null.

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct KubeconfigFile {
    current_context: String,
    clusters: Option<Vec<NamedCluster>>,
    contexts: Option<Vec<NamedContext>>,
    users: Option<Vec<NamedUser>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NamedCluster {
    name: String,
    cluster: Option<ClusterFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct ClusterFields {
    server: String,
    certificate_authority_data: String,
    tls_server_name: String,
    insecure_skip_tls_verify: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NamedContext {
    name: String,
    context: Option<ContextFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContextFields {
    cluster: String,
    user: String,
    namespace: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NamedUser {
    name: String,
    user: Option<UserFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct UserFields {
    client_certificate_data: String,
    client_key_data: String,
    token: String,
    username: String,
    password: String,
    #[serde(rename = "as")]
    impersonate: String,
    #[serde(rename = "as-groups")]
    impersonate_groups: Option<Vec<String>>,
    auth_provider: Option<AuthProviderFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuthProviderFields {
    name: String,
    config: Option<BTreeMap<String, String>>,
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
