//! Cluster descriptor construction
//!
//! Pure apart from decoding and URL reparsing: the descriptor is returned, not
//! stored.

use crate::candidate::ParsedCandidate;
use crate::encoding::sniff_field;
use crate::error::ResolveError;
use crate::merge::coalesce_with;
use cluster_models::{AuthMechanism, ClusterDescriptor, CredentialRef, ResolverOverrides};
use tracing::debug;
use url::{Position, Url};

/// Build the descriptor for a candidate whose credential has been resolved
///
/// Steps, in order:
/// 1. Copy name, server and project from the candidate, and provenance
///    (locations of origin, TLS server name, insecure flag, impersonation)
///    from its kubeconfig context
/// 2. Join impersonation groups with commas
/// 3. Take the cluster CA from the kubeconfig unless `cluster_ca_data` is
///    overridden (sniffed for base64; decode failures are errors)
/// 4. Replace the server host with `cluster_hostname`, keeping the server's
///    port unless the override names its own
/// 5. Reference `credential_id` in `mechanism`'s slot
pub fn build(
    candidate: &ParsedCandidate<'_>,
    mechanism: AuthMechanism,
    credential_id: u64,
    overrides: &ResolverOverrides,
) -> Result<ClusterDescriptor, ResolveError> {
    let cc = candidate.candidate;
    let cluster = &candidate.context.cluster;
    let auth_info = &candidate.context.auth_info;

    let mut descriptor = ClusterDescriptor {
        project_id: cc.project_id,
        name: cc.name.clone(),
        server: cc.server.clone(),
        cluster_location_of_origin: cluster.location_of_origin.clone(),
        tls_server_name: cluster.tls_server_name.clone(),
        insecure_skip_tls_verify: cluster.insecure_skip_tls_verify,
        user_location_of_origin: auth_info.location_of_origin.clone(),
        user_impersonate: auth_info.impersonate.clone(),
        user_impersonate_groups: flatten_groups(&auth_info.impersonate_groups),
        certificate_authority_data: coalesce_with(
            cluster.certificate_authority_data.clone(),
            &overrides.cluster_ca_data,
            |value| sniff_field("cluster_ca_data", value),
        )?,
        credential: CredentialRef::new(mechanism, credential_id),
    };

    if !overrides.cluster_hostname.is_empty() {
        descriptor.server = replace_host(&descriptor.server, &overrides.cluster_hostname)?;
        debug!("Server for {} rewritten to {}", descriptor.name, descriptor.server);
    }

    Ok(descriptor)
}

/// Join impersonation groups, keeping order and duplicates
pub fn flatten_groups(groups: &[String]) -> String {
    groups.join(",")
}

/// Swap the host of `server` for `hostname`, preserving scheme, port and path
///
/// `https://old:6443` becomes `https://new:6443`; `https://old` becomes
/// `https://new`. A port written in `hostname` (`new:8443`) replaces the
/// server's port. Explicit ports are kept as written even when they equal the
/// scheme default, so `https://old:443` becomes `https://new:443`.
pub fn replace_host(server: &str, hostname: &str) -> Result<String, ResolveError> {
    let invalid = |source: url::ParseError| ResolveError::InvalidServerUrl {
        server: server.to_string(),
        source,
    };

    let mut url = Url::parse(server).map_err(invalid)?;
    let (host, override_port) = split_port(hostname);
    url.set_host(Some(host)).map_err(invalid)?;

    let port = match override_port {
        Some(port) => Some(
            port.parse::<u16>()
                .map_err(|_| invalid(url::ParseError::InvalidPort))?,
        ),
        None => url.port().or_else(|| explicit_default_port(server, &url)),
    };
    if let Some(port) = port {
        url.set_port(Some(port))
            .map_err(|()| invalid(url::ParseError::InvalidPort))?;
    }

    // Url always serializes an empty path as "/"; keep the caller's form
    let bare_root = url.path() == "/" && url.query().is_none() && url.fragment().is_none();
    let mut replaced = match port {
        // Url never serializes a default port, so splice it back in
        Some(port) if url.port().is_none() => format!(
            "{}:{}{}",
            &url[..Position::AfterHost],
            port,
            &url[Position::BeforePath..]
        ),
        _ => String::from(url),
    };
    if bare_root && !server.ends_with('/') {
        replaced.pop();
    }

    Ok(replaced)
}

/// Split a trailing `:port` off a hostname; bracketed IPv6 literals are kept whole
fn split_port(hostname: &str) -> (&str, Option<&str>) {
    match hostname.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') || host.ends_with(']') => (host, Some(port)),
        _ => (hostname, None),
    }
}

/// The scheme-default port, if `server` spells it out in its authority
fn explicit_default_port(server: &str, url: &Url) -> Option<u16> {
    let default = url.port_or_known_default()?;
    let (_, rest) = server.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    authority.ends_with(&format!(":{}", default)).then_some(default)
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
