//! Unit tests for the cluster builder

use super::*;
use cluster_models::ClusterCandidate;
use kubeconfig::{AuthInfo, ClusterInfo, CurrentContext};

fn candidate(server: &str) -> ClusterCandidate {
    ClusterCandidate {
        id: 5,
        auth_mechanism: "x509".to_string(),
        project_id: 9,
        name: "dev".to_string(),
        server: server.to_string(),
        ..Default::default()
    }
}

fn context() -> CurrentContext {
    CurrentContext {
        context_name: "dev".to_string(),
        cluster_name: "dev-cluster".to_string(),
        cluster: ClusterInfo {
            location_of_origin: "/home/me/.kube/config".to_string(),
            server: "https://dev.example.com:6443".to_string(),
            tls_server_name: "api.dev.internal".to_string(),
            insecure_skip_tls_verify: true,
            certificate_authority_data: b"kubeconfig-ca".to_vec(),
        },
        auth_info_name: "dev-admin".to_string(),
        auth_info: AuthInfo {
            location_of_origin: "/home/me/.kube/config".to_string(),
            impersonate: "deployer".to_string(),
            impersonate_groups: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..Default::default()
        },
    }
}

#[test]
fn test_build_copies_candidate_and_context() {
    let cc = candidate("https://dev.example.com:6443");
    let parsed = ParsedCandidate::with_context(&cc, context());

    let descriptor = build(&parsed, AuthMechanism::Certificate, 11, &ResolverOverrides::default()).unwrap();

    assert_eq!(descriptor.project_id, 9);
    assert_eq!(descriptor.name, "dev");
    assert_eq!(descriptor.server, "https://dev.example.com:6443");
    assert_eq!(descriptor.cluster_location_of_origin, "/home/me/.kube/config");
    assert_eq!(descriptor.user_location_of_origin, "/home/me/.kube/config");
    assert_eq!(descriptor.tls_server_name, "api.dev.internal");
    assert!(descriptor.insecure_skip_tls_verify);
    assert_eq!(descriptor.user_impersonate, "deployer");
    assert_eq!(descriptor.user_impersonate_groups, "a,b,c");
    assert_eq!(descriptor.certificate_authority_data, b"kubeconfig-ca");
    assert_eq!(descriptor.credential, CredentialRef::Certificate(11));
}

#[test]
fn test_flatten_groups() {
    assert_eq!(flatten_groups(&["a".to_string(), "b".to_string(), "c".to_string()]), "a,b,c");
    assert_eq!(flatten_groups(&["solo".to_string()]), "solo");
    assert_eq!(flatten_groups(&["x".to_string(), "x".to_string()]), "x,x");
    assert_eq!(flatten_groups(&[]), "");
}

#[test]
fn test_ca_override_is_decoded() {
    let cc = candidate("https://dev.example.com");
    let parsed = ParsedCandidate::with_context(&cc, context());
    let overrides = ResolverOverrides {
        cluster_ca_data: "b3ZlcnJpZGU=".to_string(),
        ..Default::default()
    };

    let descriptor = build(&parsed, AuthMechanism::BearerToken, 1, &overrides).unwrap();
    assert_eq!(descriptor.certificate_authority_data, b"override");
}

#[test]
fn test_malformed_ca_override_fails() {
    let cc = candidate("https://dev.example.com");
    let parsed = ParsedCandidate::with_context(&cc, context());
    let overrides = ResolverOverrides {
        cluster_ca_data: "YR==".to_string(),
        ..Default::default()
    };

    let err = build(&parsed, AuthMechanism::BearerToken, 1, &overrides).unwrap_err();
    assert!(matches!(err, ResolveError::MalformedEncoding { field: "cluster_ca_data", .. }));
}

#[test]
fn test_replace_host_keeps_port() {
    assert_eq!(
        replace_host("https://old.example.com:6443", "new.example.com").unwrap(),
        "https://new.example.com:6443"
    );
}

#[test]
fn test_replace_host_without_port() {
    assert_eq!(
        replace_host("https://old.example.com", "new.example.com").unwrap(),
        "https://new.example.com"
    );
}

#[test]
fn test_replace_host_keeps_path_and_trailing_slash() {
    assert_eq!(
        replace_host("https://old.example.com/", "new.example.com").unwrap(),
        "https://new.example.com/"
    );
    assert_eq!(
        replace_host("https://rancher.example.com/k8s/clusters/c-1", "10.0.0.5").unwrap(),
        "https://10.0.0.5/k8s/clusters/c-1"
    );
}

#[test]
fn test_replace_host_rejects_unparseable_server() {
    let err = replace_host("not a url", "new.example.com").unwrap_err();
    assert!(matches!(err, ResolveError::InvalidServerUrl { .. }));
}

#[test]
fn test_hostname_override_applies_to_descriptor() {
    let cc = candidate("https://old.example.com:6443");
    let parsed = ParsedCandidate::with_context(&cc, context());
    let overrides = ResolverOverrides {
        cluster_hostname: "new.example.com".to_string(),
        ..Default::default()
    };

    let descriptor = build(&parsed, AuthMechanism::Oidc, 2, &overrides).unwrap();
    assert_eq!(descriptor.server, "https://new.example.com:6443");
}

#[test]
fn test_exactly_one_credential_slot_is_set() {
    let cc = candidate("https://dev.example.com");
    let parsed = ParsedCandidate::with_context(&cc, context());

    for mechanism in AuthMechanism::ALL {
        let descriptor = build(&parsed, mechanism, 77, &ResolverOverrides::default()).unwrap();
        let occupied: Vec<_> = AuthMechanism::ALL
            .into_iter()
            .filter_map(|slot| descriptor.credential.slot(slot).map(|id| (slot, id)))
            .collect();
        assert_eq!(occupied, vec![(mechanism, 77)]);
        assert_eq!(descriptor.auth_mechanism(), mechanism);
    }
}

#[test]
fn test_hostname_with_port_sets_port() {
    assert_eq!(
        replace_host("https://old.example.com", "new.example.com:8443").unwrap(),
        "https://new.example.com:8443"
    );
}

#[test]
fn test_hostname_port_replaces_server_port() {
    assert_eq!(
        replace_host("https://old.example.com:6443", "new.example.com:8443").unwrap(),
        "https://new.example.com:8443"
    );
    assert_eq!(
        replace_host("https://old.example.com:6443/k8s", "[::1]:9443").unwrap(),
        "https://[::1]:9443/k8s"
    );
}

#[test]
fn test_hostname_with_bad_port_is_rejected() {
    for hostname in ["new.example.com:https", "new.example.com:", "new.example.com:70000"] {
        let err = replace_host("https://old.example.com:6443", hostname).unwrap_err();
        assert!(
            matches!(err, ResolveError::InvalidServerUrl { source: url::ParseError::InvalidPort, .. }),
            "{hostname}: {err:?}"
        );
    }
}

#[test]
fn test_replace_host_keeps_explicit_default_port() {
    assert_eq!(
        replace_host("https://old.example.com:443", "new.example.com").unwrap(),
        "https://new.example.com:443"
    );
    assert_eq!(
        replace_host("https://old.example.com:443/api", "new.example.com").unwrap(),
        "https://new.example.com:443/api"
    );
    assert_eq!(
        replace_host("https://old.example.com:6443", "new.example.com:443").unwrap(),
        "https://new.example.com:443"
    );
}
