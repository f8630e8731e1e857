//! Unit tests for ClusterResolver

use super::*;
use cluster_models::*;
use cluster_store::{InMemoryStore, StoreError};

fn resolver() -> (InMemoryStore, ClusterResolver<InMemoryStore>) {
    let store = InMemoryStore::new();
    (store.clone(), ClusterResolver::new(Arc::new(store)))
}

async fn gcp_credential(store: &InMemoryStore) -> u64 {
    let record = CredentialRecord::new(
        1,
        1,
        CredentialMaterial::Gcp(GcpCredential {
            gcp_key_data: b"{}".to_vec(),
        }),
    );
    store.create_credential(record).await.unwrap().id
}

#[tokio::test]
async fn test_resolve_candidate_unknown_id_is_not_found() {
    let (_, resolver) = resolver();

    let err = resolver
        .resolve_candidate(404, &ResolverOverrides::default(), 1, 1)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(
        err,
        ResolveError::Store(StoreError::NotFound { entity: "cluster candidate", id: 404 })
    ));
}

#[tokio::test]
async fn test_build_failure_leaves_no_cluster() {
    let (store, resolver) = resolver();
    let candidate = ClusterCandidate {
        auth_mechanism: "gcp".to_string(),
        server: "not a url".to_string(),
        ..Default::default()
    };
    let overrides = ResolverOverrides {
        gcp_key_data: "{}".to_string(),
        cluster_hostname: "new.example.com".to_string(),
        ..Default::default()
    };

    let err = resolver
        .resolve_and_create(&candidate, &overrides, 1, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::InvalidServerUrl { .. }));
    assert!(store.clusters().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_dispatch_skips_build() {
    let (store, resolver) = resolver();
    // A malformed CA override would fail the build; dispatch must fail first
    let candidate = ClusterCandidate {
        auth_mechanism: "bearer".to_string(),
        server: "https://dev.example.com".to_string(),
        ..Default::default()
    };
    let overrides = ResolverOverrides {
        cluster_ca_data: "YR==".to_string(),
        ..Default::default()
    };

    let err = resolver
        .resolve_and_create(&candidate, &overrides, 1, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::UnresolvableCredential { .. }));
    assert!(store.credentials().unwrap().is_empty());
    assert!(store.clusters().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_cluster_with_gcp_credential() {
    let (store, resolver) = resolver();
    let credential_id = gcp_credential(&store).await;

    let request = CreateClusterRequest {
        name: "gke-prod".to_string(),
        project_id: 3,
        server: "https://34.1.2.3".to_string(),
        gcp_integration_id: Some(credential_id),
        aws_integration_id: None,
        certificate_authority_data: "Y2E=".to_string(),
    };
    let cluster = resolver.create_cluster(&request).await.unwrap();

    assert_eq!(cluster.descriptor.credential, CredentialRef::Gcp(credential_id));
    assert_eq!(cluster.descriptor.certificate_authority_data, b"ca");
    assert_eq!(cluster.descriptor.project_id, 3);
    assert_eq!(store.read_cluster(cluster.id).await.unwrap(), cluster);
}

#[tokio::test]
async fn test_create_cluster_requires_cloud_credential() {
    let (_, resolver) = resolver();
    let request = CreateClusterRequest {
        name: "bare".to_string(),
        server: "https://bare".to_string(),
        ..Default::default()
    };

    let err = resolver.create_cluster(&request).await.unwrap_err();
    assert!(matches!(err, ResolveError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_create_cluster_rejects_mismatched_credential() {
    let (store, resolver) = resolver();
    let credential_id = gcp_credential(&store).await;
    let request = CreateClusterRequest {
        name: "eks".to_string(),
        server: "https://eks".to_string(),
        aws_integration_id: Some(credential_id),
        ..Default::default()
    };

    let err = resolver.create_cluster(&request).await.unwrap_err();
    assert!(matches!(err, ResolveError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_rename_cluster_only_changes_name() {
    let (store, resolver) = resolver();
    let descriptor = ClusterDescriptor::new(1, "old", "https://dev:6443", CredentialRef::Local(4));
    let created = store.create_cluster(descriptor).await.unwrap();

    let renamed = resolver.rename_cluster(created.id, "new").await.unwrap();

    assert_eq!(renamed.descriptor.name, "new");
    assert_eq!(renamed.descriptor.server, created.descriptor.server);
    assert_eq!(renamed.descriptor.credential, created.descriptor.credential);
    assert_eq!(renamed.created_at, created.created_at);
}

#[tokio::test]
async fn test_rename_unknown_cluster_is_not_found() {
    let (_, resolver) = resolver();
    let err = resolver.rename_cluster(8, "nope").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_resolve_parsed_keeps_supplied_context() {
    let (_, resolver) = resolver();
    let candidate = ClusterCandidate {
        auth_mechanism: "local".to_string(),
        name: "dev".to_string(),
        server: "https://dev:6443".to_string(),
        kubeconfig: b"apiVersion: v1".to_vec(),
        ..Default::default()
    };
    let mut context = kubeconfig::CurrentContext::default();
    context.cluster.location_of_origin = "/etc/kube/dev.yaml".to_string();
    context.auth_info.location_of_origin = "/etc/kube/dev.yaml".to_string();

    let parsed = ParsedCandidate::with_context(&candidate, context);
    let cluster = resolver
        .resolve_parsed(&parsed, &ResolverOverrides::default(), 1, 1)
        .await
        .unwrap();

    assert_eq!(cluster.descriptor.cluster_location_of_origin, "/etc/kube/dev.yaml");
    assert_eq!(cluster.descriptor.user_location_of_origin, "/etc/kube/dev.yaml");
}
