//! Unit tests for InMemoryStore

#[cfg(test)]
mod tests {
    use crate::{ClusterStore, InMemoryStore, StoreError};
    use cluster_models::*;

    fn token_record(token: &[u8]) -> CredentialRecord {
        CredentialRecord::new(
            1,
            2,
            CredentialMaterial::BearerToken(TokenCredential { token: token.to_vec() }),
        )
    }

    #[tokio::test]
    async fn test_create_credential_assigns_id() {
        let store = InMemoryStore::new();

        let first = store.create_credential(token_record(b"abc")).await.unwrap();
        let second = store.create_credential(token_record(b"def")).await.unwrap();

        assert_ne!(first.id, 0);
        assert_ne!(first.id, second.id);
        assert!(first.created_at.is_some());
        assert_eq!(store.read_credential(first.id).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_create_credential_rejects_missing_fields() {
        let store = InMemoryStore::new();

        let err = store.create_credential(token_record(b"")).await.unwrap_err();

        assert_eq!(
            err,
            StoreError::InvalidRecord {
                entity: "credential",
                missing_fields: vec!["token"],
            }
        );
        assert!(store.credentials().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_unknown_ids_are_not_found() {
        let store = InMemoryStore::new();

        assert!(store.read_credential(99).await.unwrap_err().is_not_found());
        assert!(store.read_cluster(99).await.unwrap_err().is_not_found());
        assert!(store.read_cluster_candidate(99).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_cluster_replaces_descriptor() {
        let store = InMemoryStore::new();
        let descriptor = ClusterDescriptor::new(1, "dev", "https://dev:6443", CredentialRef::Gcp(3));

        let mut cluster = store.create_cluster(descriptor).await.unwrap();
        cluster.descriptor.name = "prod".to_string();
        let updated = store.update_cluster(cluster.clone()).await.unwrap();

        assert_eq!(updated.descriptor.name, "prod");
        assert_eq!(store.read_cluster(cluster.id).await.unwrap().descriptor.name, "prod");
    }

    #[tokio::test]
    async fn test_update_unknown_cluster_is_not_found() {
        let store = InMemoryStore::new();
        let cluster = Cluster {
            id: 12,
            created_at: None,
            descriptor: ClusterDescriptor::new(1, "dev", "https://dev", CredentialRef::Aws(1)),
        };

        let err = store.update_cluster(cluster).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound { entity: "cluster", id: 12 });
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let store = InMemoryStore::new();
        let handle = store.clone();

        handle.create_credential(token_record(b"abc")).await.unwrap();
        assert_eq!(store.credentials().unwrap().len(), 1);
    }
}
