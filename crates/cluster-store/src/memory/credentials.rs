//! Credential records for InMemoryStore

use super::{lock, InMemoryStore};
use crate::error::StoreError;
use cluster_models::CredentialRecord;
use tracing::debug;

pub fn create_credential(store: &InMemoryStore, mut record: CredentialRecord) -> Result<CredentialRecord, StoreError> {
    let missing_fields = record.material.missing_fields();
    if !missing_fields.is_empty() {
        return Err(StoreError::InvalidRecord {
            entity: "credential",
            missing_fields,
        });
    }

    record.id = store.next_id()?;
    record.created_at = Some(chrono::Utc::now());

    lock(&store.credentials)?.insert(record.id, record.clone());
    debug!("Stored {} credential {}", record.mechanism(), record.id);
    Ok(record)
}

pub fn read_credential(store: &InMemoryStore, id: u64) -> Result<CredentialRecord, StoreError> {
    lock(&store.credentials)?
        .get(&id)
        .cloned()
        .ok_or(StoreError::NotFound { entity: "credential", id })
}
