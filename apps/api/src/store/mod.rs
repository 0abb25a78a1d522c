//! Document store abstraction.
//!
//! The interactive path only reads; the offline batch jobs write through
//! `WriteOp` batches bounded by `MAX_BATCH_SIZE`. Handlers and the merge
//! engine depend on the `DocumentStore` trait so tests can run against an
//! in-memory implementation.

pub mod firestore;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use firestore::FirestoreClient;

/// Hard upper bound on writes per committed batch (store limit).
pub const MAX_BATCH_SIZE: usize = 500;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store returned error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid document format: {0}")]
    InvalidDocument(String),

    #[error("batch of {0} writes exceeds the maximum of {MAX_BATCH_SIZE}")]
    BatchTooLarge(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// Replace the whole document (creating it if absent).
    Set,
    /// Merge only the given fields into an existing document.
    Update,
}

/// One queued write against a document.
#[derive(Debug, Clone)]
pub struct WriteOp {
    pub collection: String,
    pub doc_id: String,
    /// JSON object of fields to write.
    pub fields: Value,
    pub kind: WriteKind,
}

impl WriteOp {
    pub fn set(collection: &str, doc_id: &str, fields: Value) -> Self {
        WriteOp {
            collection: collection.to_string(),
            doc_id: doc_id.to_string(),
            fields,
            kind: WriteKind::Set,
        }
    }

    pub fn update(collection: &str, doc_id: &str, fields: Value) -> Self {
        WriteOp {
            collection: collection.to_string(),
            doc_id: doc_id.to_string(),
            fields,
            kind: WriteKind::Update,
        }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a document's fields as a JSON object; `None` when absent.
    async fn get_document(
        &self,
        collection: &str,
        doc_id: &str,
    ) -> Result<Option<Value>, StoreError>;

    /// Commits a batch of writes atomically. Callers must keep batches
    /// within `MAX_BATCH_SIZE`.
    async fn commit(&self, writes: Vec<WriteOp>) -> Result<(), StoreError>;

    /// Convenience for a single full-document write.
    async fn set_document(
        &self,
        collection: &str,
        doc_id: &str,
        fields: Value,
    ) -> Result<(), StoreError> {
        self.commit(vec![WriteOp::set(collection, doc_id, fields)])
            .await
    }
}
