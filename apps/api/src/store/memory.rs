//! In-memory `DocumentStore` used by unit tests.
//!
//! Records committed batch sizes so tests can assert on flush behavior.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::store::{DocumentStore, StoreError, WriteKind, WriteOp, MAX_BATCH_SIZE};

#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<(String, String), Value>>,
    commit_sizes: Mutex<Vec<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, collection: &str, doc_id: &str, fields: Value) {
        self.docs
            .lock()
            .unwrap()
            .insert((collection.to_string(), doc_id.to_string()), fields);
    }

    pub fn document(&self, collection: &str, doc_id: &str) -> Option<Value> {
        self.docs
            .lock()
            .unwrap()
            .get(&(collection.to_string(), doc_id.to_string()))
            .cloned()
    }

    pub fn commit_sizes(&self) -> Vec<usize> {
        self.commit_sizes.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_document(
        &self,
        collection: &str,
        doc_id: &str,
    ) -> Result<Option<Value>, StoreError> {
        Ok(self.document(collection, doc_id))
    }

    async fn commit(&self, writes: Vec<WriteOp>) -> Result<(), StoreError> {
        if writes.len() > MAX_BATCH_SIZE {
            return Err(StoreError::BatchTooLarge(writes.len()));
        }

        self.commit_sizes.lock().unwrap().push(writes.len());

        let mut docs = self.docs.lock().unwrap();
        for op in writes {
            let key = (op.collection.clone(), op.doc_id.clone());
            match op.kind {
                WriteKind::Set => {
                    docs.insert(key, op.fields);
                }
                WriteKind::Update => {
                    let entry = docs
                        .entry(key)
                        .or_insert_with(|| Value::Object(Map::new()));
                    if let (Some(existing), Some(incoming)) =
                        (entry.as_object_mut(), op.fields.as_object())
                    {
                        for (k, v) in incoming {
                            existing.insert(k.clone(), v.clone());
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
