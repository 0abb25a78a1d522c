//! Firestore REST client.
//!
//! Documents live under
//! `projects/{project}/databases/(default)/documents/{collection}/{doc_id}`
//! and carry typed field values (`stringValue`, `mapValue`, ...). The
//! conversion helpers translate between that representation and plain
//! `serde_json::Value` objects so the rest of the crate never sees the
//! typed encoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::store::{DocumentStore, StoreError, WriteKind, WriteOp, MAX_BATCH_SIZE};

#[derive(Clone)]
pub struct FirestoreClient {
    http: Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl FirestoreClient {
    pub fn new(
        base_url: String,
        project_id: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(FirestoreClient {
            http,
            base_url,
            project_id,
            api_key,
        })
    }

    fn documents_root(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents",
            self.base_url.trim_end_matches('/'),
            self.project_id
        )
    }

    /// Fully-qualified document name as Firestore expects it in writes.
    fn document_name(&self, collection: &str, doc_id: &str) -> String {
        format!(
            "projects/{}/databases/(default)/documents/{}/{}",
            self.project_id, collection, doc_id
        )
    }

    fn encode_write(&self, op: &WriteOp) -> Result<Value, StoreError> {
        let fields = op
            .fields
            .as_object()
            .ok_or_else(|| StoreError::InvalidDocument("write fields must be an object".into()))?;

        let encoded: Map<String, Value> = fields
            .iter()
            .map(|(k, v)| (k.clone(), to_firestore_value(v)))
            .collect();

        let mut write = json!({
            "update": {
                "name": self.document_name(&op.collection, &op.doc_id),
                "fields": Value::Object(encoded),
            }
        });

        if op.kind == WriteKind::Update {
            let paths: Vec<&String> = fields.keys().collect();
            write["updateMask"] = json!({ "fieldPaths": paths });
        }

        Ok(write)
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn get_document(
        &self,
        collection: &str,
        doc_id: &str,
    ) -> Result<Option<Value>, StoreError> {
        let url = format!("{}/{}/{}", self.documents_root(), collection, doc_id);
        debug!("GET {collection}/{doc_id}");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let doc: Value = response.json().await?;
        let fields = doc.get("fields").cloned().unwrap_or_else(|| json!({}));
        Ok(Some(from_firestore_fields(&fields)?))
    }

    async fn commit(&self, writes: Vec<WriteOp>) -> Result<(), StoreError> {
        if writes.len() > MAX_BATCH_SIZE {
            return Err(StoreError::BatchTooLarge(writes.len()));
        }

        let encoded: Vec<Value> = writes
            .iter()
            .map(|op| self.encode_write(op))
            .collect::<Result<_, _>>()?;

        let url = format!("{}:commit", self.documents_root());
        debug!("commit of {} writes", encoded.len());

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({ "writes": encoded }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

/// Encodes a plain JSON value into Firestore's typed-value form.
pub fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                // Firestore carries integers as strings
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": {
                "values": items.iter().map(to_firestore_value).collect::<Vec<_>>()
            }
        }),
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), to_firestore_value(v)))
                .collect();
            json!({ "mapValue": { "fields": fields } })
        }
    }
}

/// Decodes one Firestore typed value back into plain JSON.
pub fn from_firestore_value(value: &Value) -> Result<Value, StoreError> {
    let obj = value
        .as_object()
        .ok_or_else(|| StoreError::InvalidDocument("typed value must be an object".into()))?;

    let (kind, inner) = obj
        .iter()
        .next()
        .ok_or_else(|| StoreError::InvalidDocument("empty typed value".into()))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => Ok(inner.clone()),
        "integerValue" => {
            let raw = inner
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| inner.to_string());
            let n = raw.parse::<i64>().map_err(|_| {
                StoreError::InvalidDocument(format!("bad integerValue: {raw}"))
            })?;
            Ok(json!(n))
        }
        "doubleValue" => Ok(inner.clone()),
        // Timestamps surface as RFC 3339 strings; chrono parses them at the
        // model layer.
        "stringValue" | "timestampValue" | "referenceValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let decoded: Vec<Value> = values
                .iter()
                .map(from_firestore_value)
                .collect::<Result<_, _>>()?;
            Ok(Value::Array(decoded))
        }
        "mapValue" => {
            let fields = inner.get("fields").cloned().unwrap_or_else(|| json!({}));
            from_firestore_fields(&fields)
        }
        other => Err(StoreError::InvalidDocument(format!(
            "unsupported value kind: {other}"
        ))),
    }
}

/// Decodes a Firestore `fields` object into a plain JSON object.
pub fn from_firestore_fields(fields: &Value) -> Result<Value, StoreError> {
    let map = fields
        .as_object()
        .ok_or_else(|| StoreError::InvalidDocument("fields must be an object".into()))?;

    let mut decoded = Map::new();
    for (key, typed) in map {
        decoded.insert(key.clone(), from_firestore_value(typed)?);
    }
    Ok(Value::Object(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_round_trip() {
        for value in [
            json!(null),
            json!(true),
            json!(42),
            json!(2.5),
            json!("hello"),
        ] {
            let encoded = to_firestore_value(&value);
            assert_eq!(from_firestore_value(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_integer_encodes_as_string() {
        let encoded = to_firestore_value(&json!(500));
        assert_eq!(encoded, json!({ "integerValue": "500" }));
    }

    #[test]
    fn test_zip_record_shape_round_trips() {
        let doc = json!({
            "representatives": [
                {
                    "type": "Texas House",
                    "district": "47",
                    "name": "Smith, John",
                    "party": "D",
                    "email": "",
                    "phone": "(512) 463-0001"
                }
            ],
            "count": 1,
            "status": "success",
            "lastUpdated": "2025-07-01T12:00:00Z"
        });

        let fields = to_firestore_value(&doc);
        let inner = fields["mapValue"]["fields"].clone();
        let decoded = from_firestore_fields(&inner).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_timestamp_value_decodes_to_string() {
        let typed = json!({ "timestampValue": "2025-07-01T12:00:00Z" });
        assert_eq!(
            from_firestore_value(&typed).unwrap(),
            json!("2025-07-01T12:00:00Z")
        );
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let typed = json!({ "geoPointValue": { "latitude": 30.0, "longitude": -97.0 } });
        assert!(from_firestore_value(&typed).is_err());
    }
}
