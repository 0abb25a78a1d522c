//! Representative merge engine.
//!
//! Reconciles incoming representative lists against the stored zip-keyed
//! mapping. Matching is by seat (chamber, district) — never by name, since
//! source data frequently ships partial names. Merging only fills fields
//! that are currently empty; populated fields are never overwritten, so
//! re-running the same import is a no-op.
//!
//! Runs single-writer and sequential. Per-zip read failures are logged and
//! skipped; a failed batch commit aborts the run.

pub mod transform;

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use crate::models::{Representative, ZipRecord};
use crate::store::{DocumentStore, StoreError, WriteOp, MAX_BATCH_SIZE};

/// Marker stamped on documents created by a merge run.
const CREATED_BY: &str = "district_data_import";
/// Marker stamped on documents updated by a merge run.
const UPDATED_BY: &str = "district_data_merge";

/// Counts persisted to the metadata collection after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    pub created: u32,
    pub updated: u32,
    pub skipped: u32,
    pub total: u32,
}

/// Merges incoming entries into an existing list by seat identity.
///
/// Unknown seats are appended. For known seats, only empty fields are
/// filled from the incoming entry.
pub fn merge_representatives(
    existing: &[Representative],
    incoming: &[Representative],
) -> Vec<Representative> {
    let mut merged = existing.to_vec();

    for new_rep in incoming {
        match merged.iter_mut().find(|r| r.same_seat(new_rep)) {
            Some(current) => {
                if current.name.is_empty() && !new_rep.name.is_empty() {
                    current.name = new_rep.name.clone();
                }
                fill_if_missing(&mut current.party, &new_rep.party);
                fill_if_missing(&mut current.email, &new_rep.email);
                fill_if_missing(&mut current.phone, &new_rep.phone);
            }
            None => merged.push(new_rep.clone()),
        }
    }

    merged
}

/// Fills `current` from `incoming` only when `current` is absent or empty.
fn fill_if_missing(current: &mut Option<String>, incoming: &Option<String>) {
    let is_empty = current.as_deref().map_or(true, str::is_empty);
    if !is_empty {
        return;
    }
    if let Some(value) = incoming {
        if !value.is_empty() {
            *current = Some(value.clone());
        }
    }
}

/// True when the merge produced a concrete difference worth writing:
/// a new entry, or any filled field on an existing seat.
pub fn has_changes(original: &[Representative], merged: &[Representative]) -> bool {
    if original.len() != merged.len() {
        return true;
    }

    for original_rep in original {
        let Some(merged_rep) = merged.iter().find(|r| r.same_seat(original_rep)) else {
            return true;
        };
        if original_rep.name != merged_rep.name
            || original_rep.party != merged_rep.party
            || original_rep.email != merged_rep.email
            || original_rep.phone != merged_rep.phone
        {
            return true;
        }
    }

    false
}

/// Runs the full merge over a zip-keyed mapping of incoming entries,
/// batching writes and persisting a run summary afterwards.
pub async fn run_merge(
    store: &dyn DocumentStore,
    collection: &str,
    metadata_collection: &str,
    source_file: &str,
    incoming: &BTreeMap<String, Vec<Representative>>,
) -> Result<MergeSummary, StoreError> {
    let mut summary = MergeSummary {
        total: incoming.len() as u32,
        ..Default::default()
    };
    let mut batch: Vec<WriteOp> = Vec::new();

    for (zip, new_reps) in incoming {
        let existing = match store.get_document(collection, zip).await {
            Ok(doc) => doc,
            Err(e) => {
                error!("Error processing zip code {zip}: {e}");
                continue;
            }
        };

        match existing {
            Some(doc) => {
                let record: ZipRecord = match serde_json::from_value(doc) {
                    Ok(record) => record,
                    Err(e) => {
                        error!("Error processing zip code {zip}: bad document: {e}");
                        continue;
                    }
                };

                let merged = merge_representatives(&record.representatives, new_reps);
                if has_changes(&record.representatives, &merged) {
                    batch.push(WriteOp::update(
                        collection,
                        zip,
                        json!({
                            "representatives": merged,
                            "lastUpdated": Utc::now(),
                            "updatedBy": UPDATED_BY,
                        }),
                    ));
                    summary.updated += 1;
                    info!("Updated {zip} with merged data");
                } else {
                    summary.skipped += 1;
                }
            }
            None => {
                batch.push(WriteOp::set(
                    collection,
                    zip,
                    json!({
                        "representatives": new_reps,
                        "lastUpdated": Utc::now(),
                        "createdBy": CREATED_BY,
                    }),
                ));
                summary.created += 1;
                info!("Created new entry for {zip}");
            }
        }

        if batch.len() >= MAX_BATCH_SIZE {
            let flushed = std::mem::take(&mut batch);
            info!("Committing batch of {} documents", flushed.len());
            store.commit(flushed).await?;
        }
    }

    if !batch.is_empty() {
        info!("Committing final batch of {} documents", batch.len());
        store.commit(batch).await?;
    }

    store
        .set_document(
            metadata_collection,
            "district_update_info",
            json!({
                "lastUpdateDate": Utc::now(),
                "newZipCodes": summary.created,
                "updatedZipCodes": summary.updated,
                "skippedZipCodes": summary.skipped,
                "totalProcessed": summary.total,
                "updateType": "district_data_merge",
                "sourceFile": source_file,
            }),
        )
        .await?;

    info!(
        "Merge complete: {} created, {} updated, {} skipped, {} total",
        summary.created, summary.updated, summary.skipped, summary.total
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chamber;
    use crate::store::memory::MemoryStore;

    fn rep(
        chamber: Chamber,
        district: &str,
        name: &str,
        party: Option<&str>,
        email: Option<&str>,
    ) -> Representative {
        Representative {
            name: name.to_string(),
            party: party.map(str::to_string),
            district: Some(district.to_string()),
            email: email.map(str::to_string),
            phone: None,
            chamber: Some(chamber),
        }
    }

    #[test]
    fn test_merge_appends_unknown_seat() {
        let existing = vec![rep(Chamber::House, "12", "A", None, None)];
        let incoming = vec![rep(Chamber::Senate, "3", "B", None, None)];
        let merged = merge_representatives(&existing, &incoming);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_fills_only_empty_fields() {
        let existing = vec![rep(Chamber::House, "12", "", Some("R"), None)];
        let incoming = vec![rep(
            Chamber::House,
            "12",
            "Jane Doe",
            Some("D"),
            Some("jane@house.texas.gov"),
        )];
        let merged = merge_representatives(&existing, &incoming);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Jane Doe");
        // Populated field is never overwritten
        assert_eq!(merged[0].party.as_deref(), Some("R"));
        assert_eq!(merged[0].email.as_deref(), Some("jane@house.texas.gov"));
    }

    #[test]
    fn test_merge_treats_empty_string_as_missing() {
        let existing = vec![rep(Chamber::House, "12", "A", Some(""), None)];
        let incoming = vec![rep(Chamber::House, "12", "A", Some("D"), None)];
        let merged = merge_representatives(&existing, &incoming);
        assert_eq!(merged[0].party.as_deref(), Some("D"));
    }

    #[test]
    fn test_has_changes_detects_filled_field() {
        let original = vec![rep(Chamber::House, "12", "", Some("R"), None)];
        let merged = merge_representatives(
            &original,
            &[rep(Chamber::House, "12", "Jane Doe", None, None)],
        );
        assert!(has_changes(&original, &merged));
    }

    #[test]
    fn test_has_changes_false_when_nothing_filled() {
        let original = vec![rep(
            Chamber::House,
            "12",
            "Jane Doe",
            Some("R"),
            Some("jane@house.texas.gov"),
        )];
        let merged = merge_representatives(
            &original,
            &[rep(Chamber::House, "12", "Ignored", Some("D"), Some("x@y"))],
        );
        assert!(!has_changes(&original, &merged));
    }

    fn store_with(records: &[(&str, Vec<Representative>)]) -> MemoryStore {
        let store = MemoryStore::new();
        for (zip, reps) in records {
            store.insert(
                "zip_representatives",
                zip,
                serde_json::json!({ "representatives": reps }),
            );
        }
        store
    }

    async fn run(
        store: &MemoryStore,
        incoming: &BTreeMap<String, Vec<Representative>>,
    ) -> MergeSummary {
        run_merge(
            store,
            "zip_representatives",
            "zip_representatives_metadata",
            "test.json",
            incoming,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_absent_zip_creates_record() {
        let store = store_with(&[]);
        let incoming: BTreeMap<_, _> = [(
            "78701".to_string(),
            vec![rep(Chamber::House, "47", "Gonzales, Maria", Some("R"), None)],
        )]
        .into_iter()
        .collect();

        let summary = run(&store, &incoming).await;
        assert_eq!(summary.created, 1);
        assert_eq!(summary.updated, 0);

        let doc = store.document("zip_representatives", "78701").unwrap();
        assert_eq!(doc["createdBy"], "district_data_import");
        assert_eq!(doc["representatives"][0]["name"], "Gonzales, Maria");
        assert!(doc["lastUpdated"].is_string());
    }

    #[tokio::test]
    async fn test_second_run_is_idempotent() {
        let store = store_with(&[]);
        let incoming: BTreeMap<_, _> = [
            (
                "78701".to_string(),
                vec![rep(Chamber::House, "47", "Gonzales, Maria", Some("R"), None)],
            ),
            (
                "78702".to_string(),
                vec![rep(Chamber::Senate, "14", "Smith, John", Some("D"), None)],
            ),
        ]
        .into_iter()
        .collect();

        let first = run(&store, &incoming).await;
        assert_eq!(first.created, 2);

        let before = store.document("zip_representatives", "78701").unwrap();
        let second = run(&store, &incoming).await;
        let after = store.document("zip_representatives", "78701").unwrap();

        assert_eq!(second.created, 0);
        assert_eq!(second.updated, 0);
        assert_eq!(second.skipped, 2);
        // No write means no timestamp churn
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_update_path_preserves_populated_fields() {
        let store = store_with(&[(
            "78701",
            vec![rep(Chamber::House, "12", "", Some("R"), None)],
        )]);
        let incoming: BTreeMap<_, _> = [(
            "78701".to_string(),
            vec![rep(Chamber::House, "12", "Jane Doe", Some("D"), None)],
        )]
        .into_iter()
        .collect();

        let summary = run(&store, &incoming).await;
        assert_eq!(summary.updated, 1);

        let doc = store.document("zip_representatives", "78701").unwrap();
        assert_eq!(doc["representatives"][0]["name"], "Jane Doe");
        assert_eq!(doc["representatives"][0]["party"], "R");
        assert_eq!(doc["updatedBy"], "district_data_merge");
    }

    #[tokio::test]
    async fn test_batch_flush_sizes_for_1200_creates() {
        let store = store_with(&[]);
        let incoming: BTreeMap<_, _> = (0..1200)
            .map(|i| {
                (
                    format!("{i:05}"),
                    vec![rep(Chamber::House, "1", "A", None, None)],
                )
            })
            .collect();

        let summary = run(&store, &incoming).await;
        assert_eq!(summary.created, 1200);

        // Three data batches (500, 500, 200) plus the single metadata write
        let sizes = store.commit_sizes();
        assert_eq!(sizes, vec![500, 500, 200, 1]);
    }

    #[tokio::test]
    async fn test_summary_metadata_written() {
        let store = store_with(&[]);
        let incoming: BTreeMap<_, _> = [(
            "78701".to_string(),
            vec![rep(Chamber::House, "47", "A", None, None)],
        )]
        .into_iter()
        .collect();

        run(&store, &incoming).await;

        let meta = store
            .document("zip_representatives_metadata", "district_update_info")
            .unwrap();
        assert_eq!(meta["newZipCodes"], 1);
        assert_eq!(meta["updateType"], "district_data_merge");
        assert_eq!(meta["sourceFile"], "test.json");
    }
}
