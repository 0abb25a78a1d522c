//! Contact-list manifest maintenance.
//!
//! Contact lists are uploaded as JSON objects named
//! `contacts/<n>_<Committee_Name>.json`. A manifest document tracks the
//! known file names, sorted by their numeric prefix, so the upload script
//! and clients agree on ordering. The service keeps the manifest current
//! from object-finalized storage notifications.

pub mod handlers;

use serde::{Deserialize, Serialize};

/// Object-name prefix the manifest tracks; other objects are ignored.
pub const CONTACTS_PREFIX: &str = "contacts/";
/// Document id of the manifest inside the contacts metadata collection.
pub const MANIFEST_DOC_ID: &str = "manifest";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactManifest {
    #[serde(default)]
    pub contact_lists: Vec<String>,
}

/// True when the object name falls under the contacts convention.
pub fn is_contact_list_object(object_name: &str) -> bool {
    object_name
        .strip_prefix(CONTACTS_PREFIX)
        .map(|rest| rest.ends_with(".json") && !rest.contains('/') && rest.len() > ".json".len())
        .unwrap_or(false)
}

/// Records a finalized contact-list object in the manifest. Returns true
/// when the manifest changed (the file was not yet listed).
pub fn apply_finalized_object(manifest: &mut ContactManifest, object_name: &str) -> bool {
    let Some(file_name) = object_name.strip_prefix(CONTACTS_PREFIX) else {
        return false;
    };

    if manifest.contact_lists.iter().any(|f| f == file_name) {
        return false;
    }

    manifest.contact_lists.push(file_name.to_string());
    manifest
        .contact_lists
        .sort_by_key(|name| list_sort_key(name));
    true
}

/// Sort key: numeric filename prefix (before the first underscore), with
/// non-numeric names ordered last, ties broken by full name.
fn list_sort_key(file_name: &str) -> (u64, String) {
    let prefix = file_name
        .split('_')
        .next()
        .and_then(|p| p.parse::<u64>().ok())
        .unwrap_or(u64::MAX);
    (prefix, file_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_contact_list_object() {
        assert!(is_contact_list_object("contacts/0_Committee_Public_Health.json"));
        assert!(!is_contact_list_object("contacts/readme.txt"));
        assert!(!is_contact_list_object("uploads/0_Committee.json"));
        assert!(!is_contact_list_object("contacts/.json"));
        assert!(!is_contact_list_object("contacts/nested/0_List.json"));
    }

    #[test]
    fn test_apply_adds_and_sorts_by_numeric_prefix() {
        let mut manifest = ContactManifest {
            contact_lists: vec![
                "0_Committee_Public_Health.json".to_string(),
                "2_Senate_Leadership.json".to_string(),
            ],
        };

        let changed =
            apply_finalized_object(&mut manifest, "contacts/1_House_Leadership.json");
        assert!(changed);
        assert_eq!(
            manifest.contact_lists,
            vec![
                "0_Committee_Public_Health.json",
                "1_House_Leadership.json",
                "2_Senate_Leadership.json",
            ]
        );
    }

    #[test]
    fn test_apply_is_idempotent_for_known_file() {
        let mut manifest = ContactManifest {
            contact_lists: vec!["0_Committee_Public_Health.json".to_string()],
        };
        let changed =
            apply_finalized_object(&mut manifest, "contacts/0_Committee_Public_Health.json");
        assert!(!changed);
        assert_eq!(manifest.contact_lists.len(), 1);
    }

    #[test]
    fn test_numeric_prefixes_sort_numerically_not_lexically() {
        let mut manifest = ContactManifest {
            contact_lists: vec!["2_B.json".to_string(), "10_C.json".to_string()],
        };
        apply_finalized_object(&mut manifest, "contacts/1_A.json");
        assert_eq!(
            manifest.contact_lists,
            vec!["1_A.json", "2_B.json", "10_C.json"]
        );
    }

    #[test]
    fn test_non_numeric_prefix_sorts_last() {
        let mut manifest = ContactManifest::default();
        apply_finalized_object(&mut manifest, "contacts/special_list.json");
        apply_finalized_object(&mut manifest, "contacts/3_List.json");
        assert_eq!(
            manifest.contact_lists,
            vec!["3_List.json", "special_list.json"]
        );
    }
}
