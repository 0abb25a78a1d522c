//! Representative and zip-record document types.
//!
//! These mirror the documents stored in the `zip_representatives`
//! collection. Field names stay as the store has them (`type`, `district`,
//! `lastUpdated`) so existing documents round-trip untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Legislative chamber. Stored as the full label the import scripts write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chamber {
    #[serde(rename = "Texas House", alias = "House")]
    House,
    #[serde(rename = "Texas Senate", alias = "Senate")]
    Senate,
}

/// A single legislator serving a zip code.
///
/// `name` may be empty or in "Last, First" order depending on which data
/// source produced the record — display formatting happens in the drafting
/// layer, never here. Identity for reconciliation is (chamber, district),
/// not name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Representative {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub chamber: Option<Chamber>,
}

impl Representative {
    /// True when this entry and `other` refer to the same seat.
    pub fn same_seat(&self, other: &Representative) -> bool {
        self.chamber == other.chamber && self.district == other.district
    }
}

/// The stored document for one zip code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipRecord {
    #[serde(default)]
    pub representatives: Vec<Representative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}
