//! Transforms the district-keyed source file into the zip-keyed shape the
//! merge engine consumes.
//!
//! Source shape (`tx_legislative_districts_by_zip.json`):
//! `{ "house_districts": { "<district>": { "representative": {...},
//! "zip_codes": [...] } }, "senate_districts": {...} }`

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::info;

use crate::models::{Chamber, Representative};

#[derive(Debug, Deserialize)]
pub struct DistrictFile {
    #[serde(default)]
    pub house_districts: BTreeMap<String, DistrictInfo>,
    #[serde(default)]
    pub senate_districts: BTreeMap<String, DistrictInfo>,
}

#[derive(Debug, Deserialize)]
pub struct DistrictInfo {
    pub representative: DistrictRep,
    #[serde(default)]
    pub zip_codes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DistrictRep {
    #[serde(default)]
    pub representative_name: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TransformStats {
    pub districts: u32,
    pub zip_mappings: u32,
}

/// Expands district records into per-zip representative lists.
pub fn zip_keyed_records(
    file: &DistrictFile,
) -> (BTreeMap<String, Vec<Representative>>, TransformStats) {
    let mut by_zip: BTreeMap<String, Vec<Representative>> = BTreeMap::new();
    let mut stats = TransformStats::default();

    for (chamber, districts) in [
        (Chamber::House, &file.house_districts),
        (Chamber::Senate, &file.senate_districts),
    ] {
        for (district, info) in districts {
            stats.districts += 1;
            for zip in &info.zip_codes {
                by_zip
                    .entry(zip.clone())
                    .or_default()
                    .push(to_representative(chamber, district, &info.representative));
                stats.zip_mappings += 1;
            }
        }
    }

    info!(
        "Transformed {} districts into {} zip codes ({} mappings)",
        stats.districts,
        by_zip.len(),
        stats.zip_mappings
    );

    (by_zip, stats)
}

fn to_representative(chamber: Chamber, district: &str, rep: &DistrictRep) -> Representative {
    Representative {
        name: rep.representative_name.clone(),
        party: non_empty(&rep.party),
        district: Some(district.to_string()),
        email: non_empty(&rep.email),
        phone: non_empty(&rep.phone_number),
        chamber: Some(chamber),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
