//! Determines whether a sender is a constituent of a representative.

use crate::models::AssignedDistricts;

/// True iff the representative's district appears in either of the sender's
/// assigned district sets. Absent districts on either side mean "not a
/// constituent", never an error.
///
/// Comparison is exact — callers must pre-normalize leading zeros and
/// whitespace.
pub fn is_constituent(assigned: Option<&AssignedDistricts>, district: Option<&str>) -> bool {
    let (Some(assigned), Some(district)) = (assigned, district) else {
        return false;
    };

    assigned.house_districts.contains(district) || assigned.senate_districts.contains(district)
}
