//! Zip-code input validation.

/// Cap on zip codes per batch lookup request.
pub const MAX_BATCH_ZIPS: usize = 10;

/// True for exactly five ASCII digits.
pub fn is_valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a batch lookup request: 1 to `MAX_BATCH_ZIPS` entries, each a
/// well-formed zip. Returns the message for the first violation found.
pub fn validate_zip_batch(zips: &[String]) -> Result<(), String> {
    if zips.is_empty() {
        return Err("At least one zip code is required".to_string());
    }
    if zips.len() > MAX_BATCH_ZIPS {
        return Err(format!(
            "Maximum {MAX_BATCH_ZIPS} zip codes can be queried at once"
        ));
    }
    for zip in zips {
        if !is_valid_zip(zip) {
            return Err(format!("Invalid zip code format: {zip}"));
        }
    }
    Ok(())
}
