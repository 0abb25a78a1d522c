//! Formats raw representative names for display.
//!
//! Source data mixes "Last, First" order and inconsistent casing; drafted
//! emails need "First Last" in proper case.

/// Formats a raw name for use in a drafted email. Empty names get a
/// neutral placeholder. A single "Last, First" comma is reordered; more
/// than one comma is proper-cased as-is.
pub fn display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Representative".to_string();
    }

    let parts: Vec<&str> = trimmed.split(',').collect();
    let reordered = if parts.len() == 2 {
        let last = parts[0].trim();
        let first = parts[1].trim();
        if !last.is_empty() && !first.is_empty() {
            format!("{first} {last}")
        } else {
            trimmed.to_string()
        }
    } else {
        trimmed.to_string()
    };

    reordered
        .split_whitespace()
        .map(proper_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn proper_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_first_reordered() {
        assert_eq!(display_name("Smith, John"), "John Smith");
    }

    #[test]
    fn test_all_caps_proper_cased() {
        assert_eq!(display_name("JANE DOE"), "Jane Doe");
    }

    #[test]
    fn test_empty_gets_placeholder() {
        assert_eq!(display_name(""), "Representative");
        assert_eq!(display_name("   "), "Representative");
    }

    #[test]
    fn test_reordered_name_is_proper_cased() {
        assert_eq!(display_name("GONZALES, maria"), "Maria Gonzales");
    }

    #[test]
    fn test_two_commas_not_reordered() {
        assert_eq!(display_name("smith, john, jr"), "Smith, John, Jr");
    }

    #[test]
    fn test_comma_with_empty_side_not_reordered() {
        assert_eq!(display_name("smith,"), "Smith,");
    }

    #[test]
    fn test_plain_name_untouched_order() {
        assert_eq!(display_name("john smith"), "John Smith");
    }
}
