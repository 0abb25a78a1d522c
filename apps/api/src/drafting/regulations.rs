//! Renders regulation preference lists into prompt text blocks.

use crate::models::RegulationPreference;

/// Formats a list of (regulation, caveat) pairs under a "supports" /
/// "opposes" label. Empty input yields a fixed "None specified" line.
pub fn format_regulations(items: &[RegulationPreference], label: &str) -> String {
    let label = label.to_uppercase();
    if items.is_empty() {
        return format!("- Regulations the sender {label}: None specified");
    }

    let list: String = items
        .iter()
        .map(|r| {
            format!(
                "\n  - {} (Caveat: {})",
                r.regulation,
                r.caveat.as_deref().unwrap_or("None")
            )
        })
        .collect();

    format!("- Regulations the sender {label}: {list}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pref(regulation: &str, caveat: Option<&str>) -> RegulationPreference {
        RegulationPreference {
            regulation: regulation.to_string(),
            caveat: caveat.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_list_yields_none_specified() {
        assert_eq!(
            format_regulations(&[], "supports"),
            "- Regulations the sender SUPPORTS: None specified"
        );
    }

    #[test]
    fn test_label_is_uppercased() {
        let out = format_regulations(&[], "opposes");
        assert!(out.contains("OPPOSES"));
    }

    #[test]
    fn test_entries_with_and_without_caveats() {
        let items = vec![
            pref("21+ age requirement", None),
            pref("Child-resistant packaging", Some("exempt topicals")),
        ];
        let out = format_regulations(&items, "supports");
        assert!(out.starts_with("- Regulations the sender SUPPORTS:"));
        assert!(out.contains("\n  - 21+ age requirement (Caveat: None)"));
        assert!(out.contains("\n  - Child-resistant packaging (Caveat: exempt topicals)"));
    }
}
