//! Category and tag labels.
//!
//! Labels are entered as comma-separated text in the admin forms and compared
//! case-insensitively everywhere.

/// Split comma-separated input into trimmed, non-empty, de-duplicated labels.
pub fn parse_labels(raw: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let label = part.trim();
        if label.is_empty() || labels.iter().any(|l| same_label(l, label)) {
            continue;
        }
        labels.push(label.to_string());
    }
    labels
}

pub fn join_labels(labels: &[String]) -> String {
    labels.join(", ")
}

/// Case-insensitive label equality.
pub fn same_label(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
