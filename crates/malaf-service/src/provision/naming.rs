//! Folder naming rules.
//!
//! Path segment names must be non-empty after trimming; when a student's
//! subject list yields nothing usable, the configured default label
//! (`عام`) is substituted rather than producing an empty segment.

use malaf_entity::subject::Subject;

/// Subfolder labels for a student's subjects.
///
/// Blank names are dropped; an empty result falls back to the default
/// label so every student gets exactly at least one subject subfolder.
pub fn subject_labels(subjects: &[Subject], default_label: &str) -> Vec<String> {
    let labels: Vec<String> = subjects
        .iter()
        .map(|s| s.name_ar.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if labels.is_empty() {
        vec![default_label.to_string()]
    } else {
        labels
    }
}
