//! Selection toggle — the single state transition the core exposes. The
//! selection value itself lives in the presentation layer.

/// Selecting the already-selected segment clears the selection; selecting a
/// different one replaces it.
pub fn toggle_selection(current: Option<&str>, candidate: &str) -> Option<String> {
    match current {
        Some(selected) if selected == candidate => None,
        _ => Some(candidate.to_string()),
    }
}
