//! Pure filter/sort engine for the visible snippet list.

use snipvault_core::models::snippet::Snippet;
use std::cmp::Ordering;

/// User-toggled search session mode.
///
/// Modes are mutually exclusive; entering one replaces the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Plain browsing of active snippets.
    #[default]
    Inactive,
    /// Keyword filtering of active snippets.
    Searching,
    /// Browsing trashed snippets.
    ViewingTrash,
}

/// Compute the ordered visible list for a mode and keyword.
///
/// A snippet passes when its trash state matches the mode and, for a
/// non-empty keyword, its name contains the keyword case-insensitively.
/// Trashed results order by trash timestamp descending, active results by
/// creation timestamp descending; the sort is stable under equal timestamps.
///
/// # Returns
/// The filtered, ordered list. Pure; cheap enough to recompute per keystroke.
pub fn visible_snippets(all: &[Snippet], mode: SearchMode, keyword: &str) -> Vec<Snippet> {
    let want_trashed = mode == SearchMode::ViewingTrash;
    let needle = keyword.trim().to_lowercase();
    let mut visible: Vec<Snippet> = all
        .iter()
        .filter(|snippet| snippet.is_trashed() == want_trashed)
        .filter(|snippet| needle.is_empty() || snippet.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    visible.sort_by(display_order);
    visible
}

fn display_order(a: &Snippet, b: &Snippet) -> Ordering {
    match (a.deleted_at, b.deleted_at) {
        (Some(a_deleted), Some(b_deleted)) => b_deleted.cmp(&a_deleted),
        (None, None) => b.created_at.cmp(&a.created_at),
        // Mixed sets only occur outside mode filtering; keep active first.
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}
