//! Explicit multi-select set and the derived effective selection.

use super::SnippetSession;
use std::collections::BTreeSet;

impl SnippetSession {
    /// Toggle a snippet in the explicit selection set.
    ///
    /// Bound to modified (shift-click) list activations only; a plain
    /// activation navigates via [`SnippetSession::open_snippet`] instead.
    pub fn toggle_selected(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.selected_ids.remove(&id) {
            self.selected_ids.insert(id);
        }
    }

    /// Route a list activation to either selection toggling or navigation.
    pub fn activate_snippet(&mut self, id: impl Into<String>, modifier_held: bool) {
        if modifier_held {
            self.toggle_selected(id);
        } else {
            self.open_snippet(id);
        }
    }

    /// Whether a list entry should render as highlighted.
    pub fn is_highlighted(&self, id: &str) -> bool {
        self.open_id.as_deref() == Some(id) || self.selected_ids.contains(id)
    }

    /// The explicit selection set.
    pub fn selected_ids(&self) -> &BTreeSet<String> {
        &self.selected_ids
    }

    /// Ids bulk actions operate on: the explicit set, plus the open snippet
    /// when it appears in the current visible list.
    ///
    /// # Returns
    /// The merged id list; with zero explicit toggles this is just the open
    /// document (when visible).
    pub fn effective_selection(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.selected_ids.iter().cloned().collect();
        if let Some(open) = &self.open_id {
            if !self.selected_ids.contains(open)
                && self
                    .visible_snippets()
                    .iter()
                    .any(|snippet| snippet.id == *open)
            {
                ids.push(open.clone());
            }
        }
        ids
    }
}
