//! Navigation/session synchronizer: the reactive effect graph.
//!
//! Three named dependency cells drive the effects: the search mode, the
//! folder parameter, and the open-snippet id. `run_effects` diffs each cell
//! against its last-seen value and runs only the effects whose dependency
//! actually changed; re-running with unchanged inputs is a no-op.

use super::{SearchMode, SnippetSession};
use crate::backend::StoreCmd;
use crate::nav::NavParams;
use tracing::debug;

impl SnippetSession {
    /// Apply navigation parameters read from the external channel.
    pub fn apply_nav(&mut self, params: NavParams) {
        self.current_folder = params.folder.filter(|folder| !folder.is_empty());
        self.open_id = params.snippet.filter(|id| !id.is_empty());
        self.run_effects();
    }

    /// Parse and apply a raw query string from the external channel.
    pub fn apply_query(&mut self, query: &str) {
        self.apply_nav(crate::nav::parse_query(query));
    }

    /// Open a snippet as the active document (plain list activation).
    ///
    /// Surfaces the change on the outgoing navigation channel so the shell
    /// can keep the URL in step.
    pub fn open_snippet(&mut self, id: impl Into<String>) {
        self.set_open(Some(id.into()));
    }

    pub(super) fn set_open(&mut self, next: Option<String>) {
        if self.open_id == next {
            return;
        }
        self.open_id = next;
        self.nav_outgoing = Some(NavParams {
            folder: self.current_folder.clone(),
            snippet: self.open_id.clone(),
        });
        self.run_effects();
    }

    /// Switch the search session mode.
    pub fn set_search_mode(&mut self, mode: SearchMode) {
        if self.search_mode == mode {
            return;
        }
        self.search_mode = mode;
        self.run_effects();
    }

    /// Update the search keyword (searching mode only affects filtering).
    ///
    /// Keyword changes alone never clear the selection or trigger effects.
    pub fn set_search_keyword(&mut self, keyword: impl Into<String>) {
        self.search_keyword = keyword.into();
    }

    /// Drain the pending outgoing navigation request, if any.
    pub fn take_nav_request(&mut self) -> Option<NavParams> {
        self.nav_outgoing.take()
    }

    /// Drain the pending search-input focus request.
    pub fn take_search_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.search_focus_requested)
    }

    /// Run every effect whose dependency cell changed since its last run.
    pub(super) fn run_effects(&mut self) {
        let mode_changed = self.effect_seen.mode != self.search_mode;
        let folder_changed = self.effect_seen.folder != self.current_folder;
        let open_changed = self.effect_seen.open_id != self.open_id;
        if !(mode_changed || folder_changed || open_changed) {
            return;
        }
        if self.effect_trace_enabled {
            debug!(
                mode_changed,
                folder_changed, open_changed, "running session effects"
            );
        }

        if mode_changed {
            self.effect_seen.mode = self.search_mode;
            self.search_keyword.clear();
            if self.search_mode != SearchMode::Inactive {
                self.search_focus_requested = true;
            }
        }

        if folder_changed {
            self.effect_seen.folder = self.current_folder.clone();
            self.send_or_warn(
                StoreCmd::SetFolder {
                    folder: self.current_folder.clone(),
                },
                "Folder switch",
            );
            if let Some(folder) = self.current_folder.clone() {
                self.send_or_warn(StoreCmd::LoadFolder { folder }, "Folder load");
            }
        }

        if open_changed {
            self.effect_seen.open_id = self.open_id.clone();
            if let Some(id) = self.open_id.clone() {
                self.content_fetch_pending = Some(id.clone());
                self.stats.content_fetches_sent += 1;
                self.send_or_warn(StoreCmd::ReadContent { id }, "Content load");
            }
        }

        if mode_changed || open_changed {
            self.selected_ids.clear();
        }
    }
}
