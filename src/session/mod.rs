//! Session state container and reactive synchronization loop.
//!
//! [`SnippetSession`] owns the working-set snapshot, the open-document
//! buffers, search/selection state, the debounced write slots, and the
//! effect graph that keeps all of it consistent with the navigation channel
//! and the store worker. It communicates with the worker exclusively through
//! commands and events so no tick ever blocks on store I/O.

mod debounce;
mod effects;
pub mod filter;
mod lifecycle;
mod selection;

#[cfg(test)]
mod tests;

use crate::backend::{StoreCmd, StoreErrorSource, StoreEvent, StoreHandle};
use crate::nav::NavParams;
use debounce::PendingWrite;
pub use filter::SearchMode;
use snipvault_core::config::env_flag_enabled;
use snipvault_core::models::snippet::{NewSnippet, Snippet, SnippetField};
use snipvault_core::{Config, SnippetBackend};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, warn};

use lifecycle::ConfirmationState;

/// Counters describing synchronization behavior.
///
/// Exposed so tests and diagnostics can assert on staleness handling and
/// write coalescing without scraping logs.
#[derive(Debug, Default, Clone)]
pub struct SyncStats {
    pub content_fetches_sent: u64,
    pub content_results_applied: u64,
    pub content_stale_drops: u64,
    pub index_stale_drops: u64,
    pub writes_sent: u64,
    pub writes_superseded: u64,
    pub writes_skipped_noop: u64,
}

/// Last-seen values of the effect graph's dependency cells.
#[derive(Debug, Default, Clone)]
struct EffectSeen {
    mode: SearchMode,
    folder: Option<String>,
    open_id: Option<String>,
}

/// Reactive session model over an externally-owned snippet store.
pub struct SnippetSession {
    store: StoreHandle,
    snippets: Vec<Snippet>,
    current_folder: Option<String>,
    open_id: Option<String>,
    open_content: String,
    open_name: String,
    committed_content: Option<(String, String)>,
    committed_name: Option<(String, String)>,
    content_fetch_pending: Option<String>,
    content_write: Option<PendingWrite>,
    name_write: Option<PendingWrite>,
    content_write_in_flight: Option<String>,
    name_write_in_flight: Option<String>,
    selected_ids: BTreeSet<String>,
    search_mode: SearchMode,
    search_keyword: String,
    search_focus_requested: bool,
    confirmation: ConfirmationState,
    nav_outgoing: Option<NavParams>,
    effect_seen: EffectSeen,
    write_debounce: Duration,
    effect_trace_enabled: bool,
    last_store_error: Option<(StoreErrorSource, String)>,
    stats: SyncStats,
}

impl SnippetSession {
    /// Build a session over an existing store handle.
    ///
    /// # Returns
    /// A session with an empty working set; state arrives once navigation
    /// parameters are applied and the worker answers.
    pub fn new(store: StoreHandle, config: &Config) -> Self {
        Self {
            store,
            snippets: Vec::new(),
            current_folder: None,
            open_id: None,
            open_content: String::new(),
            open_name: String::new(),
            committed_content: None,
            committed_name: None,
            content_fetch_pending: None,
            content_write: None,
            name_write: None,
            content_write_in_flight: None,
            name_write_in_flight: None,
            selected_ids: BTreeSet::new(),
            search_mode: SearchMode::Inactive,
            search_keyword: String::new(),
            search_focus_requested: false,
            confirmation: ConfirmationState::None,
            nav_outgoing: None,
            effect_seen: EffectSeen::default(),
            write_debounce: Duration::from_millis(config.write_debounce_ms),
            effect_trace_enabled: env_flag_enabled("SNIPVAULT_EFFECT_TRACE"),
            last_store_error: None,
            stats: SyncStats::default(),
        }
    }

    /// Build a session with its own store worker over the given backend.
    pub fn with_backend(backend: impl SnippetBackend, config: &Config) -> Self {
        Self::new(crate::backend::spawn_store_worker(backend, config), config)
    }

    /// Advance the session one step: drain worker events, run the effect
    /// graph, and flush debounce windows that have elapsed.
    ///
    /// Cheap when nothing changed; intended to be called from the shell's
    /// frame or event loop.
    pub fn tick(&mut self) {
        while let Ok(event) = self.store.evt_rx.try_recv() {
            self.apply_event(event);
        }
        self.run_effects();
        self.maybe_flush_writes();
    }

    /// Snapshot of the full working set, trashed entries included.
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// The derived visible list for the current mode and keyword.
    pub fn visible_snippets(&self) -> Vec<Snippet> {
        filter::visible_snippets(&self.snippets, self.search_mode, &self.search_keyword)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }

    /// In-memory buffer of the currently open document.
    pub fn open_content(&self) -> &str {
        &self.open_content
    }

    /// Editable name buffer of the currently open document.
    pub fn open_name(&self) -> &str {
        &self.open_name
    }

    pub fn current_folder(&self) -> Option<&str> {
        self.current_folder.as_deref()
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    pub fn search_keyword(&self) -> &str {
        &self.search_keyword
    }

    pub fn sync_stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Most recent store failure, if any, for the shell to surface.
    pub fn take_store_error(&mut self) -> Option<(StoreErrorSource, String)> {
        self.last_store_error.take()
    }

    /// Request creation of a snippet in the active folder.
    ///
    /// The new snippet becomes the open document once the store confirms it.
    pub fn create_snippet(&mut self) {
        if self.current_folder.is_none() {
            warn!("snippet create ignored with no active folder");
            return;
        }
        self.send_or_warn(
            StoreCmd::CreateSnippet {
                new: NewSnippet::default(),
                content: String::new(),
            },
            "Create",
        );
    }

    /// Write the open document's language id immediately.
    ///
    /// Language picks are discrete events, so they bypass the debounced
    /// channels reserved for keystroke-driven fields.
    pub fn set_language(&mut self, value: impl Into<String>) {
        let Some(id) = self.open_id.clone() else {
            debug!("language change ignored with no open snippet");
            return;
        };
        self.send_or_warn(
            StoreCmd::UpdateField {
                id,
                field: SnippetField::Language,
                value: value.into(),
            },
            "Language save",
        );
    }

    /// Apply one store event to the session state.
    ///
    /// Stale responses (for a folder or snippet that is no longer current)
    /// are counted and dropped, never applied.
    pub(crate) fn apply_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::FolderIndex { folder, items } => {
                if self.current_folder.as_deref() != Some(folder.as_str()) {
                    self.stats.index_stale_drops += 1;
                    debug!("dropping stale index for folder '{}'", folder);
                    return;
                }
                self.snippets = items;
                self.ensure_open_after_removal();
            }
            StoreEvent::FolderCleared => {
                self.snippets.clear();
                self.ensure_open_after_removal();
            }
            StoreEvent::SnippetCreated { snippet } => {
                let id = snippet.id.clone();
                self.snippets.insert(0, snippet);
                self.open_snippet(id);
            }
            StoreEvent::ContentLoaded { id, content } => {
                if self.open_id.as_deref() != Some(id.as_str()) {
                    self.stats.content_stale_drops += 1;
                    debug!("dropping stale content for snippet '{}'", id);
                    return;
                }
                if self.content_fetch_pending.as_deref() == Some(id.as_str()) {
                    self.content_fetch_pending = None;
                }
                let name = self
                    .snippets
                    .iter()
                    .find(|snippet| snippet.id == id)
                    .map(|snippet| snippet.name.clone())
                    .unwrap_or_default();
                self.open_content = content.clone();
                self.open_name = name.clone();
                self.committed_content = Some((id.clone(), content));
                self.committed_name = Some((id, name));
                self.stats.content_results_applied += 1;
            }
            StoreEvent::ContentSaved { snippet, content } => {
                if self.content_write_in_flight.as_deref() == Some(snippet.id.as_str()) {
                    self.content_write_in_flight = None;
                }
                self.committed_content = Some((snippet.id.clone(), content));
                self.replace_snapshot_entry(snippet);
            }
            StoreEvent::FieldSaved { snippet, field } => {
                if field == SnippetField::Name {
                    if self.name_write_in_flight.as_deref() == Some(snippet.id.as_str()) {
                        self.name_write_in_flight = None;
                    }
                    self.committed_name = Some((snippet.id.clone(), snippet.name.clone()));
                }
                self.replace_snapshot_entry(snippet);
            }
            StoreEvent::TrashToggled { snippets, .. } => {
                for snippet in snippets {
                    self.replace_snapshot_entry(snippet);
                }
                self.selected_ids.clear();
            }
            StoreEvent::SnippetPurged { id } => {
                self.remove_snapshot_entry(&id);
            }
            StoreEvent::TrashEmptied { ids } => {
                for id in ids {
                    self.remove_snapshot_entry(&id);
                }
            }
            StoreEvent::SnippetMissing { id } => {
                warn!("store reports unknown snippet '{}'; evicting", id);
                self.remove_snapshot_entry(&id);
            }
            StoreEvent::Error { source, message } => {
                warn!("store error ({:?}): {}", source, message);
                match source {
                    StoreErrorSource::SaveContent => self.content_write_in_flight = None,
                    StoreErrorSource::SaveField => self.name_write_in_flight = None,
                    _ => {}
                }
                self.last_store_error = Some((source, message));
            }
        }
    }

    fn replace_snapshot_entry(&mut self, snippet: Snippet) {
        if let Some(slot) = self.snippets.iter_mut().find(|s| s.id == snippet.id) {
            *slot = snippet;
        }
    }

    fn remove_snapshot_entry(&mut self, id: &str) {
        self.snippets.retain(|snippet| snippet.id != id);
        self.drop_pending_writes_for(id);
        self.ensure_open_after_removal();
    }

    /// Re-target the open document when its entity left the collection.
    ///
    /// Only removal triggers this; an open snippet the active filter merely
    /// hides stays open.
    fn ensure_open_after_removal(&mut self) {
        let Some(open) = self.open_id.clone() else {
            return;
        };
        if self.snippets.iter().any(|snippet| snippet.id == open) {
            return;
        }
        let next = self.visible_snippets().first().map(|s| s.id.clone());
        debug!(
            "open snippet '{}' left the collection; switching to {:?}",
            open, next
        );
        self.set_open(next);
    }

    pub(crate) fn send_or_warn(&mut self, cmd: StoreCmd, what: &str) -> bool {
        if self.store.cmd_tx.send(cmd).is_ok() {
            return true;
        }
        warn!("{} failed: store worker unavailable", what);
        false
    }
}
