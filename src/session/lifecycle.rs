//! Trash/restore/purge lifecycle with confirmation gating.
//!
//! Every destructive transition is requested first, held in a pending
//! confirmation cell, and dispatched only when the user accepts. Declining
//! is a normal cancellation: no state change, no error.

use super::{SearchMode, SnippetSession};
use crate::backend::StoreCmd;
use tracing::{debug, warn};

/// Pending confirmation for a destructive transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfirmationState {
    None,
    ToggleTrash {
        id: String,
        name: String,
        restoring: bool,
    },
    BulkToggleTrash {
        ids: Vec<String>,
        restoring: bool,
    },
    Purge {
        id: String,
        name: String,
    },
    EmptyTrash {
        count: usize,
    },
}

impl ConfirmationState {
    fn is_none(&self) -> bool {
        matches!(self, ConfirmationState::None)
    }

    fn involves(&self, id: &str) -> bool {
        match self {
            ConfirmationState::None | ConfirmationState::EmptyTrash { .. } => false,
            ConfirmationState::ToggleTrash { id: pending, .. }
            | ConfirmationState::Purge { id: pending, .. } => pending == id,
            ConfirmationState::BulkToggleTrash { ids, .. } => {
                ids.iter().any(|pending| pending == id)
            }
        }
    }

    fn prompt(&self) -> Option<String> {
        match self {
            ConfirmationState::None => None,
            ConfirmationState::ToggleTrash {
                name,
                restoring: false,
                ..
            } => Some(format!("Move \"{}\" to the trash?", name)),
            ConfirmationState::ToggleTrash {
                name,
                restoring: true,
                ..
            } => Some(format!("Restore \"{}\" from the trash?", name)),
            ConfirmationState::BulkToggleTrash {
                ids,
                restoring: false,
            } => Some(format!("Move {} snippets to the trash?", ids.len())),
            ConfirmationState::BulkToggleTrash {
                ids,
                restoring: true,
            } => Some(format!("Restore {} snippets from the trash?", ids.len())),
            ConfirmationState::Purge { name, .. } => Some(format!(
                "Permanently delete \"{}\"? This cannot be undone.",
                name
            )),
            ConfirmationState::EmptyTrash { count } => Some(format!(
                "Permanently delete {} trashed snippets? This cannot be undone.",
                count
            )),
        }
    }
}

impl SnippetSession {
    /// Request a single-snippet trash/restore transition.
    ///
    /// The direction is derived from the snippet's current trash state.
    pub fn toggle_trash(&mut self, id: &str) {
        if self.confirmation.involves(id) {
            debug!("trash toggle for '{}' already awaiting confirmation", id);
            return;
        }
        let Some(snippet) = self.snippets.iter().find(|snippet| snippet.id == id) else {
            warn!("trash toggle targets unknown snippet '{}'", id);
            return;
        };
        let pending = ConfirmationState::ToggleTrash {
            id: snippet.id.clone(),
            name: snippet.name.clone(),
            restoring: snippet.is_trashed(),
        };
        self.request_confirmation(pending);
    }

    /// Request the same trash/restore transition for the whole effective
    /// selection. Restoring when the trash view is active, trashing otherwise.
    pub fn bulk_toggle_trash(&mut self) {
        let ids = self.effective_selection();
        if ids.is_empty() {
            return;
        }
        if ids.iter().any(|id| self.confirmation.involves(id)) {
            debug!("bulk trash toggle overlaps a pending confirmation");
            return;
        }
        let restoring = self.search_mode == SearchMode::ViewingTrash;
        self.request_confirmation(ConfirmationState::BulkToggleTrash { ids, restoring });
    }

    /// Request permanent removal of a trashed snippet.
    pub fn purge(&mut self, id: &str) {
        if self.confirmation.involves(id) {
            debug!("purge for '{}' already awaiting confirmation", id);
            return;
        }
        let Some(snippet) = self.snippets.iter().find(|snippet| snippet.id == id) else {
            warn!("purge targets unknown snippet '{}'", id);
            return;
        };
        if !snippet.is_trashed() {
            warn!("purge refused for '{}': snippet is not in the trash", id);
            return;
        }
        let pending = ConfirmationState::Purge {
            id: snippet.id.clone(),
            name: snippet.name.clone(),
        };
        self.request_confirmation(pending);
    }

    /// Request purging every trashed snippet in the working set.
    ///
    /// A no-op while the trash is empty; the action is simply not offered.
    pub fn empty_trash(&mut self) {
        let count = self
            .snippets
            .iter()
            .filter(|snippet| snippet.is_trashed())
            .count();
        if count == 0 {
            return;
        }
        self.request_confirmation(ConfirmationState::EmptyTrash { count });
    }

    /// Prompt copy of the pending confirmation, if one is waiting.
    pub fn pending_confirmation(&self) -> Option<String> {
        self.confirmation.prompt()
    }

    /// Resolve the pending confirmation.
    ///
    /// Accepting dispatches the held transition to the store; declining
    /// discards it silently.
    pub fn confirm_pending(&mut self, accepted: bool) {
        let pending = std::mem::replace(&mut self.confirmation, ConfirmationState::None);
        if !accepted {
            return;
        }
        match pending {
            ConfirmationState::None => {}
            ConfirmationState::ToggleTrash { id, restoring, .. } => {
                self.send_or_warn(
                    StoreCmd::MoveToTrash {
                        ids: vec![id],
                        restoring,
                    },
                    "Trash transition",
                );
            }
            ConfirmationState::BulkToggleTrash { ids, restoring } => {
                self.send_or_warn(
                    StoreCmd::MoveToTrash { ids, restoring },
                    "Bulk trash transition",
                );
            }
            ConfirmationState::Purge { id, .. } => {
                self.send_or_warn(StoreCmd::DeleteForever { id }, "Delete forever");
            }
            ConfirmationState::EmptyTrash { .. } => {
                self.send_or_warn(StoreCmd::EmptyTrash, "Empty trash");
            }
        }
    }

    fn request_confirmation(&mut self, next: ConfirmationState) {
        if !self.confirmation.is_none() {
            debug!("replacing pending confirmation with a newer request");
        }
        self.confirmation = next;
    }
}
