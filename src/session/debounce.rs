//! Debounced write-back of content and name edits.
//!
//! Each channel keeps at most one pending slot; re-arming supersedes the
//! previous value and restarts the window. The target id is captured when
//! the slot is armed, so a window firing after navigation still writes to
//! the snippet that was edited.

use super::SnippetSession;
use crate::backend::StoreCmd;
use snipvault_core::models::snippet::SnippetField;
use std::time::Instant;
use tracing::debug;

/// One armed debounce slot.
#[derive(Debug, Clone)]
pub(super) struct PendingWrite {
    pub(super) target_id: String,
    pub(super) value: String,
    pub(super) armed_at: Instant,
}

impl PendingWrite {
    fn arm(target_id: String, value: String) -> Self {
        Self {
            target_id,
            value,
            armed_at: Instant::now(),
        }
    }
}

impl SnippetSession {
    /// Record a content keystroke and (re)arm the content write window.
    pub fn edit_content(&mut self, value: impl Into<String>) {
        let value = value.into();
        let Some(id) = self.open_id.clone() else {
            debug!("content edit ignored with no open snippet");
            return;
        };
        self.open_content = value.clone();
        if self.content_write.take().is_some() {
            self.stats.writes_superseded += 1;
        }
        self.content_write = Some(PendingWrite::arm(id, value));
    }

    /// Record a name keystroke and (re)arm the name write window.
    pub fn edit_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        let Some(id) = self.open_id.clone() else {
            debug!("name edit ignored with no open snippet");
            return;
        };
        self.open_name = value.clone();
        if self.name_write.take().is_some() {
            self.stats.writes_superseded += 1;
        }
        self.name_write = Some(PendingWrite::arm(id, value));
    }

    /// Dispatch any debounce slot whose window has elapsed.
    pub(super) fn maybe_flush_writes(&mut self) {
        self.maybe_flush_content();
        self.maybe_flush_name();
    }

    fn maybe_flush_content(&mut self) {
        if self.content_write_in_flight.is_some() {
            return;
        }
        let due = self
            .content_write
            .as_ref()
            .map(|write| write.armed_at.elapsed() >= self.write_debounce)
            .unwrap_or(false);
        if !due {
            return;
        }
        let Some(write) = self.content_write.take() else {
            return;
        };
        if self.matches_committed(&self.committed_content, &write) {
            self.stats.writes_skipped_noop += 1;
            return;
        }
        let sent = self.send_or_warn(
            StoreCmd::UpdateContent {
                id: write.target_id.clone(),
                content: write.value,
            },
            "Content save",
        );
        if sent {
            self.content_write_in_flight = Some(write.target_id);
            self.stats.writes_sent += 1;
        }
    }

    fn maybe_flush_name(&mut self) {
        if self.name_write_in_flight.is_some() {
            return;
        }
        let due = self
            .name_write
            .as_ref()
            .map(|write| write.armed_at.elapsed() >= self.write_debounce)
            .unwrap_or(false);
        if !due {
            return;
        }
        let Some(write) = self.name_write.take() else {
            return;
        };
        if self.matches_committed(&self.committed_name, &write) {
            self.stats.writes_skipped_noop += 1;
            return;
        }
        let sent = self.send_or_warn(
            StoreCmd::UpdateField {
                id: write.target_id.clone(),
                field: SnippetField::Name,
                value: write.value,
            },
            "Name save",
        );
        if sent {
            self.name_write_in_flight = Some(write.target_id);
            self.stats.writes_sent += 1;
        }
    }

    fn matches_committed(
        &self,
        committed: &Option<(String, String)>,
        write: &PendingWrite,
    ) -> bool {
        committed
            .as_ref()
            .map(|(id, value)| *id == write.target_id && *value == write.value)
            .unwrap_or(false)
    }

    /// Drop pending and in-flight writes targeting a removed snippet.
    pub(super) fn drop_pending_writes_for(&mut self, id: &str) {
        if self
            .content_write
            .as_ref()
            .map(|write| write.target_id == id)
            .unwrap_or(false)
        {
            self.content_write = None;
        }
        if self
            .name_write
            .as_ref()
            .map(|write| write.target_id == id)
            .unwrap_or(false)
        {
            self.name_write = None;
        }
        if self.content_write_in_flight.as_deref() == Some(id) {
            self.content_write_in_flight = None;
        }
        if self.name_write_in_flight.as_deref() == Some(id) {
            self.name_write_in_flight = None;
        }
    }
}
