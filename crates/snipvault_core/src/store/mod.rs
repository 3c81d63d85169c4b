//! Persistence-backend contract and the in-memory reference backend.
//!
//! The session core never owns snippet storage; it drives an implementation
//! of [`SnippetBackend`] through the store worker. The file-backed engine
//! lives outside this crate; [`MemoryStore`] is the reference backend used
//! by tests and embedding shells that do not need durability.

use crate::error::AppError;
use crate::models::snippet::{NewSnippet, Snippet, SnippetField, DEFAULT_LANGUAGE};
use crate::naming;
use chrono::Utc;
use tracing::debug;

/// Contract the store worker drives on behalf of the session.
///
/// Implementations own the shared snippet collection and the content bodies.
/// All mutations flow through these methods; the session only ever observes
/// snapshots returned from them.
pub trait SnippetBackend: Send + 'static {
    /// Load the full snippet index of a folder, trashed entries included.
    fn load_folder(&self, folder: &str) -> Result<Vec<Snippet>, AppError>;

    /// Create a snippet in a folder with the given initial content.
    fn create_snippet(
        &mut self,
        folder: &str,
        new: NewSnippet,
        content: &str,
    ) -> Result<Snippet, AppError>;

    /// Replace a snippet's content body, bumping `updated_at`.
    fn update_content(&mut self, id: &str, content: &str) -> Result<Snippet, AppError>;

    /// Write a single metadata field, bumping `updated_at`.
    fn update_field(
        &mut self,
        id: &str,
        field: SnippetField,
        value: &str,
    ) -> Result<Snippet, AppError>;

    /// Move snippets into the trash, or restore them when `restoring`.
    ///
    /// Ids missing from the collection are skipped. Returns the snippets
    /// that were actually transitioned.
    fn move_to_trash(&mut self, ids: &[String], restoring: bool)
        -> Result<Vec<Snippet>, AppError>;

    /// Permanently remove a trashed snippet.
    fn delete_forever(&mut self, id: &str) -> Result<(), AppError>;

    /// Permanently remove every trashed snippet in a folder.
    ///
    /// Returns the purged ids.
    fn empty_trash(&mut self, folder: &str) -> Result<Vec<String>, AppError>;

    /// Read a snippet's content body.
    fn read_content(&self, id: &str) -> Result<String, AppError>;
}

#[derive(Debug, Clone)]
struct StoredSnippet {
    folder: String,
    snippet: Snippet,
    content: String,
}

/// In-memory reference backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<StoredSnippet>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, id: &str) -> Option<&StoredSnippet> {
        self.entries.iter().find(|entry| entry.snippet.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut StoredSnippet> {
        self.entries.iter_mut().find(|entry| entry.snippet.id == id)
    }
}

impl SnippetBackend for MemoryStore {
    fn load_folder(&self, folder: &str) -> Result<Vec<Snippet>, AppError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.folder == folder)
            .map(|entry| entry.snippet.clone())
            .collect())
    }

    fn create_snippet(
        &mut self,
        folder: &str,
        new: NewSnippet,
        content: &str,
    ) -> Result<Snippet, AppError> {
        let name = match new.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => naming::generate_unique_name(|candidate| {
                self.entries
                    .iter()
                    .any(|entry| entry.folder == folder && entry.snippet.name == candidate)
            }),
        };
        let mut snippet = Snippet::new(name, new.language);
        snippet.export_prefix = new.export_prefix;
        self.entries.push(StoredSnippet {
            folder: folder.to_string(),
            snippet: snippet.clone(),
            content: content.to_string(),
        });
        debug!("created snippet '{}' in folder '{}'", snippet.id, folder);
        Ok(snippet)
    }

    fn update_content(&mut self, id: &str, content: &str) -> Result<Snippet, AppError> {
        let entry = self.find_mut(id).ok_or(AppError::NotFound)?;
        entry.content = content.to_string();
        entry.snippet.updated_at = Utc::now();
        Ok(entry.snippet.clone())
    }

    fn update_field(
        &mut self,
        id: &str,
        field: SnippetField,
        value: &str,
    ) -> Result<Snippet, AppError> {
        let entry = self.find_mut(id).ok_or(AppError::NotFound)?;
        match field {
            SnippetField::Name => entry.snippet.name = value.to_string(),
            SnippetField::Language => {
                entry.snippet.language = if value.trim().is_empty() {
                    DEFAULT_LANGUAGE.to_string()
                } else {
                    value.to_string()
                };
            }
        }
        entry.snippet.updated_at = Utc::now();
        Ok(entry.snippet.clone())
    }

    fn move_to_trash(
        &mut self,
        ids: &[String],
        restoring: bool,
    ) -> Result<Vec<Snippet>, AppError> {
        let now = Utc::now();
        let mut changed = Vec::new();
        for id in ids {
            let Some(entry) = self.find_mut(id) else {
                debug!("trash transition skipped unknown snippet '{}'", id);
                continue;
            };
            if restoring {
                if entry.snippet.deleted_at.take().is_none() {
                    continue;
                }
            } else {
                if entry.snippet.deleted_at.is_some() {
                    continue;
                }
                entry.snippet.deleted_at = Some(now);
            }
            entry.snippet.updated_at = now;
            changed.push(entry.snippet.clone());
        }
        Ok(changed)
    }

    fn delete_forever(&mut self, id: &str) -> Result<(), AppError> {
        let entry = self.find(id).ok_or(AppError::NotFound)?;
        if !entry.snippet.is_trashed() {
            return Err(AppError::BadRequest(
                "snippet is not in the trash".to_string(),
            ));
        }
        self.entries.retain(|entry| entry.snippet.id != id);
        Ok(())
    }

    fn empty_trash(&mut self, folder: &str) -> Result<Vec<String>, AppError> {
        let purged: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.folder == folder && entry.snippet.is_trashed())
            .map(|entry| entry.snippet.id.clone())
            .collect();
        self.entries
            .retain(|entry| !(entry.folder == folder && entry.snippet.is_trashed()));
        Ok(purged)
    }

    fn read_content(&self, id: &str) -> Result<String, AppError> {
        self.find(id)
            .map(|entry| entry.content.clone())
            .ok_or(AppError::NotFound)
    }
}
