//! Protocol types for the store worker.

use snipvault_core::models::snippet::{NewSnippet, Snippet, SnippetField};

/// Commands issued by the session for the store worker to execute.
#[derive(Debug)]
pub enum StoreCmd {
    /// Set (or clear) the worker's active folder without loading it.
    SetFolder { folder: Option<String> },
    /// Load a folder's snippet index, trashed entries included.
    LoadFolder { folder: String },
    /// Create a snippet in the active folder with the provided content.
    CreateSnippet { new: NewSnippet, content: String },
    /// Persist updated content for an existing snippet.
    UpdateContent { id: String, content: String },
    /// Persist a single metadata field for an existing snippet.
    UpdateField {
        id: String,
        field: SnippetField,
        value: String,
    },
    /// Move snippets into the trash, or restore them when `restoring`.
    MoveToTrash { ids: Vec<String>, restoring: bool },
    /// Permanently remove a trashed snippet.
    DeleteForever { id: String },
    /// Permanently remove every trashed snippet in the active folder.
    EmptyTrash,
    /// Read a snippet's content body.
    ReadContent { id: String },
}

/// Events produced by the store worker and drained by the session.
#[derive(Debug)]
pub enum StoreEvent {
    /// Snapshot of a folder's snippet index.
    FolderIndex { folder: String, items: Vec<Snippet> },
    /// The active folder was cleared; the working set is empty.
    FolderCleared,
    /// Response containing a newly created snippet.
    SnippetCreated { snippet: Snippet },
    /// Response containing a snippet's content body.
    ContentLoaded { id: String, content: String },
    /// Response confirming a content write, with the refreshed entity.
    ContentSaved { snippet: Snippet, content: String },
    /// Response confirming a metadata field write.
    FieldSaved {
        snippet: Snippet,
        field: SnippetField,
    },
    /// Response confirming a trash/restore transition.
    TrashToggled {
        snippets: Vec<Snippet>,
        restoring: bool,
    },
    /// Response confirming a permanent single-snippet removal.
    SnippetPurged { id: String },
    /// Response confirming the trash was emptied.
    TrashEmptied { ids: Vec<String> },
    /// The requested snippet id no longer exists in the collection.
    SnippetMissing { id: String },
    /// A backend failure occurred.
    Error {
        source: StoreErrorSource,
        message: String,
    },
}

/// Request class an error event belongs to.
///
/// Lets the session reset only the in-flight state that matches the failing
/// request instead of cancelling unrelated work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorSource {
    SaveContent,
    SaveField,
    Lifecycle,
    Load,
    Other,
}
