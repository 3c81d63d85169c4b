//! Snippet entity and mutation payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Language id assigned to snippets created without an explicit language.
pub const DEFAULT_LANGUAGE: &str = "plaintext";

/// Snippet metadata held in the shared collection.
///
/// The content body is not part of the entity; it is read separately and
/// cached only as the currently open document's buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub name: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the snippet is in the trash; cleared only by an explicit
    /// restore, never by any other mutation.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Optional prefix consumed by the external snippet-export tool.
    pub export_prefix: Option<String>,
}

impl Snippet {
    /// Create a new active snippet with defaults applied.
    ///
    /// # Arguments
    /// - `name`: Display name.
    /// - `language`: Language id, or `None` for [`DEFAULT_LANGUAGE`].
    ///
    /// # Returns
    /// A new [`Snippet`] with a fresh id and current timestamps.
    pub fn new(name: String, language: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: random_id(),
            name,
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            export_prefix: None,
        }
    }

    /// Whether the snippet currently sits in the trash.
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Generate a unique snippet id.
///
/// # Returns
/// A UUID v4 rendered as a string.
pub fn random_id() -> String {
    Uuid::new_v4().to_string()
}

/// Payload for creating a snippet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSnippet {
    /// Display name; a default name is generated when absent.
    pub name: Option<String>,
    /// Language id; [`DEFAULT_LANGUAGE`] when absent.
    pub language: Option<String>,
    pub export_prefix: Option<String>,
}

/// Metadata fields the session may write back individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetField {
    Name,
    Language,
}

impl SnippetField {
    /// Stable field label used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SnippetField::Name => "name",
            SnippetField::Language => "language",
        }
    }
}
