//! SnipVault: the reactive session model for a desktop snippet manager.
//!
//! The session keeps a working set of snippets (name, language, timestamps,
//! trash state) in step with an externally-owned store and a query-string
//! navigation channel: derived filtered/sorted lists, multi-select with an
//! effective selection, a confirmation-gated trash lifecycle, debounced
//! write-back of edits, and an effect graph that re-runs exactly when its
//! dependencies change.
//!
//! Rendering, durable storage, and dialog presentation are collaborators:
//! storage sits behind [`SnippetBackend`] driven by the store worker, and
//! the shell drains observable values (visible list, prompts, focus and
//! navigation requests) from [`SnippetSession`].

/// Store worker protocol and spawn helper.
pub mod backend;
/// Codec for the query-string navigation channel.
pub mod nav;
/// Session state and synchronization logic.
pub mod session;

pub use nav::NavParams;
pub use session::{SearchMode, SnippetSession, SyncStats};
pub use snipvault_core::{AppError, Config, MemoryStore, SnippetBackend};
