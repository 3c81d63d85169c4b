//! Core domain library for SnipVault (config, snippet models, store contract).

/// Configuration loading and defaults.
pub mod config;
/// Application error types (storage/domain).
pub mod error;
/// Data models for snippets and mutation payloads.
pub mod models;
/// Default snippet naming helpers.
pub mod naming;
/// Persistence-backend contract and the in-memory reference backend.
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use store::{MemoryStore, SnippetBackend};
