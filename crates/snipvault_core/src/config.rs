//! Configuration loading from environment variables.

use serde::Deserialize;
use std::env;

/// Runtime configuration for SnipVault.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Coalescing window for debounced content/name writes, in milliseconds.
    pub write_debounce_ms: u64,
    /// Maximum accepted snippet content size in bytes.
    pub max_snippet_size: usize,
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
///
/// # Arguments
/// - `name`: Environment variable name.
///
/// # Returns
/// `true` when the value is a recognized truthy value.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self {
            write_debounce_ms: env::var("SNIPVAULT_WRITE_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(250),
            max_snippet_size: env::var("SNIPVAULT_MAX_SNIPPET_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10 * 1024 * 1024), // 10MB default
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            write_debounce_ms: 250,
            max_snippet_size: 10 * 1024 * 1024,
        }
    }
}
