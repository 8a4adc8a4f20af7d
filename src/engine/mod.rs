//! The command interface to the disk-scanning engine.
//!
//! The UI never talks to the engine's internals; it only issues the four
//! pattern commands defined by [`ScanEngine`] and re-reads the full list
//! afterwards. The engine owns the authoritative pattern list, its
//! persistence, and the matching semantics applied during scans.

mod local;

pub use local::LocalEngine;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single ignore pattern as stored by the engine.
///
/// `pattern` is the unique identifier within the list. Disabled patterns are
/// retained but not applied while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnorePattern {
    pub pattern: String,
    pub enabled: bool,
}

/// Errors reported by the engine's pattern commands.
///
/// The `Display` text of these variants is shown verbatim in the Settings
/// Panel when an `add` fails, so the messages are phrased for end users.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Pattern already exists")]
    DuplicatePattern,

    #[error("Pattern not found")]
    UnknownPattern,

    #[error("Failed to persist pattern list: {0}")]
    Persist(#[source] std::io::Error),

    #[error("Failed to parse pattern list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The engine command surface consumed by the UI shell.
///
/// Contract: `add_ignore_pattern` rejects duplicate pattern text;
/// `toggle_ignore_pattern` fails for unknown patterns; removing an unknown
/// pattern succeeds as a no-op. Each call is individually atomic from the
/// caller's perspective.
#[async_trait]
pub trait ScanEngine: Send + Sync {
    async fn get_ignore_patterns(&self) -> Result<Vec<IgnorePattern>, EngineError>;
    async fn add_ignore_pattern(&self, pattern: &str) -> Result<(), EngineError>;
    async fn remove_ignore_pattern(&self, pattern: &str) -> Result<(), EngineError>;
    async fn toggle_ignore_pattern(&self, pattern: &str) -> Result<(), EngineError>;
}
