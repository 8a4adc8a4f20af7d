//! The in-process engine implementation.
//!
//! Keeps the pattern list in memory behind a mutex and writes it back to disk
//! as pretty-printed JSON after every successful mutation, so the list
//! survives restarts without any separate save step.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{EngineError, IgnorePattern, ScanEngine};

pub struct LocalEngine {
    path: PathBuf,
    patterns: Mutex<Vec<IgnorePattern>>,
}

impl LocalEngine {
    /// Opens the engine against the given pattern file.
    ///
    /// A missing file yields an empty list. A corrupt file logs a warning and
    /// falls back to an empty list rather than failing startup.
    pub fn open(path: PathBuf) -> Self {
        let patterns = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => match serde_json::from_str::<Vec<IgnorePattern>>(&contents) {
                    Ok(patterns) => patterns,
                    Err(e) => {
                        tracing::warn!(
                            "Failed to parse pattern file at {:?}: {}. Starting with an empty list.",
                            path,
                            e
                        );
                        Vec::new()
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        "Failed to read pattern file at {:?}: {}. Starting with an empty list.",
                        path,
                        e
                    );
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Self {
            path,
            patterns: Mutex::new(patterns),
        }
    }

    fn persist(&self, patterns: &[IgnorePattern]) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(EngineError::Persist)?;
        }
        let contents = serde_json::to_string_pretty(patterns)?;
        fs::write(&self.path, contents).map_err(EngineError::Persist)?;
        tracing::debug!("Persisted {} ignore patterns to {:?}", patterns.len(), self.path);
        Ok(())
    }
}

#[async_trait]
impl ScanEngine for LocalEngine {
    async fn get_ignore_patterns(&self) -> Result<Vec<IgnorePattern>, EngineError> {
        let patterns = self
            .patterns
            .lock()
            .expect("Mutex was poisoned. This should not happen.");
        Ok(patterns.clone())
    }

    async fn add_ignore_pattern(&self, pattern: &str) -> Result<(), EngineError> {
        let mut patterns = self
            .patterns
            .lock()
            .expect("Mutex was poisoned. This should not happen.");

        if patterns.iter().any(|p| p.pattern == pattern) {
            return Err(EngineError::DuplicatePattern);
        }

        patterns.push(IgnorePattern {
            pattern: pattern.to_string(),
            enabled: true,
        });
        self.persist(&patterns)
    }

    async fn remove_ignore_pattern(&self, pattern: &str) -> Result<(), EngineError> {
        let mut patterns = self
            .patterns
            .lock()
            .expect("Mutex was poisoned. This should not happen.");

        // Removing an unknown pattern is a successful no-op.
        patterns.retain(|p| p.pattern != pattern);
        self.persist(&patterns)
    }

    async fn toggle_ignore_pattern(&self, pattern: &str) -> Result<(), EngineError> {
        let mut patterns = self
            .patterns
            .lock()
            .expect("Mutex was poisoned. This should not happen.");

        match patterns.iter_mut().find(|p| p.pattern == pattern) {
            Some(p) => {
                p.enabled = !p.enabled;
                self.persist(&patterns)
            }
            None => Err(EngineError::UnknownPattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn engine_in(dir: &tempfile::TempDir) -> LocalEngine {
        LocalEngine::open(dir.path().join("ignore_patterns.json"))
    }

    #[tokio::test]
    async fn add_then_get_returns_enabled_pattern() {
        let dir = tempdir().unwrap();
        let engine = engine_in(&dir);

        engine.add_ignore_pattern("node_modules").await.unwrap();

        let patterns = engine.get_ignore_patterns().await.unwrap();
        assert_eq!(
            patterns,
            vec![IgnorePattern {
                pattern: "node_modules".to_string(),
                enabled: true
            }]
        );
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected_verbatim() {
        let dir = tempdir().unwrap();
        let engine = engine_in(&dir);

        engine.add_ignore_pattern("*.log").await.unwrap();
        let err = engine.add_ignore_pattern("*.log").await.unwrap_err();

        assert_eq!(err.to_string(), "Pattern already exists");
    }

    #[tokio::test]
    async fn toggle_flips_enabled_and_unknown_pattern_errors() {
        let dir = tempdir().unwrap();
        let engine = engine_in(&dir);
        engine.add_ignore_pattern("*.tmp").await.unwrap();

        engine.toggle_ignore_pattern("*.tmp").await.unwrap();
        let patterns = engine.get_ignore_patterns().await.unwrap();
        assert!(!patterns[0].enabled);

        engine.toggle_ignore_pattern("*.tmp").await.unwrap();
        let patterns = engine.get_ignore_patterns().await.unwrap();
        assert!(patterns[0].enabled);

        let err = engine.toggle_ignore_pattern("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Pattern not found");
    }

    #[tokio::test]
    async fn remove_unknown_pattern_is_a_noop_success() {
        let dir = tempdir().unwrap();
        let engine = engine_in(&dir);
        engine.add_ignore_pattern(".git").await.unwrap();

        engine.remove_ignore_pattern("not-there").await.unwrap();

        let patterns = engine.get_ignore_patterns().await.unwrap();
        assert_eq!(patterns.len(), 1);
    }

    #[tokio::test]
    async fn list_survives_reopen_of_the_same_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ignore_patterns.json");

        {
            let engine = LocalEngine::open(path.clone());
            engine.add_ignore_pattern("target").await.unwrap();
            engine.add_ignore_pattern("*.log").await.unwrap();
            engine.toggle_ignore_pattern("*.log").await.unwrap();
        }

        let engine = LocalEngine::open(path);
        let patterns = engine.get_ignore_patterns().await.unwrap();
        assert_eq!(patterns.len(), 2);
        assert!(patterns.iter().any(|p| p.pattern == "target" && p.enabled));
        assert!(patterns.iter().any(|p| p.pattern == "*.log" && !p.enabled));
    }

    #[tokio::test]
    async fn corrupt_pattern_file_falls_back_to_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ignore_patterns.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let engine = LocalEngine::open(path);
        let patterns = engine.get_ignore_patterns().await.unwrap();
        assert!(patterns.is_empty());
    }
}
