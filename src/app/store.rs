//! The pattern-store client: the mediator between the Settings Panel and the
//! scanning engine's ignore-pattern list.
//!
//! Every mutation is relayed to the engine and, on success, followed by a full
//! reload of the list. There is no optimistic local update: the client never
//! has to reconcile a guessed state against the engine's authoritative one,
//! at the cost of one extra read per write. Fine for a human-paced
//! configuration list.
//!
//! Error policy: `add` failures are surfaced inline in the panel; `load`,
//! `remove` and `toggle` failures are logged only and the UI keeps showing
//! the last known list.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::engine::ScanEngine;

use super::helpers::with_state_and_notify;
use super::proxy::EventProxy;
use super::state::AppState;

/// Local, pre-submission validation failures.
///
/// The `Display` text is shown inline under the input field. Deeper rules
/// (uniqueness and anything semantic) stay with the engine and are reported
/// back verbatim instead of being duplicated here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Pattern cannot be empty")]
    EmptyPattern,
}

/// Fetches the full pattern list from the engine and replaces the mirrored copy.
///
/// On engine failure the previous list is left untouched and the failure is
/// only logged; the refresh is best-effort.
pub async fn load<P: EventProxy>(
    engine: &Arc<dyn ScanEngine>,
    proxy: &P,
    state: &Arc<Mutex<AppState>>,
) {
    match engine.get_ignore_patterns().await {
        Ok(patterns) => {
            with_state_and_notify(state, proxy, |s| {
                s.patterns = patterns;
            });
        }
        Err(e) => {
            tracing::warn!("Failed to load ignore patterns: {}", e);
        }
    }
}

/// Validates and submits a new pattern.
///
/// The raw text is trimmed first. Whitespace-only input fails locally without
/// an engine call. On engine success the pending input and error slot are
/// cleared and the list is reloaded; on engine failure the engine's message
/// is surfaced verbatim and the typed text stays in place for correction.
pub async fn add<P: EventProxy>(
    raw: &str,
    engine: &Arc<dyn ScanEngine>,
    proxy: &P,
    state: &Arc<Mutex<AppState>>,
) -> Result<(), ValidationError> {
    let trimmed = raw.trim().to_string();
    if trimmed.is_empty() {
        with_state_and_notify(state, proxy, |s| {
            s.pending_pattern = raw.to_string();
            s.pattern_error = Some(ValidationError::EmptyPattern.to_string());
        });
        return Err(ValidationError::EmptyPattern);
    }

    match engine.add_ignore_pattern(&trimmed).await {
        Ok(()) => {
            with_state_and_notify(state, proxy, |s| {
                s.pending_pattern.clear();
                s.pattern_error = None;
            });
            load(engine, proxy, state).await;
        }
        Err(e) => {
            with_state_and_notify(state, proxy, |s| {
                s.pending_pattern = raw.to_string();
                s.pattern_error = Some(e.to_string());
            });
        }
    }
    Ok(())
}

/// Removes a pattern, then reloads the list.
///
/// Failures are logged only; the displayed list stays as it was and the user
/// may simply retry.
pub async fn remove<P: EventProxy>(
    pattern: &str,
    engine: &Arc<dyn ScanEngine>,
    proxy: &P,
    state: &Arc<Mutex<AppState>>,
) {
    if let Err(e) = engine.remove_ignore_pattern(pattern).await {
        tracing::warn!("Failed to remove ignore pattern {:?}: {}", pattern, e);
        return;
    }
    load(engine, proxy, state).await;
}

/// Flips a pattern's `enabled` flag, then reloads the list.
///
/// Same best-effort policy as [`remove`].
pub async fn toggle<P: EventProxy>(
    pattern: &str,
    engine: &Arc<dyn ScanEngine>,
    proxy: &P,
    state: &Arc<Mutex<AppState>>,
) {
    if let Err(e) = engine.toggle_ignore_pattern(pattern).await {
        tracing::warn!("Failed to toggle ignore pattern {:?}: {}", pattern, e);
        return;
    }
    load(engine, proxy, state).await;
}
