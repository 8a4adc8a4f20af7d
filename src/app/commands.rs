//! Contains all the command handlers that are callable from the frontend via IPC.
//!
//! Each function in this module corresponds to a specific `IpcMessage::command`.
//! The handlers parse their payloads, interact with the `AppState` and the
//! pattern store, and send `UserEvent`s back to the UI.

use std::sync::{Arc, Mutex};

use super::events::UserEvent;
use super::helpers::with_state_and_notify;
use super::nav::Route;
use super::proxy::EventProxy;
use super::state::AppState;
use super::store;
use super::view_model::generate_ui_state;
use crate::engine::ScanEngine;

/// Handles the initial request for state from the frontend when it loads.
pub fn initialize<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    let state_guard = state
        .lock()
        .expect("Mutex was poisoned. This should not happen.");
    let event = UserEvent::StateUpdate(Box::new(generate_ui_state(&state_guard)));
    proxy.send_event(event);
}

/// Switches the main view to a new route, refreshing the breadcrumb.
pub fn navigate<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(route) = serde_json::from_value::<Route>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| {
            s.route = route;
        });
    } else {
        tracing::warn!("Failed to deserialize route from payload: {:?}", payload);
    }
}

/// Opens the Settings Panel and loads the pattern list from the engine.
pub async fn open_settings<P: EventProxy>(
    engine: Arc<dyn ScanEngine>,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    with_state_and_notify(&state, &proxy, |s| {
        s.settings_open = true;
        s.reset_settings_state();
    });
    store::load(&engine, &proxy, &state).await;
}

/// Closes the Settings Panel.
///
/// Pure navigation: every mutation was already applied when it happened, so
/// there is nothing to save here. The mirrored list is discarded.
pub fn close_settings<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    with_state_and_notify(&state, &proxy, |s| {
        s.settings_open = false;
        s.reset_settings_state();
    });
}

/// Mirrors the "new pattern" input as the user types, clearing any stale error.
pub fn update_pending_pattern<P: EventProxy>(
    payload: serde_json::Value,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(text) = serde_json::from_value::<String>(payload.clone()) {
        with_state_and_notify(&state, &proxy, |s| {
            s.pending_pattern = text;
            s.pattern_error = None;
        });
    } else {
        tracing::warn!("Failed to deserialize text from payload: {:?}", payload);
    }
}

/// Submits a new ignore pattern via the store.
pub async fn add_pattern<P: EventProxy>(
    payload: serde_json::Value,
    engine: Arc<dyn ScanEngine>,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(raw) = serde_json::from_value::<String>(payload.clone()) {
        // The local validation outcome is already reflected in the state.
        let _ = store::add(&raw, &engine, &proxy, &state).await;
    } else {
        tracing::warn!("Failed to deserialize pattern from payload: {:?}", payload);
    }
}

/// Removes an ignore pattern via the store.
pub async fn remove_pattern<P: EventProxy>(
    payload: serde_json::Value,
    engine: Arc<dyn ScanEngine>,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(pattern) = serde_json::from_value::<String>(payload.clone()) {
        store::remove(&pattern, &engine, &proxy, &state).await;
    } else {
        tracing::warn!("Failed to deserialize pattern from payload: {:?}", payload);
    }
}

/// Toggles an ignore pattern's enabled flag via the store.
pub async fn toggle_pattern<P: EventProxy>(
    payload: serde_json::Value,
    engine: Arc<dyn ScanEngine>,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    if let Ok(pattern) = serde_json::from_value::<String>(payload.clone()) {
        store::toggle(&pattern, &engine, &proxy, &state).await;
    } else {
        tracing::warn!("Failed to deserialize pattern from payload: {:?}", payload);
    }
}

/// Asks the event loop to close the window.
pub fn close_window<P: EventProxy>(proxy: P) {
    proxy.send_event(UserEvent::CloseWindow);
}
