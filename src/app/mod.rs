//! The application layer: state, IPC dispatch, and the view model sent to the UI.

pub mod commands;
pub mod events;
pub mod helpers;
pub mod nav;
pub mod proxy;
pub mod state;
pub mod store;
pub mod view_model;

use std::sync::{Arc, Mutex};

use events::{IpcMessage, UserEvent};
use proxy::EventProxy;
use state::AppState;

use crate::engine::ScanEngine;

/// Parses an IPC message from the WebView and dispatches it to its handler.
///
/// Handlers that talk to the engine are async and run as spawned tasks so the
/// UI thread is never blocked; the rest mutate state synchronously. Unknown
/// commands and malformed messages are logged and ignored.
pub fn handle_ipc_message<P: EventProxy>(
    message: String,
    engine: Arc<dyn ScanEngine>,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    let msg: IpcMessage = match serde_json::from_str(&message) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!("Failed to parse IPC message {:?}: {}", message, e);
            return;
        }
    };
    tracing::debug!("IPC command received: {}", msg.command);

    match msg.command.as_str() {
        "initialize" => commands::initialize(proxy, state),
        "navigate" => commands::navigate(msg.payload, proxy, state),
        "openSettings" => {
            tokio::spawn(commands::open_settings(engine, proxy, state));
        }
        "closeSettings" => commands::close_settings(proxy, state),
        "updatePendingPattern" => commands::update_pending_pattern(msg.payload, proxy, state),
        "addPattern" => {
            tokio::spawn(commands::add_pattern(msg.payload, engine, proxy, state));
        }
        "removePattern" => {
            tokio::spawn(commands::remove_pattern(msg.payload, engine, proxy, state));
        }
        "togglePattern" => {
            tokio::spawn(commands::toggle_pattern(msg.payload, engine, proxy, state));
        }
        "closeWindow" => commands::close_window(proxy),
        other => {
            tracing::warn!("Unknown IPC command: {}", other);
        }
    }
}

/// Applies a backend event to the WebView.
///
/// `CloseWindow` is intercepted by the event loop in `main` before this is
/// reached; everything else becomes a render call into the frontend.
pub fn handle_user_event(event: UserEvent, webview: &wry::WebView) {
    match event {
        UserEvent::StateUpdate(ui_state) => match serde_json::to_string(&*ui_state) {
            Ok(json) => {
                let script = format!("window.render({json});");
                if let Err(e) = webview.evaluate_script(&script) {
                    tracing::warn!("Failed to push state to WebView: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize UI state: {}", e);
            }
        },
        UserEvent::CloseWindow => {}
    }
}
