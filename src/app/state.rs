//! Defines the central, mutable state of the application.

use crate::config::AppConfig;
use crate::engine::IgnorePattern;
use crate::platform::Platform;

use super::nav::Route;

/// Holds the complete, mutable state of the application.
///
/// This struct is wrapped in an `Arc<Mutex<...>>` to allow for safe, shared access
/// from the main event loop, IPC handlers, and async command tasks.
pub struct AppState {
    /// The application's configuration settings (window geometry).
    pub config: AppConfig,
    /// The host platform, detected once at startup and injected here.
    pub platform: Platform,
    /// Where the main view currently is; drives the breadcrumb.
    pub route: Route,
    /// `true` while the Settings Panel overlay is shown. Transient, never persisted.
    pub settings_open: bool,
    /// The mirrored ignore-pattern list, only ever replaced wholesale by a reload.
    pub patterns: Vec<IgnorePattern>,
    /// The text currently typed into the "new pattern" input.
    pub pending_pattern: String,
    /// The inline error shown under the input, if any.
    pub pattern_error: Option<String>,
}

impl Default for AppState {
    /// Creates a default `AppState` instance, loading the configuration from disk.
    fn default() -> Self {
        Self {
            config: AppConfig::load().unwrap_or_default(),
            platform: Platform::current(),
            route: Route::default(),
            settings_open: false,
            patterns: Vec::new(),
            pending_pattern: String::new(),
            pattern_error: None,
        }
    }
}

impl AppState {
    /// Resets everything the Settings Panel owns.
    ///
    /// Used both when the panel opens (fresh input) and when it closes (the
    /// mirrored list is discarded; the engine remains the source of truth).
    pub fn reset_settings_state(&mut self) {
        self.patterns.clear();
        self.pending_pattern.clear();
        self.pattern_error = None;
    }
}
