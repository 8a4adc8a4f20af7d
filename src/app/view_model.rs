//! Responsible for transforming the `AppState` into a `UiState` view model.
//!
//! This module acts as a presentation layer, preparing data specifically for
//! consumption by the UI: the breadcrumb trail, window-control placement, and
//! the Settings Panel rows with their display properties.

use serde::Serialize;

use crate::platform::Platform;

use super::nav::Route;
use super::state::AppState;

/// The label of the breadcrumb's root segment.
pub const APP_TITLE: &str = "DiskScope";

/// A serializable representation of the application state for the UI.
#[derive(Serialize, Clone, Debug)]
pub struct UiState {
    pub platform: Platform,
    /// `true` when the window-close control belongs on the left edge of the
    /// titlebar (with the brand mark on the right).
    pub close_control_on_left: bool,
    pub breadcrumb: Vec<BreadcrumbSegment>,
    pub settings_open: bool,
    pub patterns: Vec<PatternRow>,
    pub pending_pattern: String,
    pub pattern_error: Option<String>,
}

/// One segment of the titlebar breadcrumb.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BreadcrumbSegment {
    /// A clickable segment that navigates to `target`.
    Link { label: String, target: Route },
    /// The terminal, non-clickable segment.
    Current { label: String },
}

/// A single ignore-pattern row as the Settings Panel renders it.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PatternRow {
    pub pattern: String,
    pub enabled: bool,
    /// Disabled patterns are rendered struck-through.
    pub struck: bool,
}

/// Creates the complete `UiState` from the current `AppState`.
pub fn generate_ui_state(state: &AppState) -> UiState {
    UiState {
        platform: state.platform,
        close_control_on_left: state.platform.close_control_on_left(),
        breadcrumb: breadcrumb_trail(&state.route),
        settings_open: state.settings_open,
        patterns: state
            .patterns
            .iter()
            .map(|p| PatternRow {
                pattern: p.pattern.clone(),
                enabled: p.enabled,
                struck: !p.enabled,
            })
            .collect(),
        pending_pattern: state.pending_pattern.clone(),
        pattern_error: state.pattern_error.clone(),
    }
}

/// Builds the breadcrumb trail for a route.
///
/// The brand segment is always present and links home. The intermediate
/// "All Disks" link appears only on disk-detail routes, and the terminal
/// segment names the selected disk or folder without being a link.
pub fn breadcrumb_trail(route: &Route) -> Vec<BreadcrumbSegment> {
    let mut trail = vec![BreadcrumbSegment::Link {
        label: APP_TITLE.to_string(),
        target: Route::Root,
    }];

    match route {
        Route::Root | Route::DiskList => {}
        Route::DiskDetail { disk_id } => {
            trail.push(all_disks_link());
            trail.push(BreadcrumbSegment::Current {
                label: format!("Disk ({disk_id})"),
            });
        }
        Route::FolderDetail { folder_path, .. } => {
            trail.push(all_disks_link());
            trail.push(BreadcrumbSegment::Current {
                label: format!("Folder ({folder_path})"),
            });
        }
    }

    trail
}

fn all_disks_link() -> BreadcrumbSegment {
    BreadcrumbSegment::Link {
        label: "All Disks".to_string(),
        target: Route::DiskList,
    }
}
