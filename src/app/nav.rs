//! The navigation state the window chrome derives its breadcrumb from.

use serde::{Deserialize, Serialize};

/// Where the main view currently is.
///
/// Carried as an explicit tagged value instead of a loose path string plus an
/// optional context bag, so the breadcrumb can't observe half-filled state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum Route {
    Root,
    DiskList,
    #[serde(rename_all = "camelCase")]
    DiskDetail { disk_id: String },
    #[serde(rename_all = "camelCase")]
    FolderDetail { disk_id: String, folder_path: String },
}

impl Default for Route {
    fn default() -> Self {
        Route::Root
    }
}
