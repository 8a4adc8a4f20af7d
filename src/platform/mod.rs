//! Platform-specific integration helpers.
//!
//! Keep OS quirks here to avoid leaking them into the app's core logic.

use serde::Serialize;

/// The host platform, detected once at startup and passed explicitly to the
/// components that need it. Nothing else in the app queries the OS directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Macos,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Macos
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// macOS puts window controls on the left edge of the titlebar; everyone
    /// else puts them on the right, with the brand mark taking the other side.
    pub fn close_control_on_left(self) -> bool {
        matches!(self, Platform::Macos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_control_is_left_only_on_macos() {
        assert!(Platform::Macos.close_control_on_left());
        assert!(!Platform::Windows.close_control_on_left());
        assert!(!Platform::Linux.close_control_on_left());
    }
}
