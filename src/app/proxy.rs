//! The channel through which backend code pushes events at the UI thread.

use super::events::UserEvent;
use tao::event_loop::EventLoopProxy;

/// Sends `UserEvent`s — state updates and window-close requests — towards
/// the event loop, fire-and-forget. The command layer is generic over this
/// seam so tests can capture events on a plain channel instead of spinning
/// up a real window.
pub trait EventProxy: Send + Sync + Clone + 'static {
    fn send_event(&self, event: UserEvent);
}

/// Production implementation backed by tao's own proxy.
///
/// A send only fails once the event loop has shut down, at which point there
/// is no UI left to update; the event is dropped with a warning.
impl EventProxy for EventLoopProxy<UserEvent> {
    fn send_event(&self, event: UserEvent) {
        if let Err(e) = self.send_event(event) {
            tracing::warn!("Event loop is gone, dropping event: {}", e);
        }
    }
}
