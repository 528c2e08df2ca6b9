#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::DisplayEvent;

use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// Boundary to the windowing protocol. Implementations own the connection,
/// translate protocol events into [`DisplayEvent`]s (adopting existing
/// top-level windows as `WindowCreate` events at startup) and apply the
/// [`DisplayAction`]s the core emits. Resource exhaustion (color
/// allocation, capability probes) is fatal on this side of the boundary.
pub trait DisplayServer {
    fn new(config: &impl Config) -> Self;

    fn get_next_events(&mut self) -> Vec<DisplayEvent>;

    fn load_config(&mut self, _config: &impl Config) {}

    fn execute_action(&mut self, _act: DisplayAction) -> Option<DisplayEvent> {
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);

    fn generate_verify_focus_event(&self) -> Option<DisplayEvent> {
        None
    }
}
