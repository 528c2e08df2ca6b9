use crate::models::{Monitor, Screen};
use crate::state::State;

impl State {
    /// Adopt a display region as a monitor with its full set of desktops,
    /// all saved once with the configured defaults.
    pub fn screen_create_handler(&mut self, screen: Screen) -> bool {
        let id = self.monitors.len();
        self.monitors.push(Monitor::new(
            id,
            screen.output,
            screen.bbox,
            self.desktops_per_monitor,
            self.default_desktop,
            self.default_mode,
            self.show_panel,
        ));
        if id == self.default_monitor {
            self.current_monitor = id;
        }
        self.publish_status();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Manager;

    #[test]
    fn every_screen_brings_its_own_desktops() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.screen_create_handler(Screen::default());
        state.screen_create_handler(Screen::default());
        assert_eq!(state.monitors.len(), 2);
        assert!(state.monitors.iter().all(|m| m.desktop_count() == 4));
        assert_eq!(state.current_monitor, 0);
    }

    #[test]
    fn points_resolve_to_their_monitor_with_an_active_fallback() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.screen_create_handler(Screen::default());
        let mut second = Screen::default();
        second.bbox.x = 800;
        state.screen_create_handler(second);
        assert_eq!(state.monitor_at_point(10, 10), 0);
        assert_eq!(state.monitor_at_point(900, 10), 1);
        assert_eq!(state.monitor_at_point(-500, -500), state.current_monitor);
    }
}
