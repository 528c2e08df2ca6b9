use crate::display_action::DisplayAction;
use crate::models::{DesktopId, MonitorId};
use crate::state::State;

impl State {
    /// Switch the focused monitor to another desktop.
    ///
    /// To avoid flickering the incoming desktop is mapped first, current
    /// window ahead of the others, and only then is the outgoing desktop
    /// unmapped, others ahead of its current window. The client lists
    /// travel through the monitor's save/select protocol, so the switch
    /// itself is two struct copies.
    pub fn goto_desktop(&mut self, index: DesktopId) -> bool {
        let mi = self.current_monitor;
        let Some(monitor) = self.monitors.get_mut(mi) else {
            return false;
        };
        if index == monitor.current_desktop || index >= monitor.desktop_count() {
            return false;
        }
        let origin = monitor.current_desktop;
        monitor.previous_desktop = origin;

        monitor.select_desktop(index);
        let mut maps = Vec::with_capacity(monitor.live.clients.len());
        if let Some(h) = monitor.live.current {
            maps.push(h);
        }
        for c in &monitor.live.clients {
            if Some(c.handle) != monitor.live.current {
                maps.push(c.handle);
            }
        }
        monitor.select_desktop(origin);
        let mut unmaps = Vec::with_capacity(monitor.live.clients.len());
        for c in &monitor.live.clients {
            if Some(c.handle) != monitor.live.current {
                unmaps.push(c.handle);
            }
        }
        if let Some(h) = monitor.live.current {
            unmaps.push(h);
        }
        monitor.select_desktop(index);
        let target = monitor.live.current;

        for h in maps {
            self.actions.push_back(DisplayAction::MapWindow(h));
        }
        for h in unmaps {
            self.actions.push_back(DisplayAction::UnmapWindow(h));
        }
        self.arrange(mi);
        self.update_current(target);
        self.publish_status();
        true
    }

    /// Make another monitor the one receiving commands. Focus visuals move
    /// with it; the desktops of both monitors stay as they are.
    pub fn change_monitor(&mut self, index: MonitorId) -> bool {
        if index == self.current_monitor || index >= self.monitors.len() {
            return false;
        }
        self.previous_monitor = self.current_monitor;
        self.current_monitor = index;
        let target = self.monitors[index].live.current;
        self.update_current(target);
        self.publish_status();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, Manager, Screen, WindowHandle};

    #[test]
    fn switching_away_and_back_restores_the_desktop_bit_for_bit() {
        let mut manager = Manager::new_test();
        manager.state.screen_create_handler(Screen::default());
        for h in [1, 2] {
            manager
                .state
                .window_created_handler(Client::new(WindowHandle(h), None), None, None);
        }
        let before = manager.state.focused_desktop().unwrap().clone();

        assert!(manager.state.goto_desktop(1));
        assert!(manager.state.focused_desktop().unwrap().clients.is_empty());
        assert!(manager.state.goto_desktop(0));
        assert_eq!(*manager.state.focused_desktop().unwrap(), before);
    }

    #[test]
    fn switching_to_the_same_or_absent_desktop_is_a_noop() {
        let mut manager = Manager::new_test();
        manager.state.screen_create_handler(Screen::default());
        assert!(!manager.state.goto_desktop(0));
        assert!(!manager.state.goto_desktop(99));
    }

    #[test]
    fn the_incoming_desktop_maps_before_the_outgoing_unmaps() {
        let mut manager = Manager::new_test();
        manager.state.screen_create_handler(Screen::default());
        manager
            .state
            .window_created_handler(Client::new(WindowHandle(1), None), None, None);
        manager.state.goto_desktop(1);
        manager
            .state
            .window_created_handler(Client::new(WindowHandle(2), None), None, None);
        manager.state.actions.clear();

        manager.state.goto_desktop(0);
        let positions: Vec<_> = manager
            .state
            .actions
            .iter()
            .filter_map(|a| match a {
                DisplayAction::MapWindow(h) => Some(("map", h.0)),
                DisplayAction::UnmapWindow(h) => Some(("unmap", h.0)),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![("map", 1), ("unmap", 2)]);
    }

    #[test]
    fn changing_monitor_remembers_the_previous_one() {
        let mut manager = Manager::new_test();
        manager.state.screen_create_handler(Screen::default());
        manager.state.screen_create_handler(Screen::default());
        assert!(manager.state.change_monitor(1));
        assert_eq!(manager.state.current_monitor, 1);
        assert_eq!(manager.state.previous_monitor, 0);
        assert!(!manager.state.change_monitor(1));
        assert!(!manager.state.change_monitor(7));
    }
}
