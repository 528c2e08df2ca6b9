use crate::config::UrgentScan;
use crate::display_action::{BorderColor, DisplayAction};
use crate::models::{Client, Desktop, DesktopId, Mode, MonitorId, WindowHandle};
use crate::state::State;

impl State {
    /// Highlight borders, restack, and hand out input focus.
    ///
    /// This is the single choke point for focus visuals: every operation
    /// that can change who is focused, or how many clients share a desktop,
    /// ends up here. Passing `None` on an empty desktop clears the
    /// active-window property; otherwise the focus moves to the given
    /// client, falling back to the previously focused client and then the
    /// list head.
    ///
    /// A client has no border when it is alone on its desktop, when it is
    /// fullscreen, or in monocle mode while it is tiled.
    pub fn update_current(&mut self, target: Option<WindowHandle>) {
        let mi = self.current_monitor;
        let Some(monitor) = self.monitors.get_mut(mi) else {
            return;
        };
        let desktop = &mut monitor.live;
        if desktop.clients.is_empty() {
            desktop.current = None;
            desktop.prev_focus = None;
            self.actions.push_back(DisplayAction::SetActiveWindow(None));
            return;
        }
        apply_focus_transition(desktop, target);

        let border_width = self.border_width;
        let mut visuals = Vec::new();
        for (i, monitor) in self.monitors.iter().enumerate() {
            let desktop = &monitor.live;
            let lone = desktop.clients.len() == 1;
            for client in &desktop.clients {
                let width = if lone
                    || client.fullscreen
                    || (desktop.mode == Mode::Monocle && client.is_tileable())
                {
                    0
                } else {
                    border_width
                };
                let color = if i == mi && Some(client.handle) == desktop.current {
                    BorderColor::Focused
                } else {
                    BorderColor::Unfocused
                };
                visuals.push(DisplayAction::SetBorderWidth(client.handle, width));
                visuals.push(DisplayAction::SetBorderColor(client.handle, color));
            }
        }
        self.actions.extend(visuals);

        let desktop = &self.monitors[mi].live;
        if let Some(current) = desktop.current {
            let order = restack_order(desktop, current);
            self.actions.push_back(DisplayAction::SetWindowOrder(order));
            self.actions
                .push_back(DisplayAction::SetActiveWindow(Some(current)));
            self.actions.push_back(DisplayAction::SetInputFocus(current));
        }
    }

    /// Cyclic focus of the next window; the last window wraps to the head.
    pub fn focus_next(&mut self) -> bool {
        let Some(desktop) = self.focused_desktop() else {
            return false;
        };
        let Some(current) = desktop.current else {
            return false;
        };
        if desktop.clients.len() < 2 {
            return false;
        }
        let target = desktop.next_of(current);
        self.update_current(target);
        true
    }

    /// Cyclic focus of the previous window; the head wraps to the last.
    /// The outgoing window is recorded as previous focus, so a later
    /// removal falls back to it.
    pub fn focus_prev(&mut self) -> bool {
        let Some(desktop) = self.focused_desktop() else {
            return false;
        };
        let Some(current) = desktop.current else {
            return false;
        };
        if desktop.clients.len() < 2 {
            return false;
        }
        let target = desktop.prev_of(current);
        if let Some(desktop) = self.focused_desktop_mut() {
            desktop.prev_focus = Some(current);
        }
        self.update_current(target);
        true
    }

    /// Find and focus the first client holding an urgency hint, switching
    /// monitor and desktop on the way if it lives elsewhere.
    pub fn focus_urgent(&mut self) -> bool {
        let Some((mi, di, handle)) = self.find_urgent() else {
            return false;
        };
        if mi != self.current_monitor {
            self.change_monitor(mi);
        }
        if di != self.monitors[mi].current_desktop {
            self.goto_desktop(di);
        }
        self.update_current(Some(handle));
        true
    }

    fn find_urgent(&self) -> Option<(MonitorId, DesktopId, WindowHandle)> {
        let count = self.monitors.len();
        if count == 0 {
            return None;
        }
        // the focused monitor goes first so a local hint wins
        for mi in (0..count).map(|i| (self.current_monitor + i) % count) {
            let monitor = &self.monitors[mi];
            match self.urgent_scan {
                UrgentScan::CurrentDesktops => {
                    if let Some(c) = monitor.live.clients.iter().find(|c| c.urgent) {
                        return Some((mi, monitor.current_desktop, c.handle));
                    }
                }
                UrgentScan::AllDesktops => {
                    let desktops = monitor.desktop_count();
                    for di in (0..desktops).map(|i| (monitor.current_desktop + i) % desktops) {
                        let urgent = monitor
                            .desktop(di)
                            .and_then(|d| d.clients.iter().find(|c| c.urgent));
                        if let Some(c) = urgent {
                            return Some((mi, di, c.handle));
                        }
                    }
                }
            }
        }
        None
    }

    /// Focus a window on sight (pointer entry, click, activation checks).
    /// Only windows on a visible desktop may take the focus; crossing to
    /// another monitor selects it first.
    pub fn focus_window(&mut self, handle: WindowHandle) -> bool {
        let Some((mi, di)) = self.window_location(handle) else {
            return false;
        };
        if di != self.monitors[mi].current_desktop {
            return false;
        }
        if mi != self.current_monitor {
            self.change_monitor(mi);
        }
        self.update_current(Some(handle));
        true
    }

    pub fn pointer_enter_handler(&mut self, handle: WindowHandle) -> bool {
        if self.focus_follows_mouse {
            return self.focus_window(handle);
        }
        false
    }

    pub fn button_press_handler(&mut self, handle: WindowHandle) -> bool {
        let current = self.focused_desktop().and_then(|d| d.current);
        if self.click_to_focus && current != Some(handle) {
            return self.focus_window(handle);
        }
        false
    }

    /// The pointer crossed into another monitor's rectangle.
    pub fn pointer_move_handler(&mut self, x: i32, y: i32) -> bool {
        let target = self.monitor_at_point(x, y);
        if target == self.current_monitor {
            return false;
        }
        self.change_monitor(target)
    }

    /// Double check that we are focused on the correct window.
    pub fn validate_focus_at(&mut self, handle: WindowHandle) -> bool {
        if self.focused_desktop().and_then(|d| d.current) == Some(handle) {
            return false;
        }
        self.focus_window(handle)
    }
}

/// Focus bookkeeping shared between visible desktops (through
/// [`State::update_current`]) and hidden ones (fields only). Mirrors the
/// focus fallback order: previous focus while it is still a member, then
/// the list head.
pub(crate) fn apply_focus_transition(desktop: &mut Desktop, target: Option<WindowHandle>) {
    let head = desktop.head();
    if target == desktop.prev_focus {
        let current = desktop.prev_focus.filter(|h| desktop.contains(*h)).or(head);
        desktop.current = current;
        desktop.prev_focus = current.and_then(|h| desktop.prev_of(h));
    } else if target != desktop.current {
        desktop.prev_focus = desktop.current.filter(|h| desktop.contains(*h));
        desktop.current = target.filter(|h| desktop.contains(*h)).or(head);
    }
}

/// Stack order by client properties, top to bottom: the current window when
/// floating or transient, then floating or transient windows, the current
/// window when tiled, the current window when fullscreen, fullscreen
/// windows, and tiled windows at the bottom.
fn restack_order(desktop: &Desktop, current: WindowHandle) -> Vec<WindowHandle> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Layer {
        Floating,
        Tiled,
        Fullscreen,
    }
    fn layer(c: &Client) -> Layer {
        if c.fullscreen {
            Layer::Fullscreen
        } else if c.floating || c.transient {
            Layer::Floating
        } else {
            Layer::Tiled
        }
    }

    let current_layer = desktop.client(current).map(layer);
    let others = |wanted: Layer| {
        desktop
            .clients
            .iter()
            .filter(move |c| c.handle != current && layer(c) == wanted)
            .map(|c| c.handle)
    };

    let mut order = Vec::with_capacity(desktop.clients.len());
    if current_layer == Some(Layer::Floating) {
        order.push(current);
    }
    order.extend(others(Layer::Floating));
    if current_layer == Some(Layer::Tiled) || current_layer == Some(Layer::Fullscreen) {
        order.push(current);
    }
    order.extend(others(Layer::Fullscreen));
    order.extend(others(Layer::Tiled));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InsertBehavior;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{Manager, Screen};

    fn setup(windows: u64) -> Manager<crate::config::TestConfig, MockDisplayServer> {
        let mut manager = Manager::new_test();
        manager.state.screen_create_handler(Screen::default());
        for h in 1..=windows {
            manager
                .state
                .window_created_handler(Client::new(WindowHandle(h), None), None, None);
        }
        manager.state.actions.clear();
        manager
    }

    fn current(state: &State) -> Option<WindowHandle> {
        state.focused_desktop().and_then(|d| d.current)
    }

    #[test]
    fn focus_cycles_through_the_list_in_both_directions() {
        let mut manager = setup(3);
        assert_eq!(current(&manager.state), Some(WindowHandle(3)));
        manager.state.focus_next();
        assert_eq!(current(&manager.state), Some(WindowHandle(1)));
        manager.state.focus_prev();
        assert_eq!(current(&manager.state), Some(WindowHandle(3)));
        manager.state.focus_prev();
        assert_eq!(current(&manager.state), Some(WindowHandle(2)));
    }

    #[test]
    fn focus_change_needs_at_least_two_clients() {
        let mut manager = setup(1);
        assert!(!manager.state.focus_next());
        assert!(!manager.state.focus_prev());
        assert_eq!(current(&manager.state), Some(WindowHandle(1)));
    }

    #[test]
    fn focus_prev_records_the_outgoing_window() {
        let mut manager = setup(3);
        manager.state.focus_prev();
        let desktop = manager.state.focused_desktop().unwrap();
        assert_eq!(desktop.current, Some(WindowHandle(2)));
        assert_eq!(desktop.prev_focus, Some(WindowHandle(3)));
    }

    #[test]
    fn lone_and_fullscreen_clients_carry_no_border() {
        let mut manager = setup(1);
        manager.state.update_current(Some(WindowHandle(1)));
        assert!(manager
            .state
            .actions
            .iter()
            .any(|a| *a == DisplayAction::SetBorderWidth(WindowHandle(1), 0)));
    }

    #[test]
    fn monocle_borders_vanish_only_for_tiled_clients() {
        let mut manager = setup(3);
        manager
            .state
            .focused_desktop_mut()
            .unwrap()
            .mode = Mode::Monocle;
        manager
            .state
            .focused_desktop_mut()
            .unwrap()
            .client_mut(WindowHandle(2))
            .unwrap()
            .floating = true;
        manager.state.update_current(Some(WindowHandle(1)));
        let actions = &manager.state.actions;
        assert!(actions
            .iter()
            .any(|a| *a == DisplayAction::SetBorderWidth(WindowHandle(1), 0)));
        assert!(actions
            .iter()
            .any(|a| *a == DisplayAction::SetBorderWidth(WindowHandle(2), 2)));
    }

    #[test]
    fn floating_clients_stack_above_tiled_ones() {
        let mut manager = setup(3);
        manager
            .state
            .focused_desktop_mut()
            .unwrap()
            .client_mut(WindowHandle(1))
            .unwrap()
            .floating = true;
        manager.state.update_current(Some(WindowHandle(2)));
        let order = manager
            .state
            .actions
            .iter()
            .find_map(|a| match a {
                DisplayAction::SetWindowOrder(order) => Some(order.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            order,
            vec![WindowHandle(1), WindowHandle(2), WindowHandle(3)]
        );
    }

    #[test]
    fn urgent_scan_can_cross_desktops_when_configured() {
        let mut manager = Manager::new_test_with(crate::config::TestConfig {
            urgent_scan: UrgentScan::AllDesktops,
            ..Default::default()
        });
        manager.state.screen_create_handler(Screen::default());
        let monitor = manager.state.focused_monitor_mut().unwrap();
        let mut hidden = Client::new(WindowHandle(9), None);
        hidden.urgent = true;
        monitor
            .desktop_mut(2)
            .unwrap()
            .attach(hidden, InsertBehavior::Bottom);
        assert!(manager.state.focus_urgent());
        let monitor = manager.state.focused_monitor().unwrap();
        assert_eq!(monitor.current_desktop, 2);
        assert_eq!(monitor.live.current, Some(WindowHandle(9)));
    }

    #[test]
    fn urgent_scan_of_current_desktops_ignores_hidden_ones() {
        let mut manager = Manager::new_test();
        manager.state.screen_create_handler(Screen::default());
        let monitor = manager.state.focused_monitor_mut().unwrap();
        let mut hidden = Client::new(WindowHandle(9), None);
        hidden.urgent = true;
        monitor
            .desktop_mut(2)
            .unwrap()
            .attach(hidden, InsertBehavior::Bottom);
        assert!(!manager.state.focus_urgent());
    }
}
