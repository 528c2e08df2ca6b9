use super::focus_handler::apply_focus_transition;
use crate::display_action::DisplayAction;
use crate::display_event::StateChange;
use crate::models::{BBox, Client, WindowHandle};
use crate::state::State;

impl State {
    /// Adopt a freshly mapped window as a client.
    ///
    /// The first rule whose class substring matches the window's class or
    /// instance decides the spawn desktop, an initial floating flag, and
    /// whether the focus follows; windows without class information match
    /// nothing and use the defaults. Transients always float.
    pub fn window_created_handler(
        &mut self,
        mut client: Client,
        class: Option<&str>,
        instance: Option<&str>,
    ) -> bool {
        // don't add the window if the manager already knows about it
        if self.window_location(client.handle).is_some() {
            return false;
        }
        let handle = client.handle;

        let mut follow = false;
        let mut rule_desktop = None;
        for rule in &self.rules {
            let matched = class.is_some_and(|c| c.contains(&rule.class))
                || instance.is_some_and(|i| i.contains(&rule.class));
            if matched {
                follow = rule.follow;
                rule_desktop = rule.desktop;
                client.floating = client.floating || rule.floating;
                break;
            }
        }
        client.floating = client.floating || client.transient;
        let fullscreen_hint = std::mem::take(&mut client.fullscreen);

        let mi = self.current_monitor;
        let insert_behavior = self.insert_behavior;
        let Some(monitor) = self.monitors.get_mut(mi) else {
            tracing::warn!("window {handle:?} arrived before any monitor");
            return false;
        };
        let origin = monitor.current_desktop;
        let spawn = match rule_desktop {
            Some(d) if d < monitor.desktop_count() => d,
            Some(_) | None => origin,
        };
        if spawn != origin {
            monitor.select_desktop(spawn);
        }
        monitor.live.attach(client, insert_behavior);
        if spawn != origin {
            monitor.select_desktop(origin);
        }

        if fullscreen_hint {
            self.set_fullscreen(handle, true);
        }
        if spawn == origin {
            self.arrange(mi);
            self.actions.push_back(DisplayAction::MapWindow(handle));
            self.update_current(Some(handle));
        } else if follow {
            self.goto_desktop(spawn);
            self.update_current(Some(handle));
        }
        self.publish_status();
        true
    }

    pub fn window_destroyed_handler(&mut self, handle: WindowHandle) -> bool {
        let removed = self.remove_client(handle);
        if removed {
            self.publish_status();
        }
        removed
    }

    /// Drop a client, wherever it lives, repairing the focus of its
    /// desktop: previous focus while it is still a member, else the list
    /// head, else nothing. Events for unknown windows are safe no-ops.
    pub fn remove_client(&mut self, handle: WindowHandle) -> bool {
        let Some((mi, di)) = self.window_location(handle) else {
            tracing::debug!("remove for unmanaged window {handle:?}");
            return false;
        };
        let monitor = &mut self.monitors[mi];
        let visible = di == monitor.current_desktop;
        let Some(desktop) = monitor.desktop_mut(di) else {
            return false;
        };
        if desktop.detach(handle).is_none() {
            return false;
        }
        if desktop.prev_focus == Some(handle) {
            desktop.prev_focus = desktop.current.and_then(|cur| desktop.prev_of(cur));
        }
        let needs_refocus = desktop.current == Some(handle) || desktop.clients.len() < 2;
        let fallback = desktop.prev_focus;

        if needs_refocus {
            if visible && mi == self.current_monitor {
                self.update_current(fallback);
            } else {
                // a hidden or unfocused desktop repairs its fields quietly;
                // its visuals refresh when it next becomes current
                if let Some(desktop) = self.monitors[mi].desktop_mut(di) {
                    if desktop.clients.is_empty() {
                        desktop.current = None;
                        desktop.prev_focus = None;
                    } else {
                        apply_focus_transition(desktop, fallback);
                    }
                }
                if visible {
                    let refresh = self.focused_desktop().and_then(|d| d.current);
                    self.update_current(refresh);
                }
            }
        }
        if visible {
            self.arrange(mi);
        }
        true
    }

    /// A window asked for new geometry. Fullscreen clients get their
    /// monitor bounds re-asserted instead; everyone else is granted the
    /// request, clamped to the usable size, and the desktop is re-tiled so
    /// no gaps are left behind.
    pub fn configure_request_handler(&mut self, handle: WindowHandle, requested: BBox) -> bool {
        if self.find_client(handle).is_some_and(|c| c.fullscreen) {
            self.set_fullscreen(handle, true);
            self.arrange(self.current_monitor);
            return true;
        }
        let mut granted = requested;
        if let Some(monitor) = self.focused_monitor() {
            let usable = monitor.usable_bbox(self.panel_height, self.top_panel);
            granted.y = granted.y.max(usable.y);
            if granted.width >= usable.width - self.border_width {
                granted.width = usable.width + self.border_width;
            }
            if granted.height >= usable.height - self.border_width {
                granted.height = usable.height + self.border_width;
            }
        }
        self.actions
            .push_back(DisplayAction::MoveResizeWindow(handle, granted));
        self.arrange(self.current_monitor);
        true
    }

    pub fn fullscreen_request_handler(&mut self, handle: WindowHandle, change: StateChange) -> bool {
        let Some(client) = self.find_client(handle) else {
            tracing::debug!("state request for unmanaged window {handle:?}");
            return false;
        };
        let fullscreen = match change {
            StateChange::Add => true,
            StateChange::Remove => false,
            StateChange::Toggle => !client.fullscreen,
        };
        self.set_fullscreen(handle, fullscreen);
        self.arrange(self.current_monitor);
        true
    }

    /// A window asked to be activated. Only members of the focused
    /// desktop's list may take the focus this way.
    pub fn activation_request_handler(&mut self, handle: WindowHandle) -> bool {
        let on_current = self.focused_desktop().is_some_and(|d| d.contains(handle));
        if on_current {
            self.update_current(Some(handle));
        }
        self.arrange(self.current_monitor);
        on_current
    }

    /// An urgency hint never sticks to the window that is already current.
    pub fn urgent_hint_handler(&mut self, handle: WindowHandle, urgent: bool) -> bool {
        let current = self.focused_desktop().and_then(|d| d.current);
        let Some((mi, di)) = self.window_location(handle) else {
            tracing::debug!("urgency hint for unmanaged window {handle:?}");
            return false;
        };
        if let Some(client) = self.monitors[mi]
            .desktop_mut(di)
            .and_then(|d| d.client_mut(handle))
        {
            client.urgent = urgent && Some(handle) != current;
        }
        self.publish_status();
        true
    }

    pub fn name_change_handler(&mut self, handle: WindowHandle, name: Option<String>) -> bool {
        let Some((mi, di)) = self.window_location(handle) else {
            return false;
        };
        if let Some(client) = self.monitors[mi]
            .desktop_mut(di)
            .and_then(|d| d.client_mut(handle))
        {
            client.set_name(name);
        }
        self.publish_status();
        true
    }
}
