//! Process-wide manager state.

use crate::config::{Config, InsertBehavior, UrgentScan, WindowRule};
use crate::layouts;
use crate::models::dto::ManagerState;
use crate::models::{Client, Desktop, DesktopId, Mode, Monitor, MonitorId, WindowHandle};
use crate::DisplayAction;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Everything the core mutates: the monitors with their desktops and
/// clients, the active-monitor selection, and the queue of actions waiting
/// for the display server.
///
/// Commands act on the focused monitor's live desktop; handlers that
/// resolve a window first locate its owning monitor and desktop and then
/// work through that explicit pair, never through hidden globals.
#[derive(Serialize, Deserialize, Debug)]
pub struct State {
    pub monitors: Vec<Monitor>,
    pub current_monitor: MonitorId,
    pub previous_monitor: MonitorId,
    pub actions: VecDeque<DisplayAction>,
    // entries below are configuration values and are never changed
    pub insert_behavior: InsertBehavior,
    pub border_width: i32,
    pub master_fraction: f32,
    pub min_window_size: i32,
    pub panel_height: i32,
    pub top_panel: bool,
    pub show_panel: bool,
    pub desktops_per_monitor: usize,
    pub default_desktop: usize,
    pub default_monitor: usize,
    pub default_mode: Mode,
    pub focus_follows_mouse: bool,
    pub click_to_focus: bool,
    pub follow_window: bool,
    pub urgent_scan: UrgentScan,
    pub rules: Vec<WindowRule>,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            monitors: Default::default(),
            current_monitor: 0,
            previous_monitor: 0,
            actions: Default::default(),
            insert_behavior: config.insert_behavior(),
            border_width: config.border_width(),
            master_fraction: config.master_fraction(),
            min_window_size: config.min_window_size(),
            panel_height: config.panel_height(),
            top_panel: config.top_panel(),
            show_panel: config.show_panel(),
            desktops_per_monitor: config.desktops_per_monitor(),
            default_desktop: config.default_desktop(),
            default_monitor: config.default_monitor(),
            default_mode: config.default_mode(),
            focus_follows_mouse: config.focus_follows_mouse(),
            click_to_focus: config.click_to_focus(),
            follow_window: config.follow_window(),
            urgent_scan: config.urgent_scan(),
            rules: config.create_list_of_rules(),
        }
    }

    #[must_use]
    pub fn focused_monitor(&self) -> Option<&Monitor> {
        self.monitors.get(self.current_monitor)
    }

    pub fn focused_monitor_mut(&mut self) -> Option<&mut Monitor> {
        self.monitors.get_mut(self.current_monitor)
    }

    /// The live desktop commands operate on.
    #[must_use]
    pub fn focused_desktop(&self) -> Option<&Desktop> {
        self.focused_monitor().map(|m| &m.live)
    }

    pub fn focused_desktop_mut(&mut self) -> Option<&mut Desktop> {
        self.focused_monitor_mut().map(|m| &mut m.live)
    }

    /// Monitor whose rectangle contains the point, falling back to the
    /// active monitor for points in no monitor (gaps between outputs).
    #[must_use]
    pub fn monitor_at_point(&self, x: i32, y: i32) -> MonitorId {
        self.monitors
            .iter()
            .position(|m| m.contains_point(x, y))
            .unwrap_or(self.current_monitor)
    }

    /// Resolve a protocol-level window back to its owning monitor and
    /// desktop. Scans every monitor, every desktop, every client; client
    /// counts are small, so this stays cheap.
    #[must_use]
    pub fn window_location(&self, handle: WindowHandle) -> Option<(MonitorId, DesktopId)> {
        for (mi, monitor) in self.monitors.iter().enumerate() {
            for di in 0..monitor.desktop_count() {
                if monitor.desktop(di).is_some_and(|d| d.contains(handle)) {
                    return Some((mi, di));
                }
            }
        }
        None
    }

    #[must_use]
    pub fn find_client(&self, handle: WindowHandle) -> Option<&Client> {
        let (mi, di) = self.window_location(handle)?;
        self.monitors[mi].desktop(di)?.client(handle)
    }

    /// Recompute and emit the geometry of every tileable client on the
    /// monitor's live desktop.
    pub fn arrange(&mut self, monitor_id: MonitorId) {
        let Some(monitor) = self.monitors.get(monitor_id) else {
            return;
        };
        let usable = monitor.usable_bbox(self.panel_height, self.top_panel);
        let rects = layouts::arrange(usable, &monitor.live, self.master_fraction, self.border_width);
        for (handle, bbox) in rects {
            self.actions
                .push_back(DisplayAction::MoveResizeWindow(handle, bbox));
        }
    }

    /// Queue one status line for external bars.
    pub fn publish_status(&mut self) {
        let line = ManagerState::from(&*self).status_line();
        self.actions.push_back(DisplayAction::PublishStatus(line));
    }

    /// Set or unset the fullscreen state of a client, wherever it lives.
    ///
    /// A client going fullscreen is sized to its monitor's full bounds,
    /// panel strip included, and stops participating in layout until the
    /// state is lifted; re-tiling after that is the caller's business.
    pub fn set_fullscreen(&mut self, handle: WindowHandle, fullscreen: bool) {
        let Some((mi, di)) = self.window_location(handle) else {
            tracing::debug!("fullscreen request for unmanaged window {handle:?}");
            return;
        };
        let full_bounds = self.monitors[mi].bbox;
        let Some(client) = self.monitors[mi]
            .desktop_mut(di)
            .and_then(|d| d.client_mut(handle))
        else {
            return;
        };
        let changed = client.fullscreen != fullscreen;
        client.fullscreen = fullscreen;
        if changed {
            self.actions
                .push_back(DisplayAction::SetFullscreen(handle, fullscreen));
        }
        if fullscreen {
            self.actions
                .push_back(DisplayAction::MoveResizeWindow(handle, full_bounds));
        }
        if mi == self.current_monitor && di == self.monitors[mi].current_desktop {
            self.update_current(Some(handle));
        }
    }
}
