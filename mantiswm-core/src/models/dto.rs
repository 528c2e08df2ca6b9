//! Serializable snapshots of manager state for external consumers.

use crate::models::Mode;
use crate::state::State;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DesktopState {
    pub monitor: usize,
    pub active_monitor: bool,
    pub desktop: usize,
    pub client_count: usize,
    pub mode: Mode,
    pub active_desktop: bool,
    pub urgent: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ManagerState {
    pub desktops: Vec<DesktopState>,
}

impl From<&State> for ManagerState {
    fn from(state: &State) -> Self {
        let mut desktops = vec![];
        for (mi, monitor) in state.monitors.iter().enumerate() {
            let active_monitor = mi == state.current_monitor;
            for di in 0..monitor.desktop_count() {
                let Some(desktop) = monitor.desktop(di) else {
                    continue;
                };
                desktops.push(DesktopState {
                    monitor: mi,
                    active_monitor,
                    desktop: di,
                    client_count: desktop.clients.len(),
                    mode: desktop.mode,
                    active_desktop: active_monitor && di == monitor.current_desktop,
                    urgent: desktop.urgent(),
                });
            }
        }
        Self { desktops }
    }
}

impl ManagerState {
    /// The status wire format, one colon-separated group per desktop,
    /// groups separated by single spaces, newline terminated:
    /// `monitor:active_monitor:desktop:client_count:mode:active_desktop:urgent`.
    /// External bars parse this line byte for byte, so the shape is frozen.
    #[must_use]
    pub fn status_line(&self) -> String {
        let mut line = String::new();
        for (i, d) in self.desktops.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            let _ = write!(
                line,
                "{}:{}:{}:{}:{}:{}:{}",
                d.monitor,
                u8::from(d.active_monitor),
                d.desktop,
                d.client_count,
                d.mode.id(),
                u8::from(d.active_desktop),
                u8::from(d.urgent),
            );
        }
        line.push('\n');
        line
    }
}
