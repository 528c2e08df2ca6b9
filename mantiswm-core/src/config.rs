mod insert_behavior;
mod keybind;
mod rule;

use crate::models::Mode;
pub use insert_behavior::InsertBehavior;
pub use keybind::Keybind;
pub use rule::WindowRule;
use serde::{Deserialize, Serialize};

/// Where `focus-urgent` looks for an urgency hint.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UrgentScan {
    /// The currently selected desktop of every monitor.
    #[default]
    CurrentDesktops,
    /// Every desktop of every monitor.
    AllDesktops,
}

pub trait Config {
    /// Returns a collection of bindings with the mod key mapped. Consumed
    /// by the display server, which turns a matched combo into a
    /// `SendCommand` event.
    fn mapped_bindings(&self) -> Vec<Keybind>;

    fn create_list_of_rules(&self) -> Vec<WindowRule>;

    /// Number of desktops every monitor owns for the process lifetime.
    fn desktops_per_monitor(&self) -> usize;

    fn default_desktop(&self) -> usize;

    /// Monitor that starts out active once it has been reported.
    fn default_monitor(&self) -> usize;

    fn default_mode(&self) -> Mode;

    fn insert_behavior(&self) -> InsertBehavior;

    fn border_width(&self) -> i32;
    fn focused_border_color(&self) -> &str;
    fn unfocused_border_color(&self) -> &str;

    /// Fraction of the split axis the master area starts out with. The
    /// per-desktop `master_size` offset is added on top of it.
    fn master_fraction(&self) -> f32;

    /// Smallest split-axis size `resize-master` may leave either area with.
    fn min_window_size(&self) -> i32;

    fn panel_height(&self) -> i32;
    fn top_panel(&self) -> bool;
    fn show_panel(&self) -> bool;

    fn focus_follows_mouse(&self) -> bool;
    fn click_to_focus(&self) -> bool;

    /// Whether sending a client to another desktop or monitor also takes
    /// the focus there.
    fn follow_window(&self) -> bool;

    fn urgent_scan(&self) -> UrgentScan;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
pub struct TestConfig {
    pub desktops: usize,
    pub insert_behavior: InsertBehavior,
    pub rules: Vec<WindowRule>,
    pub follow_window: bool,
    pub urgent_scan: UrgentScan,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            desktops: 4,
            insert_behavior: InsertBehavior::Bottom,
            rules: vec![],
            follow_window: false,
            urgent_scan: UrgentScan::CurrentDesktops,
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn mapped_bindings(&self) -> Vec<Keybind> {
        vec![]
    }
    fn create_list_of_rules(&self) -> Vec<WindowRule> {
        self.rules.clone()
    }
    fn desktops_per_monitor(&self) -> usize {
        self.desktops
    }
    fn default_desktop(&self) -> usize {
        0
    }
    fn default_monitor(&self) -> usize {
        0
    }
    fn default_mode(&self) -> Mode {
        Mode::Stack
    }
    fn insert_behavior(&self) -> InsertBehavior {
        self.insert_behavior
    }
    fn border_width(&self) -> i32 {
        2
    }
    fn focused_border_color(&self) -> &str {
        "#cd5c5c"
    }
    fn unfocused_border_color(&self) -> &str {
        "#333333"
    }
    fn master_fraction(&self) -> f32 {
        0.5
    }
    fn min_window_size(&self) -> i32 {
        50
    }
    fn panel_height(&self) -> i32 {
        18
    }
    fn top_panel(&self) -> bool {
        true
    }
    fn show_panel(&self) -> bool {
        true
    }
    fn focus_follows_mouse(&self) -> bool {
        false
    }
    fn click_to_focus(&self) -> bool {
        true
    }
    fn follow_window(&self) -> bool {
        self.follow_window
    }
    fn urgent_scan(&self) -> UrgentScan {
        self.urgent_scan
    }
}
