use super::{BBox, Desktop, DesktopId, Mode};
use serde::{Deserialize, Serialize};

/// One physical or logical display region and its desktops.
///
/// The monitor works on a *live* desktop: every mutation of layout mode,
/// master size, growth, client list or focus references goes through
/// [`Self::live`]. The `desktops` array only ever holds snapshots, written
/// by [`Self::save_desktop`] and read back by [`Self::select_desktop`].
/// This value-copy handover is what makes desktop switching instant: the
/// incoming desktop arrives fully formed, nothing is rebuilt.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Monitor {
    pub id: usize,
    pub output: String,
    pub bbox: BBox,
    pub live: Desktop,
    pub desktops: Vec<Desktop>,
    pub current_desktop: DesktopId,
    pub previous_desktop: DesktopId,
}

impl Monitor {
    /// Create a monitor with `count` desktops, all saved once with the
    /// given defaults, and the default desktop selected.
    #[must_use]
    pub fn new(
        id: usize,
        output: String,
        bbox: BBox,
        count: usize,
        default_desktop: DesktopId,
        default_mode: Mode,
        show_panel: bool,
    ) -> Self {
        let count = count.max(1);
        let template = Desktop::new(default_mode, show_panel);
        let default_desktop = if default_desktop < count {
            default_desktop
        } else {
            0
        };
        Self {
            id,
            output,
            bbox,
            live: template.clone(),
            desktops: vec![template; count],
            current_desktop: default_desktop,
            previous_desktop: default_desktop,
        }
    }

    /// Snapshot the live desktop into the given slot. Out-of-range indices
    /// are ignored.
    pub fn save_desktop(&mut self, index: DesktopId) {
        if let Some(slot) = self.desktops.get_mut(index) {
            *slot = self.live.clone();
        }
    }

    /// Save the active desktop, then make the given one live. Out-of-range
    /// indices are ignored.
    pub fn select_desktop(&mut self, index: DesktopId) {
        if index >= self.desktops.len() {
            return;
        }
        self.save_desktop(self.current_desktop);
        self.live = self.desktops[index].clone();
        self.current_desktop = index;
    }

    /// Read view of a desktop: the live copy for the active index, the
    /// stored snapshot for every other.
    #[must_use]
    pub fn desktop(&self, index: DesktopId) -> Option<&Desktop> {
        if index == self.current_desktop {
            Some(&self.live)
        } else {
            self.desktops.get(index)
        }
    }

    /// Mutable counterpart of [`Self::desktop`]. Mutations of non-active
    /// desktops write straight into the stored snapshot, which is exactly
    /// what a later `select_desktop` will restore.
    pub fn desktop_mut(&mut self, index: DesktopId) -> Option<&mut Desktop> {
        if index == self.current_desktop {
            Some(&mut self.live)
        } else {
            self.desktops.get_mut(index)
        }
    }

    #[must_use]
    pub fn desktop_count(&self) -> usize {
        self.desktops.len()
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.bbox.contains_point(x, y)
    }

    /// The rectangle layouts may fill: the monitor bounds minus the panel
    /// strip while the panel is shown.
    #[must_use]
    pub fn usable_bbox(&self, panel_height: i32, top_panel: bool) -> BBox {
        let mut usable = self.bbox;
        if self.live.show_panel {
            usable.height -= panel_height;
            if top_panel {
                usable.y += panel_height;
            }
        }
        usable
    }
}
