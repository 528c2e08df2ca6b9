use crate::models::{BBox, WindowHandle};
use serde::{Deserialize, Serialize};

/// Palette slot a window border is painted with. The display server
/// allocates the actual pixels from the configured colors at startup.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderColor {
    Focused,
    Unfocused,
}

/// These are responses from the window manager.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction {
    /// Apply an absolute rectangle to a window.
    MoveResizeWindow(WindowHandle, BBox),

    SetBorderWidth(WindowHandle, i32),

    SetBorderColor(WindowHandle, BorderColor),

    /// Sets the "z-index" order of the windows,
    /// first in the array is top most.
    SetWindowOrder(Vec<WindowHandle>),

    MapWindow(WindowHandle),

    UnmapWindow(WindowHandle),

    /// Tell a window that it is to become focused.
    SetInputFocus(WindowHandle),

    /// Update the active-window property on the root; `None` deletes it.
    SetActiveWindow(Option<WindowHandle>),

    /// Update the fullscreen state property of a window.
    SetFullscreen(WindowHandle, bool),

    /// Nicely ask a window if it would please close at its convenience.
    KillWindow(WindowHandle),

    /// Tell the DS we are ready to move this window.
    ReadyToMoveWindow(WindowHandle),

    /// Tell the DS we are ready to resize this window.
    ReadyToResizeWindow(WindowHandle),

    /// One line of machine-readable desktop state for external bars.
    PublishStatus(String),
}
