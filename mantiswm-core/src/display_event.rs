use crate::models::{BBox, Client, Screen, WindowHandle};
use crate::Command;

/// The three `_NET_WM_STATE` client message actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Remove,
    Add,
    Toggle,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug)]
pub enum DisplayEvent {
    ScreenCreate(Screen),
    /// A new managed window, plus its class and instance names for rule
    /// matching. Override-redirect windows never get this far.
    WindowCreate(Client, Option<String>, Option<String>),
    WindowDestroy(WindowHandle),
    WindowUnmap(WindowHandle),
    ConfigureRequest(WindowHandle, BBox),
    FullscreenRequest(WindowHandle, StateChange),
    ActivationRequest(WindowHandle),
    UrgentHint(WindowHandle, bool),
    NameChange(WindowHandle, Option<String>),
    PointerEnterWindow(WindowHandle),
    PointerMove(i32, i32),
    ButtonPress(WindowHandle),
    VerifyFocusedAt(WindowHandle), // Request focus validation for this window.
    SendCommand(Command),
}
