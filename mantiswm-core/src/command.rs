use crate::models::Mode;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command {
    ChangeDesktop(usize),
    LastDesktop,
    RotateDesktop(i32),
    RotateFilledDesktop(i32),
    ChangeMonitor(usize),
    RotateMonitor(i32),
    SendWindowToDesktop(usize),
    SendWindowToMonitor(usize),
    FocusNext,
    FocusPrev,
    FocusUrgent,
    SwapMaster,
    MoveWindowUp,
    MoveWindowDown,
    ResizeMaster(i32),
    ResizeStack(i32),
    SetMode(Mode),
    TogglePanel,
    CloseWindow,
    MouseMoveWindow,
    MouseResizeWindow,
    Execute(Vec<String>),
    Quit(i32),
}
