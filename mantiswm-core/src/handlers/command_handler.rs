#![allow(clippy::wildcard_imports)]

use crate::config::{Config, InsertBehavior};
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{Manager, Mode};
use crate::state::State;
use crate::utils::child_process::{spawn_command, Children};
use crate::Command;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Processes a command and invokes the associated function.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        process_internal(self, command).unwrap_or(false)
    }
}

fn process_internal<C: Config, SERVER: DisplayServer>(
    manager: &mut Manager<C, SERVER>,
    command: &Command,
) -> Option<bool> {
    let state = &mut manager.state;
    match command {
        Command::Execute(argv) => execute(&mut manager.children, argv),
        Command::Quit(code) => {
            manager.exit_requested = Some(*code);
            Some(true)
        }

        Command::ChangeDesktop(index) => Some(state.goto_desktop(*index)),
        Command::LastDesktop => last_desktop(state),
        Command::RotateDesktop(delta) => rotate_desktop(state, *delta),
        Command::RotateFilledDesktop(delta) => rotate_filled_desktop(state, *delta),

        Command::ChangeMonitor(index) => Some(state.change_monitor(*index)),
        Command::RotateMonitor(delta) => rotate_monitor(state, *delta),

        Command::SendWindowToDesktop(index) => send_to_desktop(state, *index),
        Command::SendWindowToMonitor(index) => send_to_monitor(state, *index),

        Command::FocusNext => Some(state.focus_next()),
        Command::FocusPrev => Some(state.focus_prev()),
        Command::FocusUrgent => Some(state.focus_urgent()),

        Command::SwapMaster => swap_master(state),
        Command::MoveWindowUp => move_window(state, -1),
        Command::MoveWindowDown => move_window(state, 1),

        Command::ResizeMaster(delta) => resize_master(state, *delta),
        Command::ResizeStack(delta) => resize_stack(state, *delta),
        Command::SetMode(mode) => switch_mode(state, *mode),
        Command::TogglePanel => toggle_panel(state),

        Command::CloseWindow => close_window(state),
        Command::MouseMoveWindow => ready_to_drag(state, true),
        Command::MouseResizeWindow => ready_to_drag(state, false),
    }
}

fn execute(children: &mut Children, argv: &[String]) -> Option<bool> {
    if let Err(err) = spawn_command(argv, children) {
        tracing::error!("Unable to spawn {argv:?}: {err}");
    }
    None
}

fn last_desktop(state: &mut State) -> Option<bool> {
    let previous = state.focused_monitor()?.previous_desktop;
    Some(state.goto_desktop(previous))
}

fn rotate_desktop(state: &mut State, delta: i32) -> Option<bool> {
    let monitor = state.focused_monitor()?;
    let count = monitor.desktop_count() as i32;
    let target = (monitor.current_desktop as i32 + delta).rem_euclid(count) as usize;
    Some(state.goto_desktop(target))
}

/// Like `rotate_desktop`, but skips over desktops with no clients.
fn rotate_filled_desktop(state: &mut State, delta: i32) -> Option<bool> {
    if delta == 0 {
        return None;
    }
    let (current, count, populated) = {
        let monitor = state.focused_monitor()?;
        let populated: Vec<bool> = (0..monitor.desktop_count())
            .map(|i| monitor.desktop(i).is_some_and(|d| !d.clients.is_empty()))
            .collect();
        (
            monitor.current_desktop as i32,
            monitor.desktop_count() as i32,
            populated,
        )
    };
    let mut step = delta;
    for _ in 0..populated.len() {
        let target = (current + step).rem_euclid(count) as usize;
        if populated[target] {
            return Some(state.goto_desktop(target));
        }
        step += delta;
    }
    None
}

fn rotate_monitor(state: &mut State, delta: i32) -> Option<bool> {
    if state.monitors.is_empty() {
        return None;
    }
    let count = state.monitors.len() as i32;
    let target = (state.current_monitor as i32 + delta).rem_euclid(count) as usize;
    Some(state.change_monitor(target))
}

/// Move the current client to the tail of another desktop's list and focus
/// it there; focus at home falls back to the previously focused client.
/// Fullscreen never survives the move, stale monitor-sized geometry would.
fn send_to_desktop(state: &mut State, index: usize) -> Option<bool> {
    let mi = state.current_monitor;
    let (handle, was_fullscreen) = {
        let monitor = state.focused_monitor_mut()?;
        if index == monitor.current_desktop || index >= monitor.desktop_count() {
            return None;
        }
        let handle = monitor.live.current?;
        let mut client = monitor.live.detach(handle)?;
        let was_fullscreen = std::mem::take(&mut client.fullscreen);
        let origin = monitor.current_desktop;
        monitor.select_desktop(index);
        monitor.live.prev_focus = monitor.live.current;
        monitor.live.attach(client, InsertBehavior::Bottom);
        monitor.live.current = Some(handle);
        monitor.select_desktop(origin);
        (handle, was_fullscreen)
    };
    if was_fullscreen {
        state
            .actions
            .push_back(DisplayAction::SetFullscreen(handle, false));
    }
    state.actions.push_back(DisplayAction::UnmapWindow(handle));
    let fallback = state.focused_desktop()?.prev_focus;
    state.update_current(fallback);
    if state.follow_window {
        state.goto_desktop(index);
    } else {
        state.arrange(mi);
    }
    state.publish_status();
    Some(true)
}

/// Move the current client to another monitor's visible desktop.
fn send_to_monitor(state: &mut State, index: usize) -> Option<bool> {
    let mi = state.current_monitor;
    if index == mi || index >= state.monitors.len() {
        return None;
    }
    let handle = state.focused_desktop()?.current?;
    let mut client = state.focused_desktop_mut()?.detach(handle)?;
    let was_fullscreen = std::mem::take(&mut client.fullscreen);
    {
        let target = &mut state.monitors[index].live;
        target.prev_focus = target.current;
        target.attach(client, InsertBehavior::Bottom);
        target.current = Some(handle);
    }
    if was_fullscreen {
        state
            .actions
            .push_back(DisplayAction::SetFullscreen(handle, false));
    }
    let fallback = state.focused_desktop()?.prev_focus;
    state.update_current(fallback);
    state.arrange(mi);
    state.arrange(index);
    if state.follow_window {
        state.change_monitor(index);
    }
    state.publish_status();
    Some(true)
}

/// Swap the current client with the master; from the master position, swap
/// with the next client instead. The master ends up focused either way.
fn swap_master(state: &mut State) -> Option<bool> {
    let desktop = state.focused_desktop()?;
    let current = desktop.current?;
    if desktop.clients.len() < 2 {
        return None;
    }
    state.focused_desktop_mut()?.swap_with_head(current);
    let head = state.focused_desktop()?.head();
    state.arrange(state.current_monitor);
    state.update_current(head);
    Some(true)
}

fn move_window(state: &mut State, delta: i32) -> Option<bool> {
    let desktop = state.focused_desktop()?;
    let current = desktop.current?;
    let desktop = state.focused_desktop_mut()?;
    if delta > 0 {
        desktop.swap_down(current)?;
    } else {
        desktop.swap_up(current)?;
    }
    state.arrange(state.current_monitor);
    Some(true)
}

/// Grow or shrink the master area, refusing to push either side below the
/// configured minimum window size.
fn resize_master(state: &mut State, delta: i32) -> Option<bool> {
    let mi = state.current_monitor;
    let monitor = state.focused_monitor()?;
    let usable = monitor.usable_bbox(state.panel_height, state.top_panel);
    let axis = if monitor.live.mode == Mode::BottomStack {
        usable.height
    } else {
        usable.width
    };
    let master_area =
        (axis as f32 * state.master_fraction) as i32 + monitor.live.master_size + delta;
    if master_area < state.min_window_size || axis - master_area < state.min_window_size {
        return None;
    }
    state.focused_desktop_mut()?.master_size += delta;
    state.arrange(mi);
    Some(true)
}

/// Adjust the first stack window's share. No boundary checks.
fn resize_stack(state: &mut State, delta: i32) -> Option<bool> {
    state.focused_desktop_mut()?.growth += delta;
    state.arrange(state.current_monitor);
    Some(true)
}

/// Switch the tiling mode; re-selecting the active mode instead resets
/// every floating client back to tiling.
fn switch_mode(state: &mut State, mode: Mode) -> Option<bool> {
    {
        let desktop = state.focused_desktop_mut()?;
        if desktop.mode == mode {
            desktop.reset_floating();
        }
        desktop.mode = mode;
    }
    let target = state.focused_desktop()?.current;
    state.arrange(state.current_monitor);
    state.update_current(target);
    state.publish_status();
    Some(true)
}

fn toggle_panel(state: &mut State) -> Option<bool> {
    let desktop = state.focused_desktop_mut()?;
    desktop.show_panel = !desktop.show_panel;
    state.arrange(state.current_monitor);
    Some(true)
}

/// Ask the current window to close and drop its client right away; the
/// destroy notification that follows is a harmless no-op.
fn close_window(state: &mut State) -> Option<bool> {
    let handle = state.focused_desktop()?.current?;
    state.actions.push_back(DisplayAction::KillWindow(handle));
    state.remove_client(handle);
    state.publish_status();
    Some(true)
}

/// Put the current window into the display server's hands for a pointer
/// drag: fullscreen is lifted, the window floats from here on.
fn ready_to_drag(state: &mut State, moving: bool) -> Option<bool> {
    let handle = state.focused_desktop()?.current?;
    if state.focused_desktop()?.client(handle)?.fullscreen {
        state.set_fullscreen(handle, false);
    }
    state.focused_desktop_mut()?.client_mut(handle)?.floating = true;
    state.arrange(state.current_monitor);
    state.update_current(Some(handle));
    let act = if moving {
        DisplayAction::ReadyToMoveWindow(handle)
    } else {
        DisplayAction::ReadyToResizeWindow(handle)
    };
    state.actions.push_back(act);
    Some(true)
}
