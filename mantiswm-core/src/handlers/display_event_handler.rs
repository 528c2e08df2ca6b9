use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Manager;
use crate::DisplayEvent;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Process one event from the display server.
    /// Returns true if changes were applied to the state.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        let state = &mut self.state;
        match event {
            DisplayEvent::ScreenCreate(screen) => state.screen_create_handler(screen),
            DisplayEvent::WindowCreate(client, class, instance) => {
                state.window_created_handler(client, class.as_deref(), instance.as_deref())
            }
            // windows that request to unmap lose their client, so no
            // invisible windows linger on screen
            DisplayEvent::WindowDestroy(handle) | DisplayEvent::WindowUnmap(handle) => {
                state.window_destroyed_handler(handle)
            }
            DisplayEvent::ConfigureRequest(handle, bbox) => {
                state.configure_request_handler(handle, bbox)
            }
            DisplayEvent::FullscreenRequest(handle, change) => {
                state.fullscreen_request_handler(handle, change)
            }
            DisplayEvent::ActivationRequest(handle) => state.activation_request_handler(handle),
            DisplayEvent::UrgentHint(handle, urgent) => state.urgent_hint_handler(handle, urgent),
            DisplayEvent::NameChange(handle, name) => state.name_change_handler(handle, name),
            DisplayEvent::PointerEnterWindow(handle) => state.pointer_enter_handler(handle),
            DisplayEvent::PointerMove(x, y) => state.pointer_move_handler(x, y),
            DisplayEvent::ButtonPress(handle) => state.button_press_handler(handle),
            DisplayEvent::VerifyFocusedAt(handle) => {
                if state.focus_follows_mouse {
                    state.validate_focus_at(handle)
                } else {
                    false
                }
            }
            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}
