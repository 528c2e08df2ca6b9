use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Manager;
use std::sync::atomic::Ordering;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Main event loop: drain the display server, apply the handlers,
    /// perform the queued actions, until a quit command delivers an exit
    /// code. Events are handled one at a time to completion; nothing here
    /// is reentrant.
    pub async fn event_loop(mut self) -> i32 {
        let mut event_buffer = vec![];
        loop {
            self.display_server.flush();

            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                // When a mouse button is pressed enter/motion notifies are
                // blocked and only appear once the button is released. This
                // is to double check that we know which window is currently
                // focused.
                () = timeout(100), if event_buffer.is_empty()
                    && self.state.focus_follows_mouse => {
                    if let Some(verify_event) = self.display_server.generate_verify_focus_event() {
                        event_buffer.push(verify_event);
                    }
                    continue;
                }
                else => {
                    for event in event_buffer.drain(..) {
                        self.display_event_handler(event);
                    }
                }
            }

            // perform any actions requested by the handlers
            while let Some(act) = self.state.actions.pop_front() {
                if let Some(event) = self.display_server.execute_action(act) {
                    event_buffer.push(event);
                }
            }

            if self.reap_requested.swap(false, Ordering::SeqCst) {
                self.children.reap();
            }

            if let Some(code) = self.exit_requested {
                break code;
            }
        }
    }
}

async fn timeout(mills: u64) {
    use tokio::time::{sleep, Duration};
    sleep(Duration::from_millis(mills)).await;
}
