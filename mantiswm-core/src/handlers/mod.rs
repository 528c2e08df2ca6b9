mod command_handler;
mod display_event_handler;
mod focus_handler;
mod goto_desktop_handler;
mod screen_create_handler;
mod window_handler;
