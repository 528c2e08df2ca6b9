//! Objects (such as clients, desktops and monitors) used to develop mantiswm.
mod client;
mod desktop;
mod manager;
mod mode;
mod monitor;
mod screen;

pub mod dto;

pub use client::Client;
pub use client::WindowHandle;
pub use desktop::Desktop;
pub use manager::Manager;
pub use mode::Mode;
pub use monitor::Monitor;
pub use screen::{BBox, Screen};

pub type MonitorId = usize;
pub type DesktopId = usize;
