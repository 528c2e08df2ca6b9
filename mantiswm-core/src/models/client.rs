//! Client information.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

/// Longest client name kept around; anything past this is display noise.
const MAX_NAME_LEN: usize = 255;

/// A backend-agnostic handle to a window used to identify it.
///
/// The wrapped value is the raw protocol identifier of the window. The core
/// never interprets it, it only compares it for equality.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(pub u64);

/// Store client information for one managed top-level window.
///
/// `transient` is separate from `floating` as floating clients can be reset
/// to their tiling positions, while transients will always be floating.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub handle: WindowHandle,
    pub name: Option<String>,
    pub urgent: bool,
    pub transient: bool,
    pub fullscreen: bool,
    pub floating: bool,
}

impl Client {
    #[must_use]
    pub fn new(handle: WindowHandle, name: Option<String>) -> Self {
        let mut client = Self {
            handle,
            name: None,
            urgent: false,
            transient: false,
            fullscreen: false,
            floating: false,
        };
        client.set_name(name);
        client
    }

    /// A client participates in automatic layout only while it is neither
    /// fullscreen, floating nor transient.
    #[must_use]
    pub fn is_tileable(&self) -> bool {
        !(self.fullscreen || self.floating || self.transient)
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name.map(|mut n| {
            if n.len() > MAX_NAME_LEN {
                let mut end = MAX_NAME_LEN;
                while !n.is_char_boundary(end) {
                    end -= 1;
                }
                n.truncate(end);
            }
            n
        });
    }
}
