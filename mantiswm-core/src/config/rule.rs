use serde::{Deserialize, Serialize};

/// Behavior override for windows whose class or instance name contains
/// `class`. The first matching rule wins; windows without class information
/// never match.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowRule {
    pub class: String,
    /// Desktop the window spawns on; `None` keeps the active desktop.
    pub desktop: Option<usize>,
    /// Whether the focus moves to the spawn desktop.
    pub follow: bool,
    pub floating: bool,
}
