use serde::{Deserialize, Serialize};

/// A display region as reported by the display server, before the core
/// adopts it as a [`Monitor`](super::Monitor).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Screen {
    pub output: String,
    pub bbox: BBox,
}

/// Screen Bounding Box
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Screen {
    #[must_use]
    pub const fn new(bbox: BBox, output: String) -> Self {
        Self { output, bbox }
    }
}

impl BBox {
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        let max_x = self.x + self.width;
        let max_y = self.y + self.height;
        (self.x <= x && x <= max_x) && (self.y <= y && y <= max_y)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            output: String::default(),
            bbox: BBox {
                height: 600,
                width: 800,
                x: 0,
                y: 0,
            },
        }
    }
}
