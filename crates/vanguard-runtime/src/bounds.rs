//! Play-area size injected into spawn placement and border checks

use serde::{Deserialize, Serialize};

/// Width and height of the visible play area, origin at the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when the horizontal span `[x - half, x + half]` lies inside the area
    pub fn contains_x(&self, x: f32, half: f32) -> bool {
        x - half >= 0.0 && x + half <= self.width
    }

    /// True when the vertical span `[y - half, y + half]` lies inside the area
    pub fn contains_y(&self, y: f32, half: f32) -> bool {
        y - half >= 0.0 && y + half <= self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_touching_the_edge_are_inside() {
        let b = Bounds::new(100.0, 50.0);
        assert!(b.contains_x(10.0, 10.0));
        assert!(b.contains_x(90.0, 10.0));
        assert!(!b.contains_x(95.0, 10.0));
        assert!(!b.contains_y(-1.0, 0.0));
        assert_eq!(b.center(), (50.0, 25.0));
    }
}
