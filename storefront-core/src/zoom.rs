//! Zoom lens projection
//!
//! Pure geometric transform from pointer coordinates to a percentage
//! position within the rendered image's bounding box. The only state is
//! the ephemeral pointer position, cleared when the pointer leaves.

use serde::{Deserialize, Serialize};

/// Rendered image bounding box in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Percentage position within the image, each axis in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPosition {
    pub x_pct: f64,
    pub y_pct: f64,
}

/// Project a pointer position into the box, clamped to [0, 100] per axis
///
/// Degenerate boxes (zero or negative extent) yield no position.
pub fn project(bounds: BoundingBox, pointer_x: f64, pointer_y: f64) -> Option<ZoomPosition> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    Some(ZoomPosition {
        x_pct: ((pointer_x - bounds.left) / bounds.width * 100.0).clamp(0.0, 100.0),
        y_pct: ((pointer_y - bounds.top) / bounds.height * 100.0).clamp(0.0, 100.0),
    })
}

/// Magnified cursor-follow state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomLens {
    position: Option<ZoomPosition>,
}

impl ZoomLens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the pointer while it is over the image
    pub fn follow(&mut self, bounds: BoundingBox, pointer_x: f64, pointer_y: f64) {
        self.position = project(bounds, pointer_x, pointer_y);
    }

    /// Pointer left the image
    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<ZoomPosition> {
        self.position
    }
}
