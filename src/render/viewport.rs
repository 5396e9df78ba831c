//! Mapping from clip-plane coordinates to canvas pixels.

use crate::geometry::{Point, Rectangle};

/// Fits a world-space region into a canvas with a uniform scale.
///
/// World y grows upward, pixel y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    bounds: Rectangle,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    height: u32,
}

impl Viewport {
    /// Centers `bounds` in a `width` x `height` canvas, leaving `margin`
    /// pixels free on each side.
    pub fn fit(bounds: Rectangle, width: u32, height: u32, margin: u32) -> Self {
        let usable_w = width.saturating_sub(2 * margin).max(1) as f64;
        let usable_h = height.saturating_sub(2 * margin).max(1) as f64;
        let world_w = bounds.width().max(f64::EPSILON);
        let world_h = bounds.height().max(f64::EPSILON);
        let scale = (usable_w / world_w).min(usable_h / world_h);

        Self {
            bounds,
            scale,
            offset_x: (width as f64 - world_w * scale) / 2.0,
            offset_y: (height as f64 - world_h * scale) / 2.0,
            height,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn to_screen(&self, p: Point) -> (i32, i32) {
        let x = self.offset_x + (p.x - self.bounds.xmin) * self.scale;
        let y = self.offset_y + (p.y - self.bounds.ymin) * self.scale;
        (x.round() as i32, (self.height as f64 - y).round() as i32)
    }
}
