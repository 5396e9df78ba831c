//! Owned pixel buffer with basic 2D drawing.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::colors;

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = y as usize * self.width as usize + x as usize;
            self.color_buffer[index] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        if spacing <= 0 {
            return;
        }
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Bresenham line between two pixel positions, both ends included.
    ///
    /// Steps along the major axis and uses an integer error term to decide
    /// when to also step along the minor one.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;
        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            let index = y as usize * self.width as usize + x as usize;
            let (a, r, g, b) = colors::unpack(self.color_buffer[index]);
            Rgba([r, g, b, a])
        })
    }

    /// Writes the canvas to an image file; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }
}
