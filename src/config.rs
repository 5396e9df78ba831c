//! Command-line configuration for the demo binary.

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::geometry::{LineSegment, Rectangle};
use crate::scene::Scene;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
/// Largest accepted snapshot side, in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Snapshot size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Clip line segments against a rectangular window", long_about = None)]
pub struct Args {
    /// Clip window: lower-left corner, width and height
    #[arg(long, value_name = "X,Y,W,H", value_parser = parse_quad, allow_hyphen_values = true)]
    pub rect: Option<[f64; 4]>,

    /// Segment to clip; repeat for several
    #[arg(long = "segment", value_name = "X0,Y0,X1,Y1", value_parser = parse_quad, allow_hyphen_values = true)]
    pub segments: Vec<[f64; 4]>,

    /// Write a rendered snapshot of the scene
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Snapshot size in pixels
    #[arg(long, value_name = "WxH", value_parser = parse_size, default_value = "800x600")]
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub scene: Scene,
    pub png: Option<PathBuf>,
    pub size: Size,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            scene: Scene::demo(),
            png: None,
            size: Size::default(),
        }
    }
}

impl TryFrom<Args> for DemoConfig {
    type Error = ConfigError;

    /// Missing `--rect` keeps the unit window; missing `--segment` keeps the
    /// demo segments.
    fn try_from(args: Args) -> Result<Self, ConfigError> {
        let demo = Scene::demo();
        let window = match args.rect {
            Some([x, y, w, h]) => Rectangle::new(x, y, w, h)?,
            None => *demo.window(),
        };
        let segments = if args.segments.is_empty() {
            demo.segments().to_vec()
        } else {
            args.segments
                .iter()
                .map(|&[x0, y0, x1, y1]| LineSegment::from_coords(x0, y0, x1, y1))
                .collect()
        };

        Ok(Self {
            scene: Scene::with_segments(window, segments),
            png: args.png,
            size: args.size,
        })
    }
}

fn parse_quad(value: &str) -> Result<[f64; 4], ConfigError> {
    let malformed = || ConfigError::MalformedNumbers {
        expected: 4,
        value: value.to_string(),
    };
    let numbers = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| malformed())?;
    numbers.try_into().map_err(|_| malformed())
}

fn parse_size(value: &str) -> Result<Size, ConfigError> {
    let malformed = || ConfigError::MalformedSize(value.to_string());
    let (w, h) = value.split_once(['x', 'X']).ok_or_else(malformed)?;
    let width: u32 = w.trim().parse().map_err(|_| malformed())?;
    let height: u32 = h.trim().parse().map_err(|_| malformed())?;
    let in_range = |v: u32| (1..=MAX_DIMENSION).contains(&v);
    if !in_range(width) || !in_range(height) {
        return Err(malformed());
    }
    Ok(Size { width, height })
}
