//! Cohen-Sutherland line clipping against an axis-aligned window.
//!
//! The crate clips 2D line segments to a rectangle and reports the visible
//! part, if any. A small software renderer can write a PNG snapshot of a
//! scene for inspecting results.
//!
//! # Quick Start
//!
//! ```
//! use rectclip::prelude::*;
//!
//! let window = Rectangle::new(0.0, 0.0, 1.0, 1.0)?;
//! let mut clipper = Clipper::new(LineSegment::from_coords(-1.0, 0.5, 2.0, 0.5), window);
//! assert!(clipper.clip());
//! assert_eq!(
//!     clipper.accepted_segment(),
//!     Some(LineSegment::from_coords(0.0, 0.5, 1.0, 0.5))
//! );
//! # Ok::<(), rectclip::ClipError>(())
//! ```

pub mod clipper;
pub mod colors;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod scene;

pub use clipper::{clip_segment, clip_segment_traced, ClipResult, ClipState, Clipper};
pub use error::{ClipError, ConfigError};
pub use geometry::{LineSegment, Point, Rectangle};
pub use scene::Scene;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rectclip::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{
        clip_segment, clip_segment_traced, Boundary, ClipResult, ClipState, ClipTrace, Clipper,
        Outcode, Report,
    };

    // Geometry
    pub use crate::geometry::{LineSegment, Point, Rectangle};

    // Rendering
    pub use crate::render::{Canvas, Viewport};
    pub use crate::scene::Scene;

    pub use crate::error::{ClipError, ConfigError};
}
