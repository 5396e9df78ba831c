//! Value types for the clipping plane.
//!
//! Points and segments are plain `Copy` values; the clip loop moves
//! endpoints by replacing them wholesale.

pub mod point;
pub mod rect;
pub mod segment;

pub use point::Point;
pub use rect::Rectangle;
pub use segment::LineSegment;
