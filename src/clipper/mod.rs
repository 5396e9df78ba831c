//! Line segment clipping against an axis-aligned window.
//!
//! - [`cohen_sutherland`]: the stateless trim loop, [`clip_segment`].
//! - [`session`]: [`Clipper`], which keeps a fixed window and the result of
//!   the last clip for a replaceable segment.
//! - [`outcode`]: region codes and window boundaries.

pub mod cohen_sutherland;
pub mod outcode;
pub mod session;

pub use cohen_sutherland::{
    clip_segment, clip_segment_traced, ClipResult, ClipState, ClipStep, ClipTrace, Endpoint,
};
pub use outcode::{Boundary, Outcode};
pub use session::{Clipper, Report};
