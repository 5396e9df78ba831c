//! The Cohen-Sutherland trim loop.
//!
//! Each iteration recomputes both outcodes, then either accepts (both codes
//! zero), rejects (codes share a bit), or moves one outside endpoint onto
//! the first boundary it violates. The start point is moved first when both
//! are outside, and a point outside two boundaries is walked in one
//! boundary at a time (left, right, bottom, top).

use std::fmt;

use tracing::{debug, trace, warn};

use super::outcode::{Boundary, Outcode};
use crate::geometry::{LineSegment, Point, Rectangle};

/// Each replacement clears a bit for good, so four is the real bound.
/// The extra headroom only matters if rounding pushes a point back out.
const MAX_ITERATIONS: usize = 16;

/// Progress of a clip operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipState {
    #[default]
    Undetermined,
    Accepted,
    Rejected,
}

impl fmt::Display for ClipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undetermined => "undetermined",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// Terminal outcome of clipping one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipResult {
    /// The visible part of the segment, with the input's direction.
    Accepted(LineSegment),
    /// No part of the segment is visible.
    Rejected,
}

impl ClipResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn segment(&self) -> Option<LineSegment> {
        match self {
            Self::Accepted(segment) => Some(*segment),
            Self::Rejected => None,
        }
    }

    pub fn state(&self) -> ClipState {
        match self {
            Self::Accepted(_) => ClipState::Accepted,
            Self::Rejected => ClipState::Rejected,
        }
    }
}

/// Which end of the working segment an iteration moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// One endpoint replacement made by the trim loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipStep {
    pub endpoint: Endpoint,
    pub outcode: Outcode,
    pub boundary: Boundary,
    pub from: Point,
    pub to: Point,
}

/// Every replacement made while clipping, followed by the outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipTrace {
    pub steps: Vec<ClipStep>,
    pub result: ClipResult,
}

/// Clips `segment` against `rect`.
pub fn clip_segment(segment: LineSegment, rect: &Rectangle) -> ClipResult {
    trim(segment, rect, |_| {})
}

/// Like [`clip_segment`], but also records each endpoint replacement.
pub fn clip_segment_traced(segment: LineSegment, rect: &Rectangle) -> ClipTrace {
    let mut steps = Vec::new();
    let result = trim(segment, rect, |step| steps.push(step));
    ClipTrace { steps, result }
}

fn trim(segment: LineSegment, rect: &Rectangle, mut on_step: impl FnMut(ClipStep)) -> ClipResult {
    // Working copy, local to this call.
    let mut p0 = segment.start;
    let mut p1 = segment.end;

    // NaN compares false against every boundary and would read as inside.
    if !p0.is_finite() || !p1.is_finite() {
        debug!(?p0, ?p1, "non-finite endpoint, rejecting segment");
        return ClipResult::Rejected;
    }

    for iteration in 0..MAX_ITERATIONS {
        let c0 = Outcode::of(p0, rect);
        let c1 = Outcode::of(p1, rect);

        if (c0 | c1).is_inside() {
            debug!(iteration, ?p0, ?p1, "segment accepted");
            return ClipResult::Accepted(LineSegment::new(p0, p1));
        }
        if !(c0 & c1).is_inside() {
            debug!(iteration, %c0, %c1, "segment rejected");
            return ClipResult::Rejected;
        }

        let (endpoint, code, from) = if !c0.is_inside() {
            (Endpoint::Start, c0, p0)
        } else {
            (Endpoint::End, c1, p1)
        };
        // `code` is non-zero here, so some boundary is always violated.
        let Some(boundary) = code.first_violated() else {
            return ClipResult::Rejected;
        };

        let to = boundary.intersect(p0, p1, rect);
        if !to.is_finite() {
            debug!(%boundary, ?p0, ?p1, "degenerate intersection, rejecting segment");
            return ClipResult::Rejected;
        }

        trace!(iteration, %c0, %c1, ?endpoint, %boundary, ?from, ?to, "moving endpoint");
        on_step(ClipStep {
            endpoint,
            outcode: code,
            boundary,
            from,
            to,
        });

        match endpoint {
            Endpoint::Start => p0 = to,
            Endpoint::End => p1 = to,
        }
    }

    warn!(?segment, "clip loop did not settle, rejecting segment");
    ClipResult::Rejected
}
