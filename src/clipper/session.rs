use std::fmt;

use super::cohen_sutherland::{clip_segment, ClipResult, ClipState};
use crate::error::ClipError;
use crate::geometry::{LineSegment, Rectangle};

/// Clips segments against one fixed window.
///
/// The window is set at construction and never changes. The segment can be
/// replaced with [`set_segment`](Self::set_segment), which discards the last
/// result. Clipping never modifies the stored segment, so calling
/// [`clip`](Self::clip) repeatedly gives the same answer.
#[derive(Clone, Debug)]
pub struct Clipper {
    segment: LineSegment,
    rect: Rectangle,
    result: Option<ClipResult>,
}

impl Clipper {
    pub fn new(segment: LineSegment, rect: Rectangle) -> Self {
        Self {
            segment,
            rect,
            result: None,
        }
    }

    /// Builds a clipper from raw endpoint coordinates and a window given by
    /// its lower-left corner, width and height.
    #[allow(clippy::too_many_arguments)]
    pub fn from_coords(
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        rect_x: f64,
        rect_y: f64,
        rect_w: f64,
        rect_h: f64,
    ) -> Result<Self, ClipError> {
        let rect = Rectangle::new(rect_x, rect_y, rect_w, rect_h)?;
        Ok(Self::new(LineSegment::from_coords(x0, y0, x1, y1), rect))
    }

    /// Runs the clip and returns whether any part of the segment is visible.
    pub fn clip(&mut self) -> bool {
        let result = clip_segment(self.segment, &self.rect);
        self.result = Some(result);
        result.is_accepted()
    }

    /// Replaces the working segment and forgets the previous result.
    pub fn set_segment(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.set_line_segment(LineSegment::from_coords(x0, y0, x1, y1));
    }

    pub fn set_line_segment(&mut self, segment: LineSegment) {
        self.segment = segment;
        self.result = None;
    }

    pub fn segment(&self) -> LineSegment {
        self.segment
    }

    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    pub fn state(&self) -> ClipState {
        self.result
            .map_or(ClipState::Undetermined, |result| result.state())
    }

    /// The last result, or `None` if the current segment was never clipped.
    pub fn result(&self) -> Option<ClipResult> {
        self.result
    }

    /// The visible sub-segment after an accepting [`clip`](Self::clip).
    pub fn accepted_segment(&self) -> Option<LineSegment> {
        self.result.and_then(|result| result.segment())
    }

    pub fn report(&self) -> Report {
        Report { state: self.state(), segment: self.accepted_segment() }
    }
}

/// Printable summary of a [`Clipper`]'s last result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub state: ClipState,
    pub segment: Option<LineSegment>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.state, self.segment) {
            (ClipState::Accepted, Some(s)) => write!(
                f,
                "accepted: x0 = {}, y0 = {}, x1 = {}, y1 = {}",
                s.start.x, s.start.y, s.end.x, s.end.y
            ),
            (ClipState::Undetermined, _) => f.write_str("not clipped yet"),
            _ => f.write_str("rejected"),
        }
    }
}
