//! A clip window together with the segments to clip against it.

use tracing::debug;

use crate::clipper::{ClipResult, Clipper};
use crate::colors;
use crate::geometry::{LineSegment, Point, Rectangle};
use crate::render::{Canvas, Viewport};

const VIEW_MARGIN: u32 = 40;

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    window: Rectangle,
    segments: Vec<LineSegment>,
}

impl Scene {
    pub fn new(window: Rectangle) -> Self {
        Self {
            window,
            segments: Vec::new(),
        }
    }

    pub fn with_segments(window: Rectangle, segments: Vec<LineSegment>) -> Self {
        Self { window, segments }
    }

    /// The unit window with a few segments covering the interesting cases:
    /// partial overlap, trivial reject, a full crossing, and corner to corner.
    pub fn demo() -> Self {
        Self::with_segments(
            Rectangle::unit(),
            vec![
                LineSegment::from_coords(0.5, 1.5, 1.0, 0.0),
                LineSegment::from_coords(0.5, 1.5, 2.0, 3.0),
                LineSegment::from_coords(-1.0, 0.5, 2.0, 0.5),
                LineSegment::from_coords(0.0, 0.0, 1.0, 1.0),
            ],
        )
    }

    pub fn push(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }

    pub fn window(&self) -> &Rectangle {
        &self.window
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Clips every segment in order, reusing a single [`Clipper`].
    pub fn clip_all(&self) -> Vec<ClipResult> {
        let mut clipper = Clipper::new(LineSegment::default(), self.window);
        self.segments
            .iter()
            .map(|segment| {
                clipper.set_line_segment(*segment);
                clipper.clip();
                let report = clipper.report();
                debug!(?segment, %report, "clipped segment");
                clipper.result().unwrap_or(ClipResult::Rejected)
            })
            .collect()
    }

    /// Smallest rectangle holding the window and every segment endpoint.
    pub fn bounds(&self) -> Rectangle {
        let points = self
            .segments
            .iter()
            .flat_map(|s| [s.start, s.end])
            .filter(Point::is_finite);
        let mut bounds = self.window;
        for p in points {
            bounds.xmin = bounds.xmin.min(p.x);
            bounds.xmax = bounds.xmax.max(p.x);
            bounds.ymin = bounds.ymin.min(p.y);
            bounds.ymax = bounds.ymax.max(p.y);
        }
        bounds
    }

    /// Draws the window outline, each full segment dimmed, and its visible
    /// part on top.
    pub fn render(&self, canvas: &mut Canvas) {
        let viewport = Viewport::fit(self.bounds(), canvas.width(), canvas.height(), VIEW_MARGIN);

        canvas.clear(colors::BACKGROUND);
        canvas.draw_grid(50, colors::GRID);

        let corners = self.window.corners();
        for (i, &corner) in corners.iter().enumerate() {
            let next = corners[(i + 1) % corners.len()];
            draw_segment(canvas, &viewport, &LineSegment::new(corner, next), colors::WINDOW);
        }

        for (segment, result) in self.segments.iter().zip(self.clip_all()) {
            draw_segment(canvas, &viewport, segment, colors::CLIPPED);
            if let Some(visible) = result.segment() {
                draw_segment(canvas, &viewport, &visible, colors::VISIBLE);
            }
        }
    }
}

fn draw_segment(canvas: &mut Canvas, viewport: &Viewport, segment: &LineSegment, color: u32) {
    if !segment.start.is_finite() || !segment.end.is_finite() {
        return;
    }
    let (x0, y0) = viewport.to_screen(segment.start);
    let (x1, y1) = viewport.to_screen(segment.end);
    canvas.draw_line(x0, y0, x1, y1, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_results() {
        let results = Scene::demo().clip_all();
        let accepted: Vec<bool> = results.iter().map(ClipResult::is_accepted).collect();
        assert_eq!(accepted, vec![true, false, true, true]);
    }

    #[test]
    fn test_bounds_cover_segments() {
        let bounds = Scene::demo().bounds();
        assert_eq!(bounds.xmin, -1.0);
        assert_eq!(bounds.xmax, 2.0);
        assert_eq!(bounds.ymin, 0.0);
        assert_eq!(bounds.ymax, 3.0);
    }

    #[test]
    fn test_render_draws_visible_part() {
        let scene = Scene::with_segments(
            Rectangle::unit(),
            vec![LineSegment::from_coords(-1.0, 0.5, 2.0, 0.5)],
        );
        let mut canvas = Canvas::new(300, 100);
        scene.render(&mut canvas);

        let viewport = Viewport::fit(scene.bounds(), 300, 100, VIEW_MARGIN);
        let (x, y) = viewport.to_screen(Point::new(0.5, 0.5));
        assert_eq!(canvas.get_pixel(x, y), Some(colors::VISIBLE));
        let (x, y) = viewport.to_screen(Point::new(-0.5, 0.5));
        assert_eq!(canvas.get_pixel(x, y), Some(colors::CLIPPED));
        for corner in scene.window().corners() {
            let (x, y) = viewport.to_screen(corner);
            assert_eq!(canvas.get_pixel(x, y), Some(colors::WINDOW));
        }
    }
}
