// Concrete clipping scenarios against the unit window.

use approx::assert_relative_eq;
use rectclip::prelude::*;

fn unit_clipper(x0: f64, y0: f64, x1: f64, y1: f64) -> Clipper {
    Clipper::from_coords(x0, y0, x1, y1, 0.0, 0.0, 1.0, 1.0).expect("unit window is valid")
}

#[test]
fn above_to_right_edge_is_trimmed_at_top() {
    let mut clipper = unit_clipper(0.5, 1.5, 1.0, 0.0);
    assert!(clipper.clip());

    // x = 0.5 + (1 - 0.5) / (0 - 1.5) * (1 - 1.5)
    let expected_x = 0.5 + (1.0 - 0.5) / (0.0 - 1.5) * (1.0 - 1.5);
    let segment = clipper.accepted_segment().unwrap();
    assert_relative_eq!(segment.start.x, expected_x);
    assert_relative_eq!(segment.start.y, 1.0);
    assert_eq!(segment.end, Point::new(1.0, 0.0));
    assert_relative_eq!(segment.start.x, 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn both_above_is_trivially_rejected() {
    let mut clipper = unit_clipper(0.5, 1.5, 2.0, 3.0);
    assert!(!clipper.clip());
    assert_eq!(clipper.state(), ClipState::Rejected);
    assert_eq!(clipper.report().to_string(), "rejected");

    let trace = clip_segment_traced(clipper.segment(), clipper.rect());
    assert!(trace.steps.is_empty());
}

#[test]
fn horizontal_crossing_is_cut_to_window_width() {
    let mut clipper = unit_clipper(-1.0, 0.5, 2.0, 0.5);
    assert!(clipper.clip());
    assert_eq!(
        clipper.accepted_segment(),
        Some(LineSegment::from_coords(0.0, 0.5, 1.0, 0.5))
    );
}

#[test]
fn corner_to_corner_is_unchanged() {
    let mut clipper = unit_clipper(0.0, 0.0, 1.0, 1.0);
    assert!(clipper.clip());
    assert_eq!(
        clipper.accepted_segment(),
        Some(LineSegment::from_coords(0.0, 0.0, 1.0, 1.0))
    );
}

#[test]
fn one_clipper_serves_several_segments() {
    let mut clipper = unit_clipper(0.5, 1.5, 1.0, 0.0);
    assert!(clipper.clip());

    clipper.set_segment(0.5, 1.5, 2.0, 3.0);
    assert_eq!(clipper.state(), ClipState::Undetermined);
    assert!(!clipper.clip());

    clipper.set_segment(-1.0, 0.5, 2.0, 0.5);
    assert!(clipper.clip());
    assert_eq!(
        clipper.report().to_string(),
        "accepted: x0 = 0, y0 = 0.5, x1 = 1, y1 = 0.5"
    );
}

#[test]
fn offset_window() {
    let window = Rectangle::new(10.0, -5.0, 4.0, 2.0).unwrap();
    let result = clip_segment(LineSegment::from_coords(8.0, -4.0, 16.0, -4.0), &window);
    assert_eq!(
        result,
        ClipResult::Accepted(LineSegment::from_coords(10.0, -4.0, 14.0, -4.0))
    );
}
