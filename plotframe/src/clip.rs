// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyline clipping against an axis-aligned rectangle.
//!
//! The polyline is clipped against the four edges in turn (right, bottom,
//! left, top). Each pass may split a run in two wherever the line leaves the
//! half-plane and comes back, so the result is a list of disjoint runs that
//! are stroked independently.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::geom::Rect;

/// Tolerance for points lying on a clip edge (≈ √1e-15).
pub const SLOP: f64 = 3e-8;

/// One of the four half-planes bounding a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Right,
    Bottom,
    Left,
    Top,
}

impl Edge {
    const ORDER: [Self; 4] = [Self::Right, Self::Bottom, Self::Left, Self::Top];

    /// A point on the clip line, and the inward normal of the half-plane.
    fn line(self, rect: &Rect) -> (Point, Vec2) {
        let (min, max) = (rect.min, rect.max());
        match self {
            Self::Right => (Point::new(max.x, min.y), Vec2::new(-1.0, 0.0)),
            Self::Bottom => (min, Vec2::new(0.0, 1.0)),
            Self::Left => (min, Vec2::new(1.0, 0.0)),
            Self::Top => (Point::new(min.x, max.y), Vec2::new(0.0, -1.0)),
        }
    }

    fn contains(self, p: Point, clip: Point) -> bool {
        match self {
            Self::Right => p.x <= clip.x + SLOP,
            Self::Bottom => p.y >= clip.y - SLOP,
            Self::Left => p.x >= clip.x - SLOP,
            Self::Top => p.y <= clip.y + SLOP,
        }
    }
}

/// Clips a polyline to `rect`, returning the visible runs.
///
/// Every returned run has at least two points. A polyline entirely inside
/// `rect` comes back unchanged as a single run; one entirely outside yields
/// no runs.
pub fn clip_polyline(rect: &Rect, pts: &[Point]) -> Vec<Vec<Point>> {
    let mut lines = vec![pts.to_vec()];
    for edge in Edge::ORDER {
        let (clip, norm) = edge.line(rect);
        lines = lines
            .iter()
            .flat_map(|line| clip_half_plane(edge, clip, norm, line))
            .collect();
    }
    tracing::trace!(
        points = pts.len(),
        runs = lines.len(),
        "clipped polyline"
    );
    lines
}

fn clip_half_plane(edge: Edge, clip: Point, norm: Vec2, pts: &[Point]) -> Vec<Vec<Point>> {
    let mut lines = Vec::new();
    let mut run = Vec::new();
    for pair in pts.windows(2) {
        let (cur, next) = (pair[0], pair[1]);
        match (edge.contains(cur, clip), edge.contains(next, clip)) {
            (true, true) => run.push(cur),
            (true, false) => {
                run.push(cur);
                run.push(intersect(cur, next, clip, norm));
                lines.push(core::mem::take(&mut run));
            }
            (false, false) => {}
            (false, true) => run.push(intersect(cur, next, clip, norm)),
        }
    }
    if let Some(&last) = pts.last()
        && pts.len() > 1
        && edge.contains(last, clip)
    {
        run.push(last);
    }
    if run.len() > 1 {
        lines.push(run);
    }
    lines
}

/// Intersects the segment `p0 → p1` with the line through `clip` with normal
/// `norm`.
///
/// The segment must not be parallel to the line.
pub fn intersect(p0: Point, p1: Point, clip: Point, norm: Vec2) -> Point {
    let t = (p0 - clip).dot(norm) / (p0 - p1).dot(norm);
    p0 + (p1 - p0) * t
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn square() -> Rect {
        Rect::new((0.0, 0.0), (10.0, 10.0))
    }

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn crossing_line_clips_to_both_edges() {
        let runs = clip_polyline(&square(), &pts(&[(-5.0, 5.0), (15.0, 5.0)]));
        assert_eq!(runs, vec![pts(&[(0.0, 5.0), (10.0, 5.0)])]);
    }

    #[test]
    fn inside_polyline_is_unchanged() {
        let line = pts(&[(1.0, 1.0), (9.0, 2.0), (5.0, 9.0), (0.0, 10.0), (10.0, 0.0)]);
        let runs = clip_polyline(&square(), &line);
        assert_eq!(runs, vec![line]);
    }

    #[test]
    fn outside_polyline_is_dropped() {
        let line = pts(&[(-5.0, -5.0), (-1.0, 20.0), (20.0, 20.0), (20.0, -3.0)]);
        assert!(clip_polyline(&square(), &line).is_empty());
    }

    #[test]
    fn degenerate_inputs_yield_no_runs() {
        assert!(clip_polyline(&square(), &[]).is_empty());
        assert!(clip_polyline(&square(), &pts(&[(5.0, 5.0)])).is_empty());
    }

    #[test]
    fn exit_and_reentry_splits_runs() {
        // Up through the top edge, across outside, and back down.
        let line = pts(&[(2.0, 5.0), (2.0, 15.0), (8.0, 15.0), (8.0, 5.0)]);
        let runs = clip_polyline(&square(), &line);
        assert_eq!(
            runs,
            vec![pts(&[(2.0, 5.0), (2.0, 10.0)]), pts(&[(8.0, 10.0), (8.0, 5.0)])]
        );
    }

    #[test]
    fn diagonal_through_corner_region() {
        let line = pts(&[(-10.0, 0.0), (10.0, 20.0)]);
        let runs = clip_polyline(&square(), &line);
        assert_eq!(runs.len(), 1);
        let run = &runs[0];
        assert_eq!(run.len(), 2);
        assert!((run[0] - Point::new(0.0, 10.0)).hypot() < 1e-9);
        assert!((run[1] - Point::new(0.0, 10.0)).hypot() < 1e-9);
    }

    #[test]
    fn points_on_the_edge_are_kept() {
        let line = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let runs = clip_polyline(&square(), &line);
        assert_eq!(runs, vec![line]);

        let nudged = pts(&[(10.0 + 1e-9, 2.0), (10.0 + 1e-9, 8.0)]);
        assert_eq!(clip_polyline(&square(), &nudged), vec![nudged]);
    }

    #[test]
    fn intersection_with_vertical_line() {
        let p = intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 0.0),
            Vec2::new(1.0, 0.0),
        );
        assert_eq!(p, Point::new(5.0, 0.0));
    }
}
