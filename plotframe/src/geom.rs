// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangles in device space.
//!
//! Points and vectors are `kurbo` types: `Point - Point` gives a [`Vec2`],
//! `Point + Vec2` gives a [`Point`], and [`Vec2::dot`] is the dot product used
//! by the clipper.

use kurbo::{BezPath, Point, Vec2};

/// An axis-aligned rectangle given by its minimum corner and its size.
///
/// The maximum corner is derived, never stored. A negative size is a caller
/// error and is not checked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// The minimum (lower-left) corner.
    pub min: Point,
    /// The extent along each axis.
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its minimum corner and size.
    pub fn new(min: impl Into<Point>, size: impl Into<Vec2>) -> Self {
        Self {
            min: min.into(),
            size: size.into(),
        }
    }

    /// Creates a rectangle at the origin with the given width and height.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Point::ZERO, (width, height))
    }

    /// The maximum (upper-right) corner.
    pub fn max(&self) -> Point {
        self.min + self.size
    }

    /// Returns `true` if every coordinate of the rectangle is finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.size.is_finite()
    }

    /// Returns the closed outline of the rectangle.
    pub fn path(&self) -> BezPath {
        let max = self.max();
        let mut p = BezPath::new();
        p.move_to(self.min);
        p.line_to((max.x, self.min.y));
        p.line_to(max);
        p.line_to((self.min.x, max.y));
        p.close_path();
        p
    }

    /// Converts to a `kurbo` rectangle (`x0, y0, x1, y1`).
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::from_points(self.min, self.max())
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new(r.origin(), (r.width(), r.height()))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn max_is_min_plus_size() {
        let r = Rect::new((1.0, 2.0), (3.0, 4.0));
        assert_eq!(r.max(), Point::new(4.0, 6.0));
    }

    #[test]
    fn kurbo_round_trip_normalizes_corners() {
        let r = Rect::from(kurbo::Rect::new(5.0, 6.0, 1.0, 2.0));
        assert_eq!(r.min, Point::new(1.0, 2.0));
        assert_eq!(r.size, Vec2::new(4.0, 4.0));
        assert_eq!(r.to_kurbo(), kurbo::Rect::new(1.0, 2.0, 5.0, 6.0));
    }

    #[test]
    fn path_visits_all_corners() {
        use kurbo::Shape;

        let r = Rect::new((0.0, 0.0), (10.0, 5.0));
        let bbox = r.path().bounding_box();
        assert_eq!(bbox, kurbo::Rect::new(0.0, 0.0, 10.0, 5.0));
        assert!((r.path().area().abs() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_rects_are_detected() {
        assert!(Rect::from_size(1.0, 1.0).is_finite());
        assert!(!Rect::new((f64::NAN, 0.0), (1.0, 1.0)).is_finite());
        assert!(!Rect::new((0.0, 0.0), (f64::INFINITY, 1.0)).is_finite());
    }
}
