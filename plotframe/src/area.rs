// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing areas: a rectangle of a shared canvas.
//!
//! A [`DrawArea`] maps the unit interval on each axis onto its rectangle, so
//! layout code can place things at normalized positions. Sub-areas for
//! margins ([`DrawArea::crop`]) and for glyph-aware layout
//! ([`DrawArea::squish_x`], [`DrawArea::squish_y`]) are new values that share
//! the parent's canvas.

use kurbo::{BezPath, Circle, Point, Shape, Vec2};

use crate::canvas::Canvas;
use crate::clip::clip_polyline;
use crate::geom::Rect;
use crate::glyph::{GlyphBox, GlyphStyle, ResolvedGlyph};
use crate::style::{LineStyle, TextStyle, line_count};

/// Stroke width used for ring glyphs, in points.
const GLYPH_LINE_WIDTH: f64 = 0.5;

/// A section of a canvas that drawing is directed to.
#[derive(Clone, Copy)]
pub struct DrawArea<'a> {
    canvas: &'a dyn Canvas,
    /// The part of the canvas this area covers.
    pub rect: Rect,
}

impl core::fmt::Debug for DrawArea<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DrawArea")
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}

impl<'a> DrawArea<'a> {
    /// Creates an area covering `width` × `height` points of `canvas`, with
    /// its minimum corner at the origin.
    pub fn new(canvas: &'a dyn Canvas, width: f64, height: f64) -> Self {
        Self::with_rect(canvas, Rect::from_size(width, height))
    }

    /// Creates an area covering `rect` of `canvas`.
    pub fn with_rect(canvas: &'a dyn Canvas, rect: Rect) -> Self {
        Self { canvas, rect }
    }

    /// The canvas this area draws to.
    pub fn canvas(&self) -> &'a dyn Canvas {
        self.canvas
    }

    /// The minimum (lower-left) corner.
    pub fn min(&self) -> Point {
        self.rect.min
    }

    /// The maximum (upper-right) corner.
    pub fn max(&self) -> Point {
        self.rect.max()
    }

    /// The extent of the area on each axis.
    pub fn size(&self) -> Vec2 {
        self.rect.size
    }

    /// Maps `u` on the unit interval to a device x coordinate: 0 is the left
    /// edge, 1 the right edge. Values outside `[0, 1]` extrapolate.
    pub fn x(&self, u: f64) -> f64 {
        u * (self.max().x - self.rect.min.x) + self.rect.min.x
    }

    /// Maps `u` on the unit interval to a device y coordinate: 0 is the bottom
    /// edge, 1 the top edge. Values outside `[0, 1]` extrapolate.
    pub fn y(&self, u: f64) -> f64 {
        u * (self.max().y - self.rect.min.y) + self.rect.min.y
    }

    /// The center of the area.
    pub fn center(&self) -> Point {
        let (min, max) = (self.rect.min, self.max());
        Point::new((max.x - min.x) / 2.0 + min.x, (max.y - min.y) / 2.0 + min.y)
    }

    /// Returns `true` if `p` lies inside the area, edges included.
    pub fn contains(&self, p: Point) -> bool {
        let (min, max) = (self.rect.min, self.max());
        p.x <= max.x && p.x >= min.x && p.y <= max.y && p.y >= min.y
    }

    /// Returns a new area with the given amounts added to the minimum and
    /// maximum corners.
    ///
    /// Positive `min_*` and negative `max_*` values shrink the area.
    pub fn crop(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        let min = Point::new(self.rect.min.x + min_x, self.rect.min.y + min_y);
        let max = self.max();
        let size = Vec2::new(max.x + max_x - min.x, max.y + max_y - min.y);
        Self {
            canvas: self.canvas,
            rect: Rect { min, size },
        }
    }

    /// Returns a new area with its width adjusted so that the leftmost and
    /// rightmost glyph footprints in `boxes`, mapped through the new area,
    /// end on the bounds of this one.
    ///
    /// Only the two extreme footprints are placed exactly. A box anchored in
    /// between can still overhang once the scale shrinks.
    ///
    /// Glyph anchors use the unit interval: 0 is the left side of the area
    /// and 1 the right side. An empty `boxes` returns the area unchanged.
    pub fn squish_x(&self, boxes: &[GlyphBox]) -> Self {
        if boxes.is_empty() {
            return *self;
        }
        let (min, size) = squish_interval(
            self.rect.min.x,
            self.max().x,
            boxes.iter().map(|b| (b.x, b.rect.min.x, b.rect.size.x)),
        );
        tracing::debug!(from = ?self.rect, min, size, "squished width");
        Self {
            canvas: self.canvas,
            rect: Rect::new((min, self.rect.min.y), (size, self.rect.size.y)),
        }
    }

    /// Returns a new area with its height adjusted so that the lowest and
    /// highest glyph footprints in `boxes`, mapped through the new area, end
    /// on the bounds of this one. As with [`DrawArea::squish_x`], boxes
    /// anchored in between are not checked.
    ///
    /// Glyph anchors use the unit interval: 0 is the bottom of the area and
    /// 1 the top. An empty `boxes` returns the area unchanged.
    pub fn squish_y(&self, boxes: &[GlyphBox]) -> Self {
        if boxes.is_empty() {
            return *self;
        }
        let (min, size) = squish_interval(
            self.rect.min.y,
            self.max().y,
            boxes.iter().map(|b| (b.y, b.rect.min.y, b.rect.size.y)),
        );
        tracing::debug!(from = ?self.rect, min, size, "squished height");
        Self {
            canvas: self.canvas,
            rect: Rect::new((self.rect.min.x, min), (self.rect.size.x, size)),
        }
    }

    /// Sets the canvas color, width and dash pattern from `sty`.
    pub fn set_line_style(&self, sty: &LineStyle) {
        self.canvas.set_color(sty.color);
        self.canvas.set_line_width(sty.width);
        self.canvas.set_line_dash(&sty.dashes, sty.dash_offset);
    }

    /// Strokes a polyline through `pts`. Nothing is drawn for no points.
    pub fn stroke_line(&self, sty: &LineStyle, pts: &[Point]) {
        let Some((&first, rest)) = pts.split_first() else {
            return;
        };
        self.set_line_style(sty);
        let mut p = BezPath::new();
        p.move_to(first);
        for &pt in rest {
            p.line_to(pt);
        }
        self.canvas.stroke(&p);
    }

    /// Strokes a single segment from `(x0, y0)` to `(x1, y1)`.
    pub fn stroke_line2(&self, sty: &LineStyle, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.stroke_line(sty, &[Point::new(x0, y0), Point::new(x1, y1)]);
    }

    /// Strokes the parts of the polyline through `pts` that lie inside this
    /// area. Each visible run is stroked separately.
    pub fn stroke_clipped_line(&self, sty: &LineStyle, pts: &[Point]) {
        for run in clip_polyline(&self.rect, pts) {
            self.stroke_line(sty, &run);
        }
    }

    /// Draws a glyph centered at `pt`. Glyphs outside the area are skipped.
    pub fn draw_glyph(&self, sty: &GlyphStyle, pt: Point) {
        if !self.contains(pt) {
            tracing::trace!(?pt, "glyph outside draw area");
            return;
        }

        self.set_line_style(&LineStyle::solid(sty.color(), GLYPH_LINE_WIDTH));

        match sty.resolved() {
            ResolvedGlyph::Circle => self.canvas.fill(&circle_path(pt, sty.radius())),
            ResolvedGlyph::Ring => self.canvas.stroke(&circle_path(pt, sty.radius())),
            ResolvedGlyph::Letter(c, font) => {
                let mut buf = [0_u8; 4];
                let s = c.encode_utf8(&mut buf);
                let x = pt.x - self.canvas.width(font, s) / 2.0;
                let y = pt.y - self.canvas.extents(font).descent;
                self.canvas.fill_text(font, x, y, s);
            }
        }
    }

    /// Fills lines of text with their bottom-left corner at `(x, y)`, offset by
    /// the text width times `x_align` and its height times `y_align`.
    ///
    /// An alignment of `(-0.5, 0)` centers text horizontally above the point;
    /// `(-1, -0.5)` right-aligns it and centers it vertically.
    pub fn fill_text(
        &self,
        sty: &TextStyle,
        x: f64,
        y: f64,
        x_align: f64,
        y_align: f64,
        text: &str,
    ) {
        let text = text.trim_end_matches('\n');
        if text.is_empty() {
            return;
        }

        self.canvas.set_color(sty.color);

        let ascent = self.canvas.extents(&sty.font).ascent;
        let y = y + sty.height(self.canvas, text) * y_align - ascent;
        let n_lines = line_count(text);
        for (i, line) in text.split('\n').enumerate() {
            let x_offset = x_align * self.canvas.width(&sty.font, line);
            let n = (n_lines - i) as f64;
            self.canvas
                .fill_text(&sty.font, x + x_offset, y + n * sty.font.size(), line);
        }
    }
}

/// Solves one axis of the squish layout.
///
/// `boxes` yields `(anchor, offset, extent)` per glyph: the normalized anchor
/// and the glyph's device-space offset and length along this axis. Returns
/// the new `(min, size)` of the interval `[lo, hi]`.
fn squish_interval(
    lo: f64,
    hi: f64,
    boxes: impl Iterator<Item = (f64, f64, f64)>,
) -> (f64, f64) {
    let map = |u: f64| u * (hi - lo) + lo;

    // The ends of the range are always candidates.
    let ends = [(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)];

    let (mut left, mut right) = (0.0, 1.0);
    let (mut min_edge, mut max_edge) = (f64::INFINITY, f64::NEG_INFINITY);
    for (anchor, offset, extent) in boxes.chain(ends) {
        let edge = map(anchor) + offset;
        if edge < min_edge {
            left = anchor;
            min_edge = edge;
        }
        let edge = edge + extent;
        if edge > max_edge {
            right = anchor;
            max_edge = edge;
        }
    }

    // Never pull the area in past its own bounds.
    if min_edge >= lo {
        min_edge = lo;
    }
    if max_edge <= hi {
        max_edge = hi;
    }

    // Where the extreme anchors have to land for their glyphs to end exactly
    // on the bounds of this area.
    let l = lo - (min_edge - map(left));
    let r = hi - (max_edge - map(right));

    let n = (left * r - right * l) / (left - right);
    let m = ((left - 1.0) * r - (right - 1.0) * l) / (left - right);
    if !(n.is_finite() && m.is_finite()) {
        tracing::warn!(
            left,
            right,
            "squish has a single extreme anchor; layout is degenerate"
        );
    }
    (n, m - n)
}

fn circle_path(center: Point, radius: f64) -> BezPath {
    // Tolerance is in device units (points).
    Circle::new(center, radius).path_elements(0.01).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use peniko::color::palette::css;
    use plotframe_text::Font;

    use super::*;
    use crate::canvas::{CanvasOp, RecordingCanvas};
    use crate::glyph::GlyphShape;

    const EPS: f64 = 1e-9;

    fn area(canvas: &RecordingCanvas) -> DrawArea<'_> {
        DrawArea::with_rect(canvas, Rect::new((10.0, 20.0), (100.0, 50.0)))
    }

    #[test]
    fn unit_interval_maps_to_edges() {
        let canvas = RecordingCanvas::new();
        let da = area(&canvas);
        assert_eq!(da.x(0.0), 10.0);
        assert_eq!(da.x(1.0), 110.0);
        assert_eq!(da.x(0.5), 60.0);
        assert_eq!(da.y(0.0), 20.0);
        assert_eq!(da.y(1.0), 70.0);
        assert_eq!(da.y(0.5), 45.0);
        // No clamping outside the unit interval.
        assert_eq!(da.x(-0.1), 0.0);
        assert_eq!(da.y(2.0), 120.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let canvas = RecordingCanvas::new();
        let da = area(&canvas);
        assert!(da.contains(da.min()));
        assert!(da.contains(da.max()));
        assert!(da.contains(da.center()));
        assert!(!da.contains(Point::new(9.9, 30.0)));
        assert!(!da.contains(Point::new(110.1, 30.0)));
        assert!(!da.contains(Point::new(50.0, 19.9)));
        assert!(!da.contains(Point::new(50.0, 70.1)));
    }

    #[test]
    fn center_is_midpoint() {
        let canvas = RecordingCanvas::new();
        assert_eq!(area(&canvas).center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn crop_offsets_both_corners() {
        let canvas = RecordingCanvas::new();
        let da = area(&canvas).crop(5.0, 2.0, -10.0, 3.0);
        assert_eq!(da.min(), Point::new(15.0, 22.0));
        assert_eq!(da.max(), Point::new(100.0, 73.0));
    }

    #[test]
    fn squish_without_boxes_is_identity() {
        let canvas = RecordingCanvas::new();
        let da = area(&canvas);
        assert_eq!(da.squish_x(&[]).rect, da.rect);
        assert_eq!(da.squish_y(&[]).rect, da.rect);
    }

    #[test]
    fn squish_with_fitting_boxes_is_identity() {
        let canvas = RecordingCanvas::new();
        let da = area(&canvas);
        let boxes = [
            GlyphBox::new((0.5, 0.5), Rect::new((-5.0, -5.0), (10.0, 10.0))),
            GlyphBox::new((0.0, 0.0), Rect::new((0.0, 0.0), (4.0, 4.0))),
        ];
        let sx = da.squish_x(&boxes);
        assert!((sx.min().x - da.min().x).abs() < EPS);
        assert!((sx.max().x - da.max().x).abs() < EPS);
        let sy = da.squish_y(&boxes);
        assert!((sy.min().y - da.min().y).abs() < EPS);
        assert!((sy.max().y - da.max().y).abs() < EPS);
    }

    #[test]
    fn squish_x_pulls_edge_labels_inside() {
        let canvas = RecordingCanvas::new();
        let da = area(&canvas);
        // Labels 20 wide, centered on both ends of the axis.
        let label = Rect::new((-10.0, 0.0), (20.0, 0.0));
        let boxes = [
            GlyphBox::new((0.0, 0.0), label),
            GlyphBox::new((1.0, 0.0), label),
        ];
        let s = da.squish_x(&boxes);
        assert!((s.min().x - 20.0).abs() < EPS);
        assert!((s.max().x - 100.0).abs() < EPS);
        // The other axis is untouched.
        assert_eq!(s.min().y, da.min().y);
        assert_eq!(s.size().y, da.size().y);
        for b in boxes {
            let left = s.x(b.x) + b.rect.min.x;
            let right = left + b.rect.size.x;
            assert!(left >= da.min().x - EPS && right <= da.max().x + EPS);
        }
    }

    #[test]
    fn squish_y_pulls_interior_overhang_inside() {
        let canvas = RecordingCanvas::new();
        let da = area(&canvas);
        // A tall glyph near the top whose upper edge pokes out of the area.
        let b = GlyphBox::new((0.0, 0.9), Rect::new((0.0, -5.0), (0.0, 15.0)));
        assert!(da.y(b.y) + b.rect.min.y + b.rect.size.y > da.max().y);

        let s = da.squish_y(&[b]);
        let top = s.y(b.y) + b.rect.min.y + b.rect.size.y;
        assert!((top - da.max().y).abs() < EPS);
        assert!((s.min().y - da.min().y).abs() < EPS);
        assert!(s.size().y < da.size().y);
    }

    #[test]
    fn squish_lands_extreme_boxes_on_the_bounds() {
        let canvas = RecordingCanvas::new();
        let da = DrawArea::new(&canvas, 200.0, 100.0);
        let boxes = [
            GlyphBox::new((0.0, 0.0), Rect::new((-12.0, 0.0), (24.0, 0.0))),
            GlyphBox::new((1.0, 0.0), Rect::new((-3.0, 0.0), (30.0, 0.0))),
            GlyphBox::new((0.5, 0.0), Rect::new((-8.0, 0.0), (16.0, 0.0))),
        ];
        let s = da.squish_x(&boxes);
        let left = s.x(boxes[0].x) + boxes[0].rect.min.x;
        let right = s.x(boxes[1].x) + boxes[1].rect.max().x;
        assert!(left.abs() < EPS, "left edge at {left}");
        assert!((right - 200.0).abs() < EPS, "right edge at {right}");
        let mid = s.x(boxes[2].x) + boxes[2].rect.min.x;
        assert!(mid >= 0.0 && mid + 16.0 <= 200.0, "middle box at {mid}");
    }

    #[test]
    fn squish_does_not_place_interior_boxes() {
        let canvas = RecordingCanvas::new();
        let da = DrawArea::new(&canvas, 200.0, 100.0);
        // The box at 0.1 reaches almost as far left as the one at 0, but the
        // squish only places the extremes.
        let boxes = [
            GlyphBox::new((0.0, 0.0), Rect::new((-12.0, 0.0), (24.0, 0.0))),
            GlyphBox::new((0.1, 0.0), Rect::new((-31.0, 0.0), (2.0, 0.0))),
            GlyphBox::new((1.0, 0.0), Rect::new((0.0, 0.0), (100.0, 0.0))),
        ];
        let s = da.squish_x(&boxes);
        assert!((s.min().x - 12.0).abs() < EPS);
        assert!((s.max().x - 100.0).abs() < EPS);
        let interior = s.x(0.1) - 31.0;
        assert!((interior - -10.2).abs() < 1e-9, "interior box at {interior}");
    }

    #[test]
    fn squish_with_single_extreme_anchor_is_non_finite() {
        let canvas = RecordingCanvas::new();
        let da = DrawArea::new(&canvas, 10.0, 10.0);
        // One glyph wider than the whole area on both sides.
        let b = GlyphBox::new((0.5, 0.5), Rect::new((-20.0, -20.0), (40.0, 40.0)));
        assert!(!da.squish_x(&[b]).rect.is_finite());
    }

    #[test]
    fn squish_shares_the_canvas() {
        let canvas = RecordingCanvas::new();
        let da = area(&canvas);
        let b = GlyphBox::new((1.0, 1.0), Rect::new((0.0, 0.0), (10.0, 10.0)));
        let s = da.squish_x(&[b]).squish_y(&[b]).crop(1.0, 1.0, -1.0, -1.0);
        s.stroke_line2(&LineStyle::default(), 0.0, 0.0, 1.0, 1.0);
        assert_eq!(canvas.strokes().len(), 1);
    }

    #[test]
    fn stroke_line_sets_style_then_strokes() {
        let canvas = RecordingCanvas::new();
        let da = area(&canvas);
        let sty = LineStyle::solid(css::RED, 2.0).with_dashes([1.0, 2.0], 0.5);
        da.stroke_line(&sty, &[]);
        assert!(canvas.ops().is_empty());

        da.stroke_line(&sty, &[Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
        let ops = canvas.ops();
        assert_eq!(ops[0], CanvasOp::SetColor(css::RED));
        assert_eq!(ops[1], CanvasOp::SetLineWidth(2.0));
        assert_eq!(
            ops[2],
            CanvasOp::SetLineDash {
                dashes: std::vec![1.0, 2.0],
                offset: 0.5
            }
        );
        let CanvasOp::Stroke(path) = &ops[3] else {
            panic!("expected a stroke, got {:?}", ops[3]);
        };
        assert_eq!(path.elements().len(), 2);
    }

    #[test]
    fn clipped_line_strokes_each_visible_run() {
        let canvas = RecordingCanvas::new();
        let da = DrawArea::new(&canvas, 10.0, 10.0);
        let pts = [
            Point::new(2.0, 5.0),
            Point::new(2.0, 15.0),
            Point::new(8.0, 15.0),
            Point::new(8.0, 5.0),
        ];
        da.stroke_clipped_line(&LineStyle::default(), &pts);
        let strokes = canvas.strokes();
        assert_eq!(strokes.len(), 2);
        for s in strokes {
            let bbox = s.bounding_box();
            assert!(bbox.y1 <= 10.0 + EPS);
        }
    }

    #[test]
    fn glyphs_outside_the_area_are_skipped() {
        let canvas = RecordingCanvas::new();
        let da = DrawArea::new(&canvas, 10.0, 10.0);
        let sty = GlyphStyle::new(css::BLUE, GlyphShape::Circle, 2.0).unwrap();
        da.draw_glyph(&sty, Point::new(11.0, 5.0));
        assert!(canvas.ops().is_empty());

        da.draw_glyph(&sty, Point::new(5.0, 5.0));
        let fills: Vec<_> = canvas
            .ops()
            .into_iter()
            .filter_map(|op| match op {
                CanvasOp::Fill(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), 1);
        let bbox = fills[0].bounding_box();
        assert!((bbox.x0 - 3.0).abs() < 0.05 && (bbox.x1 - 7.0).abs() < 0.05);
        assert!((bbox.y0 - 3.0).abs() < 0.05 && (bbox.y1 - 7.0).abs() < 0.05);
    }

    #[test]
    fn ring_glyph_is_stroked_at_half_point() {
        let canvas = RecordingCanvas::new();
        let da = DrawArea::new(&canvas, 10.0, 10.0);
        let sty = GlyphStyle::new(css::BLUE, GlyphShape::Ring, 2.0).unwrap();
        da.draw_glyph(&sty, Point::new(5.0, 5.0));
        let ops = canvas.ops();
        assert!(ops.contains(&CanvasOp::SetLineWidth(0.5)));
        assert_eq!(canvas.strokes().len(), 1);
    }

    #[test]
    fn letter_glyph_is_centered_on_the_point() {
        let canvas = RecordingCanvas::new();
        let da = DrawArea::new(&canvas, 100.0, 100.0);
        let sty = GlyphStyle::new(css::BLUE, GlyphShape::Character('X'), 5.0).unwrap();
        da.draw_glyph(&sty, Point::new(50.0, 50.0));
        // Heuristic metrics at 10pt: width 6, descent 2.
        assert_eq!(canvas.texts(), [(47.0, 48.0, std::string::String::from("X"))]);
    }

    #[test]
    fn fill_text_aligns_and_stacks_lines() {
        let canvas = RecordingCanvas::new();
        let da = DrawArea::new(&canvas, 100.0, 100.0);
        let sty = TextStyle::new(css::BLACK, Font::sans_serif(10.0).unwrap());

        da.fill_text(&sty, 50.0, 10.0, -0.5, 0.0, "abcd");
        // Width 24, ascent 8: baseline at 10 - 8 + 10.
        assert_eq!(canvas.texts(), [(38.0, 12.0, std::string::String::from("abcd"))]);
        canvas.take_ops();

        da.fill_text(&sty, 0.0, 0.0, 0.0, -0.5, "a\nbb\n");
        // Height 18: the block drops by half of that plus the ascent.
        let texts = canvas.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].2, "a");
        assert!((texts[0].1 - 3.0).abs() < EPS);
        assert_eq!(texts[1].2, "bb");
        assert!((texts[1].1 - -7.0).abs() < EPS);
    }

    #[test]
    fn empty_text_draws_nothing() {
        let canvas = RecordingCanvas::new();
        let da = DrawArea::new(&canvas, 100.0, 100.0);
        let sty = TextStyle::new(css::BLACK, Font::sans_serif(10.0).unwrap());
        da.fill_text(&sty, 0.0, 0.0, 0.0, 0.0, "\n");
        assert!(canvas.ops().is_empty());
    }
}
