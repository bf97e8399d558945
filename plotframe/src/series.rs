// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data series drawn inside a plot's data area.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::area::DrawArea;
use crate::glyph::{GlyphBox, GlyphStyle};
use crate::plot::Plot;
use crate::style::LineStyle;

/// A polyline through data points, clipped to the data area.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Points in data coordinates.
    pub points: Vec<Point>,
    /// Stroke style.
    pub style: LineStyle,
}

impl Line {
    /// A solid black line through `points`.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
            style: LineStyle::default(),
        }
    }

    /// Sets the stroke style.
    #[must_use]
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Strokes the visible parts of the line in `da`, the data area returned
    /// by [`Plot::draw`].
    pub fn draw(&self, plot: &Plot, da: &DrawArea<'_>) {
        let pts: Vec<Point> = self
            .points
            .iter()
            .map(|p| plot.transform(da, p.x, p.y))
            .collect();
        da.stroke_clipped_line(&self.style, &pts);
    }
}

/// A glyph at each data point.
#[derive(Clone, Debug, PartialEq)]
pub struct Scatter {
    /// Points in data coordinates.
    pub points: Vec<Point>,
    /// The glyph drawn at each point.
    pub glyph: GlyphStyle,
}

impl Scatter {
    /// Creates a scatter series.
    pub fn new(points: impl Into<Vec<Point>>, glyph: GlyphStyle) -> Self {
        Self {
            points: points.into(),
            glyph,
        }
    }

    /// Draws a glyph at each point that falls inside `da`.
    pub fn draw(&self, plot: &Plot, da: &DrawArea<'_>) {
        for p in &self.points {
            da.draw_glyph(&self.glyph, plot.transform(da, p.x, p.y));
        }
    }

    /// The footprint of every glyph, anchored at its normalized position on
    /// the plot's axes. Pass these to [`Plot::draw`] so that glyphs at the
    /// edge of the range stay inside the plot.
    pub fn glyph_boxes(&self, plot: &Plot) -> Vec<GlyphBox> {
        let footprint = self.glyph.footprint();
        self.points
            .iter()
            .map(|p| GlyphBox::new((plot.x.norm(p.x), plot.y.norm(p.y)), footprint))
            .collect()
    }
}
