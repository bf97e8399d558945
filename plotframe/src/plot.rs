// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot assembly: title, axes and the data area between them.
//!
//! [`Plot::draw`] works in two passes, measuring and then arranging:
//! - the title and the axes report how much room they need, and the draw
//!   area is cropped by that much;
//! - the remaining area is squished so that the outermost tick labels and
//!   the data glyphs stay inside it, the axes are drawn along its edges and
//!   what is left is returned for the data.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::color::palette::css;
use plotframe_text::{Font, TextMeasurer};

use crate::Error;
use crate::area::DrawArea;
use crate::axis::{Axis, AxisOrient};
use crate::glyph::GlyphBox;
use crate::style::TextStyle;

/// A two-dimensional plot with a horizontal and a vertical axis.
#[derive(Clone, Debug)]
pub struct Plot {
    /// Title drawn centered above the plot. Empty for no title.
    pub title: String,
    /// Style of the title.
    pub title_style: TextStyle,
    /// The horizontal axis.
    pub x: Axis,
    /// The vertical axis.
    pub y: Axis,
}

impl Plot {
    /// Creates an untitled plot with default axes.
    ///
    /// The axis ranges start out empty and must be set before drawing.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            title: String::new(),
            title_style: TextStyle::new(css::BLACK, Font::sans_serif(12.0)?),
            x: Axis::new(AxisOrient::Bottom)?,
            y: Axis::new(AxisOrient::Left)?,
        })
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Draws the title and both axes into `da` and returns the area left for
    /// the data.
    ///
    /// `data_glyphs` are the footprints of everything that will be drawn in
    /// the data area, such as [`Scatter::glyph_boxes`](crate::Scatter::glyph_boxes).
    /// The data area is shrunk so that the outermost of them, and the
    /// outermost tick labels, end on the bounds of `da`.
    ///
    /// Nothing is drawn if an axis range is invalid, or if the glyphs cannot
    /// be fitted along an axis because a single glyph overhangs both of its
    /// ends.
    pub fn draw<'a>(
        &self,
        da: &DrawArea<'a>,
        data_glyphs: &[GlyphBox],
    ) -> Result<DrawArea<'a>, Error> {
        self.x.validate()?;
        self.y.validate()?;

        let m: &dyn TextMeasurer = da.canvas();
        let mut da = *da;
        let title_height = if self.title.is_empty() {
            0.0
        } else {
            self.title_style.height(m, &self.title) + m.extents(&self.title_style.font).descent
        };
        let top = da.max().y - title_height;
        da = da.crop(0.0, 0.0, 0.0, -title_height);

        let x_boxes = squish_boxes(&self.x, m, data_glyphs);
        let y_boxes = squish_boxes(&self.y, m, data_glyphs);
        let y_width = self.y.size(m);
        let x_height = self.x.size(m);

        let x_area = da.crop(y_width, 0.0, 0.0, 0.0).squish_x(&x_boxes);
        let y_area = da.crop(0.0, x_height, 0.0, 0.0).squish_y(&y_boxes);
        for (area, orient) in [(&x_area, AxisOrient::Bottom), (&y_area, AxisOrient::Left)] {
            if !area.rect.is_finite() {
                return Err(Error::DegenerateLayout { orient });
            }
        }

        if !self.title.is_empty() {
            da.fill_text(&self.title_style, da.center().x, top, -0.5, 0.0, &self.title);
        }
        self.x.draw(&x_area);
        self.y.draw(&y_area);

        let data = da
            .crop(y_width, x_height, 0.0, 0.0)
            .squish_x(&x_boxes)
            .squish_y(&y_boxes);
        tracing::debug!(rect = ?data.rect, "plot data area");
        Ok(data)
    }

    /// Maps a data point to device coordinates in the data area `da`.
    pub fn transform(&self, da: &DrawArea<'_>, x: f64, y: f64) -> Point {
        Point::new(self.x.map(da, x), self.y.map(da, y))
    }
}

fn squish_boxes(axis: &Axis, m: &dyn TextMeasurer, data_glyphs: &[GlyphBox]) -> Vec<GlyphBox> {
    let mut boxes = axis.glyph_boxes(m);
    boxes.extend_from_slice(data_glyphs);
    boxes
}
