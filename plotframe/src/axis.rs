// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout.
//!
//! A single [`Axis`] type with an [`AxisOrient`] covers both the horizontal
//! axis below a plot and the vertical axis to its left. An axis can be
//! measured ([`Axis::size`]) to crop the plot's margins, reports the glyph
//! boxes of its outermost tick label ([`Axis::glyph_boxes`]) so the data area
//! can be squished, and finally draws itself along the edge of a draw area.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;

use peniko::color::palette::css;
use plotframe_text::{Font, TextMeasurer};

use crate::Error;
use crate::area::DrawArea;
use crate::geom::Rect;
use crate::glyph::GlyphBox;
use crate::style::{LineStyle, TextStyle};
use crate::tick::{Tick, TickMarker, default_ticks, tick_label_height, tick_label_width};

/// Which side of the plot an axis is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis below the data area.
    Bottom,
    /// A vertical axis to the left of the data area.
    Left,
}

/// The title of an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    /// The label text. Empty for no label.
    pub text: String,
    /// The label style.
    pub style: TextStyle,
}

/// Tick mark configuration.
#[derive(Clone)]
pub struct TickStyle {
    /// Style of the tick labels.
    pub label: TextStyle,
    /// Style of the tick mark lines.
    pub line_style: LineStyle,
    /// Length of a major tick mark. Minor marks are half as long.
    pub length: f64,
    /// Produces the ticks for the axis range.
    pub marker: TickMarker,
}

impl core::fmt::Debug for TickStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TickStyle")
            .field("label", &self.label)
            .field("line_style", &self.line_style)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

/// A horizontal or vertical axis of a plot.
#[derive(Clone, Debug)]
pub struct Axis {
    /// Where the axis is drawn.
    pub orient: AxisOrient,
    /// Data value at the start of the axis.
    pub min: f64,
    /// Data value at the end of the axis.
    pub max: f64,
    /// The axis title.
    pub label: AxisLabel,
    /// Style of the axis line.
    pub line_style: LineStyle,
    /// Space between the axis line and the data.
    pub padding: f64,
    /// Tick marks and their labels.
    pub tick: TickStyle,
}

impl Axis {
    /// Creates an axis with the default look: a 12pt title, 10pt tick labels,
    /// 1pt black lines, 8pt ticks from [`default_ticks`] and 5pt padding.
    ///
    /// The range starts out as `(+inf, -inf)`, so that any finite value is
    /// below `min` and above `max` until a range is set.
    pub fn new(orient: AxisOrient) -> Result<Self, Error> {
        let label_font = Font::sans_serif(12.0)?;
        let tick_font = Font::sans_serif(10.0)?;
        Ok(Self {
            orient,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            label: AxisLabel {
                text: String::new(),
                style: TextStyle::new(css::BLACK, label_font),
            },
            line_style: LineStyle::solid(css::BLACK, 1.0),
            padding: 5.0,
            tick: TickStyle {
                label: TextStyle::new(css::BLACK, tick_font),
                line_style: LineStyle::solid(css::BLACK, 1.0),
                length: 8.0,
                marker: Arc::new(default_ticks),
            },
        })
    }

    /// Sets the data range.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the title text.
    #[must_use]
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label.text = text.into();
        self
    }

    /// Sets the tick generator.
    #[must_use]
    pub fn with_marker(mut self, marker: TickMarker) -> Self {
        self.tick.marker = marker;
        self
    }

    /// Checks that the range is finite and non-empty.
    pub fn validate(&self) -> Result<(), Error> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(Error::InvalidAxisRange {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Normalizes a data value to its fraction of the axis range: `min` is 0
    /// and `max` is 1.
    pub fn norm(&self, v: f64) -> f64 {
        (v - self.min) / (self.max - self.min)
    }

    /// Maps a data value to a device coordinate along this axis of `da`.
    pub fn map(&self, da: &DrawArea<'_>, v: f64) -> f64 {
        match self.orient {
            AxisOrient::Bottom => da.x(self.norm(v)),
            AxisOrient::Left => da.y(self.norm(v)),
        }
    }

    /// The ticks for the current range.
    pub fn ticks(&self) -> Vec<Tick> {
        (self.tick.marker)(self.min, self.max)
    }

    /// The space the axis takes up across its direction: the height of a
    /// bottom axis or the width of a left axis.
    pub fn size(&self, m: &dyn TextMeasurer) -> f64 {
        let mut s = 0.0;
        if !self.label.text.is_empty() {
            s += m.extents(&self.label.style.font).descent;
            s += self.label.style.height(m, &self.label.text);
        }
        let marks = self.ticks();
        if !marks.is_empty() {
            match self.orient {
                AxisOrient::Bottom => {
                    s += tick_label_height(&self.tick.label, m, &marks);
                }
                AxisOrient::Left => {
                    let w = tick_label_width(&self.tick.label, m, &marks);
                    if w > 0.0 {
                        s += w + self.tick.label.width(m, " ");
                    }
                }
            }
            s += self.tick.length;
        }
        s + self.line_style.width / 2.0 + self.padding
    }

    /// Draws the axis along the matching edge of `da`, working inward from
    /// the edge: title, tick labels, tick marks, then the axis line.
    pub fn draw(&self, da: &DrawArea<'_>) {
        match self.orient {
            AxisOrient::Bottom => self.draw_bottom(da),
            AxisOrient::Left => self.draw_left(da),
        }
    }

    fn draw_bottom(&self, da: &DrawArea<'_>) {
        let m: &dyn TextMeasurer = da.canvas();
        let mut y = da.min().y;
        if !self.label.text.is_empty() {
            y += m.extents(&self.label.style.font).descent;
            da.fill_text(
                &self.label.style,
                da.center().x,
                y,
                -0.5,
                0.0,
                &self.label.text,
            );
            y += self.label.style.height(m, &self.label.text);
        }
        let marks = self.ticks();
        if !marks.is_empty() {
            for t in marks.iter().filter(|t| !t.is_minor()) {
                da.fill_text(
                    &self.tick.label,
                    self.map(da, t.value),
                    y,
                    -0.5,
                    0.0,
                    &t.label,
                );
            }
            y += tick_label_height(&self.tick.label, m, &marks);

            let len = self.tick.length;
            for t in &marks {
                let x = self.map(da, t.value);
                da.stroke_line2(
                    &self.tick.line_style,
                    x,
                    y + t.length_offset(len),
                    x,
                    y + len,
                );
            }
            y += len;
        }
        da.stroke_line2(&self.line_style, da.min().x, y, da.max().x, y);
    }

    fn draw_left(&self, da: &DrawArea<'_>) {
        let canvas = da.canvas();
        let m: &dyn TextMeasurer = canvas;
        let mut x = da.min().x;
        if !self.label.text.is_empty() {
            x += self.label.style.height(m, &self.label.text);
            // Reads bottom to top: after a quarter turn, (u, -x) lands on
            // device (x, u).
            canvas.push();
            canvas.rotate(FRAC_PI_2);
            da.fill_text(
                &self.label.style,
                da.center().y,
                -x,
                -0.5,
                0.0,
                &self.label.text,
            );
            canvas.pop();
            x += m.extents(&self.label.style.font).descent;
        }
        let marks = self.ticks();
        if !marks.is_empty() {
            x += tick_label_width(&self.tick.label, m, &marks);
            let mut major = false;
            for t in marks.iter().filter(|t| !t.is_minor()) {
                da.fill_text(
                    &self.tick.label,
                    x,
                    self.map(da, t.value),
                    -1.0,
                    -0.5,
                    &t.label,
                );
                major = true;
            }
            if major {
                x += self.tick.label.width(m, " ");
            }

            let len = self.tick.length;
            for t in &marks {
                let y = self.map(da, t.value);
                da.stroke_line2(
                    &self.tick.line_style,
                    x + t.length_offset(len),
                    y,
                    x + len,
                    y,
                );
            }
            x += len;
        }
        da.stroke_line2(&self.line_style, x, da.min().y, x, da.max().y);
    }

    /// Glyph boxes for the tick labels that may overhang the end of the axis.
    ///
    /// Only the label of the largest major tick is reported: a bottom axis
    /// centers it horizontally on its tick, a left axis vertically. Empty if
    /// there are no major ticks.
    pub fn glyph_boxes(&self, m: &dyn TextMeasurer) -> Vec<GlyphBox> {
        let Some(last) = self
            .ticks()
            .into_iter()
            .filter(|t| !t.is_minor())
            .reduce(|a, b| if b.value > a.value { b } else { a })
        else {
            return Vec::new();
        };
        let u = self.norm(last.value);
        let b = match self.orient {
            AxisOrient::Bottom => {
                let w = self.tick.label.width(m, &last.label);
                GlyphBox::new((u, 0.0), Rect::new((-w / 2.0, 0.0), (w, 0.0)))
            }
            AxisOrient::Left => {
                let h = self.tick.label.height(m, &last.label);
                GlyphBox::new((0.0, u), Rect::new((0.0, -h / 2.0), (0.0, h)))
            }
        };
        alloc::vec![b]
    }
}
