// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and text styles.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;
use plotframe_text::{Font, TextMeasurer};

/// What a stroked line looks like.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in points.
    pub width: f64,
    /// Dash lengths; empty for a solid line.
    pub dashes: Vec<f64>,
    /// Offset into the dash pattern.
    pub dash_offset: f64,
}

impl LineStyle {
    /// A solid line.
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashes: Vec::new(),
            dash_offset: 0.0,
        }
    }

    /// Sets the dash pattern.
    #[must_use]
    pub fn with_dashes(mut self, dashes: impl Into<Vec<f64>>, offset: f64) -> Self {
        self.dashes = dashes.into();
        self.dash_offset = offset;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// What text looks like.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// The resolved font.
    pub font: Font,
}

impl TextStyle {
    /// Creates a text style.
    pub fn new(color: Color, font: Font) -> Self {
        Self { color, font }
    }

    /// Returns the width of the widest line of `text`.
    pub fn width(&self, measurer: &dyn TextMeasurer, text: &str) -> f64 {
        text.trim_end_matches('\n')
            .split('\n')
            .map(|line| measurer.width(&self.font, line))
            .fold(0.0, f64::max)
    }

    /// Returns the height of `text`: the ascent of the first line plus one
    /// line height per further line. Empty text has no height.
    pub fn height(&self, measurer: &dyn TextMeasurer, text: &str) -> f64 {
        let n = line_count(text);
        if n == 0 {
            return 0.0;
        }
        let e = measurer.extents(&self.font);
        e.line_height() * (n - 1) as f64 + e.ascent
    }
}

/// Returns the number of lines in `text`, ignoring trailing newlines.
pub fn line_count(text: &str) -> usize {
    let text = text.trim_end_matches('\n');
    if text.is_empty() {
        return 0;
    }
    1 + text.matches('\n').count()
}
