// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface a [`DrawArea`](crate::DrawArea) issues commands to.
//!
//! Rasterization and font shaping are not part of this crate: a backend
//! implements [`Canvas`] (and the [`TextMeasurer`] it extends) and receives
//! drawing commands in painter's order. Later commands draw on top of earlier
//! ones.
//!
//! Methods take `&self` so that several draw areas can share one canvas by
//! reference. Backends keep their mutable state behind a `RefCell` or similar.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::BezPath;
use peniko::Color;
use plotframe_text::{Font, FontExtents, HeuristicTextMeasurer, TextMeasurer};

/// A vector drawing surface with a transform stack.
///
/// Device coordinates are in points with y growing upward.
pub trait Canvas: TextMeasurer {
    /// Sets the color used by subsequent strokes, fills and text.
    fn set_color(&self, color: Color);

    /// Sets the width of subsequent strokes.
    fn set_line_width(&self, width: f64);

    /// Sets the dash pattern of subsequent strokes.
    ///
    /// An empty pattern means a solid line.
    fn set_line_dash(&self, dashes: &[f64], offset: f64);

    /// Strokes a path with the current color, width and dash pattern.
    fn stroke(&self, path: &BezPath);

    /// Fills a path with the current color.
    fn fill(&self, path: &BezPath);

    /// Draws a single line of text with its baseline starting at `(x, y)`.
    fn fill_text(&self, font: &Font, x: f64, y: f64, text: &str);

    /// Saves the current transform (and graphics state).
    fn push(&self);

    /// Restores the transform saved by the matching [`Canvas::push`].
    fn pop(&self);

    /// Rotates the coordinate system counter-clockwise by `radians`.
    fn rotate(&self, radians: f64);
}

/// A drawing command captured by [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    /// [`Canvas::set_color`].
    SetColor(Color),
    /// [`Canvas::set_line_width`].
    SetLineWidth(f64),
    /// [`Canvas::set_line_dash`].
    SetLineDash {
        /// Dash lengths.
        dashes: Vec<f64>,
        /// Offset into the pattern.
        offset: f64,
    },
    /// [`Canvas::stroke`].
    Stroke(BezPath),
    /// [`Canvas::fill`].
    Fill(BezPath),
    /// [`Canvas::fill_text`].
    FillText {
        /// Font size of the text.
        font_size: f64,
        /// Baseline start x.
        x: f64,
        /// Baseline y.
        y: f64,
        /// The text.
        text: String,
    },
    /// [`Canvas::push`].
    Push,
    /// [`Canvas::pop`].
    Pop,
    /// [`Canvas::rotate`].
    Rotate(f64),
}

/// A canvas that records every command it receives.
///
/// Text is measured with the wrapped measurer, [`HeuristicTextMeasurer`] by
/// default. Useful for tests and for inspecting what a layout draws.
#[derive(Debug, Default)]
pub struct RecordingCanvas<M = HeuristicTextMeasurer> {
    measurer: M,
    ops: RefCell<Vec<CanvasOp>>,
}

impl RecordingCanvas {
    /// Creates an empty recording canvas using the heuristic measurer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: TextMeasurer> RecordingCanvas<M> {
    /// Creates an empty recording canvas that measures text with `measurer`.
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            ops: RefCell::new(Vec::new()),
        }
    }

    /// Returns a copy of the commands recorded so far.
    pub fn ops(&self) -> Vec<CanvasOp> {
        self.ops.borrow().clone()
    }

    /// Removes and returns the commands recorded so far.
    pub fn take_ops(&self) -> Vec<CanvasOp> {
        core::mem::take(&mut *self.ops.borrow_mut())
    }

    /// Returns the paths passed to [`Canvas::stroke`], in order.
    pub fn strokes(&self) -> Vec<BezPath> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Stroke(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns the `(x, y, text)` of every [`Canvas::fill_text`] call, in order.
    pub fn texts(&self) -> Vec<(f64, f64, String)> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                CanvasOp::FillText { x, y, text, .. } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }

    fn record(&self, op: CanvasOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingCanvas<M> {
    fn width(&self, font: &Font, text: &str) -> f64 {
        self.measurer.width(font, text)
    }

    fn extents(&self, font: &Font) -> FontExtents {
        self.measurer.extents(font)
    }
}

impl<M: TextMeasurer> Canvas for RecordingCanvas<M> {
    fn set_color(&self, color: Color) {
        self.record(CanvasOp::SetColor(color));
    }

    fn set_line_width(&self, width: f64) {
        self.record(CanvasOp::SetLineWidth(width));
    }

    fn set_line_dash(&self, dashes: &[f64], offset: f64) {
        self.record(CanvasOp::SetLineDash {
            dashes: dashes.to_vec(),
            offset,
        });
    }

    fn stroke(&self, path: &BezPath) {
        self.record(CanvasOp::Stroke(path.clone()));
    }

    fn fill(&self, path: &BezPath) {
        self.record(CanvasOp::Fill(path.clone()));
    }

    fn fill_text(&self, font: &Font, x: f64, y: f64, text: &str) {
        self.record(CanvasOp::FillText {
            font_size: font.size(),
            x,
            y,
            text: text.into(),
        });
    }

    fn push(&self) {
        self.record(CanvasOp::Push);
    }

    fn pop(&self) {
        self.record(CanvasOp::Pop);
    }

    fn rotate(&self, radians: f64) {
        self.record(CanvasOp::Rotate(radians));
    }
}
