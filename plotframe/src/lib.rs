// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout geometry for two-dimensional plots.
//!
//! This crate places the pieces of a plot on a page:
//! - A [`DrawArea`] maps the unit interval of each axis onto a rectangle of a
//!   shared [`Canvas`], and derives sub-areas by cropping and by squishing.
//! - **Squish** ([`DrawArea::squish_x`], [`DrawArea::squish_y`]) shrinks an
//!   area just enough that glyphs of a known size, anchored at normalized
//!   positions, are drawn entirely inside the parent area.
//! - [`clip_polyline`] clips open polylines to a rectangle before stroking.
//! - [`Axis`] and [`Plot`] measure and draw axes, ticks and titles, and hand
//!   back the data area.
//!
//! Device space is in points with y growing upward. Rasterization and font
//! shaping are out of scope: a backend implements [`Canvas`], and text is
//! measured through [`TextMeasurer`].

#![no_std]

extern crate alloc;

mod area;
mod axis;
mod canvas;
mod clip;
mod error;
mod geom;
mod glyph;
mod plot;
mod series;
mod style;
mod tick;

pub use area::DrawArea;
pub use axis::{Axis, AxisLabel, AxisOrient, TickStyle};
pub use canvas::{Canvas, CanvasOp, RecordingCanvas};
pub use clip::{SLOP, clip_polyline, intersect};
pub use error::Error;
pub use geom::Rect;
pub use glyph::{GlyphBox, GlyphShape, GlyphStyle};
pub use plot::Plot;
pub use series::{Line, Scatter};
pub use style::{LineStyle, TextStyle, line_count};
pub use tick::{Tick, TickMarker, constant_ticks, default_ticks, format_value};

pub use kurbo::{Point, Vec2};
pub use peniko::Color;
pub use plotframe_text::{
    Font, FontError, FontExtents, FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer,
    TextMeasurer,
};
