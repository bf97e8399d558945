// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for invalid plot configuration.

use plotframe_text::FontError;

use crate::axis::AxisOrient;

/// An invalid configuration detected while setting up styles or a plot.
///
/// These errors are raised before anything is drawn.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A glyph shape code that is neither a built-in shape nor an
    /// uppercase ASCII letter.
    #[error("invalid glyph shape: {0}")]
    InvalidGlyphShape(u32),
    /// A glyph radius that is negative or not finite.
    #[error("invalid glyph radius: {0}")]
    InvalidGlyphRadius(f64),
    /// An axis whose range is empty, inverted, or not finite.
    #[error("invalid axis range: min {min} must be less than max {max}")]
    InvalidAxisRange {
        /// The axis minimum.
        min: f64,
        /// The axis maximum.
        max: f64,
    },
    /// The glyphs along an axis cannot be fitted into the plot: one glyph
    /// overhangs both ends, so no scale places it inside.
    #[error("glyphs cannot be fitted along the {orient:?} axis")]
    DegenerateLayout {
        /// The axis whose layout failed.
        orient: AxisOrient,
    },
    /// A font could not be resolved.
    #[error(transparent)]
    Font(#[from] FontError),
}
