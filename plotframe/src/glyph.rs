// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point glyphs and their footprints.

use kurbo::Point;
use peniko::Color;
use plotframe_text::Font;

use crate::Error;
use crate::geom::Rect;

/// The shape of a glyph drawn at a data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphShape {
    /// A filled circle.
    Circle,
    /// An outlined circle.
    Ring,
    /// An uppercase ASCII letter (`'A'..='Z'`).
    Character(char),
}

impl GlyphShape {
    /// Code of [`GlyphShape::Circle`] in the numeric encoding.
    pub const CIRCLE_CODE: u8 = 0;
    /// Code of [`GlyphShape::Ring`] in the numeric encoding.
    pub const RING_CODE: u8 = 1;

    /// A letter glyph. Only uppercase ASCII letters are accepted.
    pub fn character(c: char) -> Result<Self, Error> {
        if c.is_ascii_uppercase() {
            Ok(Self::Character(c))
        } else {
            Err(Error::InvalidGlyphShape(u32::from(c)))
        }
    }
}

impl TryFrom<u8> for GlyphShape {
    type Error = Error;

    /// Decodes the compact numeric encoding: `0` is a circle, `1` a ring and
    /// `b'A'..=b'Z'` the corresponding letter.
    fn try_from(code: u8) -> Result<Self, Error> {
        match code {
            Self::CIRCLE_CODE => Ok(Self::Circle),
            Self::RING_CODE => Ok(Self::Ring),
            _ => Self::character(char::from(code)),
        }
    }
}

/// A glyph shape with everything needed to draw it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ResolvedGlyph {
    Circle,
    Ring,
    Letter(char, Font),
}

/// The look of a glyph drawn at a data point.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphStyle {
    color: Color,
    glyph: ResolvedGlyph,
    radius: f64,
}

impl GlyphStyle {
    /// Creates a glyph style, resolving the letter font for
    /// [`GlyphShape::Character`] up front.
    pub fn new(color: Color, shape: GlyphShape, radius: f64) -> Result<Self, Error> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidGlyphRadius(radius));
        }
        let glyph = match shape {
            GlyphShape::Circle => ResolvedGlyph::Circle,
            GlyphShape::Ring => ResolvedGlyph::Ring,
            GlyphShape::Character(c) => ResolvedGlyph::Letter(c, Font::sans_serif(2.0 * radius)?),
        };
        Ok(Self {
            color,
            glyph,
            radius,
        })
    }

    /// Returns this style with a different color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The glyph color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The glyph shape.
    pub fn shape(&self) -> GlyphShape {
        match self.glyph {
            ResolvedGlyph::Circle => GlyphShape::Circle,
            ResolvedGlyph::Ring => GlyphShape::Ring,
            ResolvedGlyph::Letter(c, _) => GlyphShape::Character(c),
        }
    }

    /// The glyph radius in points.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The font letters are drawn with, if the shape is a letter.
    pub fn letter_font(&self) -> Option<&Font> {
        match &self.glyph {
            ResolvedGlyph::Letter(_, font) => Some(font),
            ResolvedGlyph::Circle | ResolvedGlyph::Ring => None,
        }
    }

    pub(crate) fn resolved(&self) -> &ResolvedGlyph {
        &self.glyph
    }

    /// The square the glyph occupies, relative to the point it is drawn at.
    pub fn footprint(&self) -> Rect {
        let r = self.radius;
        Rect::new((-r, -r), (2.0 * r, 2.0 * r))
    }
}

/// The location of a glyph and the footprint it draws around that location.
///
/// `x` and `y` are on the unit interval of their axis: 0 is the minimum side
/// of the draw area and 1 the maximum. `rect` is in device units, relative to
/// wherever the anchor ends up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphBox {
    /// Normalized horizontal anchor.
    pub x: f64,
    /// Normalized vertical anchor.
    pub y: f64,
    /// Offset of the glyph's minimum corner from the anchor, and its size.
    pub rect: Rect,
}

impl GlyphBox {
    /// Creates a glyph box at a normalized anchor.
    pub fn new(anchor: impl Into<Point>, rect: Rect) -> Self {
        let anchor = anchor.into();
        Self {
            x: anchor.x,
            y: anchor.y,
            rect,
        }
    }
}
