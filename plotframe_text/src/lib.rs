// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font descriptors and text measurement hooks for plot layout.
//!
//! Axis layout needs to know how much room tick labels and titles take up
//! before anything is drawn. Shaping and rasterization live downstream, so
//! layout code depends on a tiny measurement interface instead:
//! - [`Font`] describes a resolved font (family, size, weight, style),
//! - [`TextMeasurer`] returns advance widths and vertical [`FontExtents`],
//! - [`HeuristicTextMeasurer`] is a dependency-free fallback.
//!
//! Fonts are validated once, when they are constructed. Drawing code can then
//! assume every [`Font`] it is handed is usable.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// Errors returned when resolving a [`Font`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FontError {
    /// The font size is not a finite, strictly positive number.
    #[error("invalid font size: {0}")]
    InvalidSize(f64),
    /// A named font family was given an empty name.
    #[error("font family name is empty")]
    EmptyFamilyName,
}

/// A resolved font: family plus size and face selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f64,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// Resolves a font of the given family and size (in points).
    ///
    /// Fails if `size` is not finite and positive, or if a named family has an
    /// empty name.
    pub fn new(family: FontFamily, size: f64) -> Result<Self, FontError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }
        if let FontFamily::Named(name) = &family
            && name.trim().is_empty()
        {
            return Err(FontError::EmptyFamilyName);
        }
        Ok(Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        })
    }

    /// Resolves a generic sans-serif font of the given size.
    pub fn sans_serif(size: f64) -> Result<Self, FontError> {
        Self::new(FontFamily::SansSerif, size)
    }

    /// Returns a copy of this font at a different size.
    pub fn with_size(&self, size: f64) -> Result<Self, FontError> {
        let mut font = Self::new(self.family.clone(), size)?;
        font.weight = self.weight;
        font.style = self.style;
        Ok(font)
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The font size in points (the em size).
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The font style.
    pub fn style(&self) -> FontStyle {
        self.style
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family.
    Serif,
    /// A generic sans-serif family.
    SansSerif,
    /// A generic monospace family.
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Liberation Serif"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family string for CSS/SVG-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Vertical metrics of a font.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontExtents {
    /// Distance from the baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of typical glyphs.
    ///
    /// This is a positive number for glyphs that hang below the baseline.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl FontExtents {
    /// Returns `ascent + descent + leading`, the distance between baselines.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A minimal text measurement interface used by layout code.
///
/// Implementations can be heuristic (fast, but inaccurate) or backed by a
/// shaping engine. `text` is always a single line; callers split on `\n`.
pub trait TextMeasurer {
    /// Returns the advance width of a single line of text.
    fn width(&self, font: &Font, text: &str) -> f64;

    /// Returns the vertical extents of the font.
    fn extents(&self, font: &Font) -> FontExtents;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn width(&self, font: &Font, text: &str) -> f64 {
        (**self).width(font, text)
    }

    fn extents(&self, font: &Font) -> FontExtents {
        (**self).extents(font)
    }
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn width(&self, font: &Font, text: &str) -> f64 {
        0.6 * font.size() * text.chars().count() as f64
    }

    fn extents(&self, font: &Font) -> FontExtents {
        FontExtents {
            ascent: 0.8 * font.size(),
            descent: 0.2 * font.size(),
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn font_rejects_non_positive_and_non_finite_sizes() {
        assert_eq!(Font::sans_serif(0.0), Err(FontError::InvalidSize(0.0)));
        assert_eq!(Font::sans_serif(-3.0), Err(FontError::InvalidSize(-3.0)));
        assert!(matches!(
            Font::sans_serif(f64::NAN),
            Err(FontError::InvalidSize(_))
        ));
        assert!(Font::sans_serif(f64::INFINITY).is_err());
        assert!(Font::sans_serif(10.0).is_ok());
    }

    #[test]
    fn font_rejects_blank_family_name() {
        let err = Font::new(FontFamily::Named(Arc::from("  ")), 12.0);
        assert_eq!(err, Err(FontError::EmptyFamilyName));
        let ok = Font::new(FontFamily::Named(Arc::from("Inter")), 12.0).unwrap();
        assert_eq!(ok.family().as_css_family(), "Inter");
    }

    #[test]
    fn with_size_keeps_face() {
        let font = Font::sans_serif(10.0)
            .unwrap()
            .with_weight(FontWeight::BOLD)
            .with_style(FontStyle::Italic);
        let big = font.with_size(20.0).unwrap();
        assert_eq!(big.size(), 20.0);
        assert_eq!(big.weight(), FontWeight::BOLD);
        assert_eq!(big.style(), FontStyle::Italic);
        assert!(font.with_size(0.0).is_err());
    }

    #[test]
    fn heuristic_measurer_scales_with_size_and_length() {
        let m = HeuristicTextMeasurer;
        let font = Font::sans_serif(10.0).unwrap();
        assert!((m.width(&font, "abcd") - 24.0).abs() < 1e-9);
        assert_eq!(m.width(&font, ""), 0.0);
        let e = m.extents(&font);
        assert!((e.ascent - 8.0).abs() < 1e-9);
        assert!((e.descent - 2.0).abs() < 1e-9);
        assert!((e.line_height() - 10.0).abs() < 1e-9);
    }
}
