// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text measurement adapter.
//!
//! This crate implements [`plotframe_text::TextMeasurer`] using Parley, so axis
//! layout can use shaping-aware widths and real font extents.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight};
use plotframe_text::{Font, FontExtents, FontFamily, FontStyle, TextMeasurer};

/// Text used to probe the vertical metrics of a font.
const EXTENTS_PROBE: &str = "Mg";

/// A [`TextMeasurer`] backed by Parley.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer").finish_non_exhaustive()
    }
}

/// Single-line metrics, in logical units.
#[derive(Clone, Copy, Debug, Default)]
struct LineMetrics {
    advance: f64,
    ascent: f64,
    descent: f64,
    leading: f64,
}

impl ParleyTextMeasurer {
    /// Creates a new Parley-backed text measurer using the system font
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
        }
    }

    fn parley_font_stack(family: &FontFamily) -> FontStack<'_> {
        let family = match family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }

    fn parley_font_style(style: FontStyle) -> ParleyFontStyle {
        match style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        }
    }

    fn font_size_f32(font_size: f64) -> f32 {
        if !font_size.is_finite() {
            return 0.0;
        }
        let font_size = font_size.max(0.0);
        if font_size >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                font_size as f32
            }
        }
    }

    fn line_metrics(&self, font: &Font, text: &str) -> LineMetrics {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return LineMetrics::default();
        }

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(Self::font_size_f32(font.size())));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            font.family(),
        )));
        builder.push_default(StyleProperty::FontStyle(Self::parley_font_style(
            font.style(),
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(
            f32::from(font.weight().0),
        )));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(line) = layout.lines().next() else {
            return LineMetrics::default();
        };

        let m = line.metrics();
        LineMetrics {
            advance: f64::from(m.advance),
            ascent: f64::from(m.ascent),
            descent: f64::from(m.descent),
            leading: f64::from(m.leading),
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn width(&self, font: &Font, text: &str) -> f64 {
        self.line_metrics(font, text).advance
    }

    fn extents(&self, font: &Font) -> FontExtents {
        let m = self.line_metrics(font, EXTENTS_PROBE);
        FontExtents {
            ascent: m.ascent,
            descent: m.descent,
            leading: m.leading,
        }
    }
}
