// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG canvas for `plotframe_demo`.

use std::cell::RefCell;
use std::fmt::Write as _;

use kurbo::{Affine, BezPath};
use peniko::Color;
use peniko::color::palette::css;
use plotframe::Canvas;
use plotframe_text::{Font, FontExtents, FontStyle, TextMeasurer};

#[derive(Debug)]
struct SvgState {
    body: String,
    color: Color,
    line_width: f64,
    dashes: Vec<f64>,
    dash_offset: f64,
    transform: Affine,
    stack: Vec<Affine>,
}

/// A [`Canvas`] that accumulates SVG elements.
///
/// Device space has y growing upward; the page transform flips it into SVG's
/// y-down space.
#[derive(Debug)]
pub(crate) struct SvgCanvas<M> {
    measurer: M,
    width: f64,
    height: f64,
    state: RefCell<SvgState>,
}

impl<M: TextMeasurer> SvgCanvas<M> {
    pub(crate) fn new(measurer: M, width: f64, height: f64) -> Self {
        Self {
            measurer,
            width,
            height,
            state: RefCell::new(SvgState {
                body: String::new(),
                color: css::BLACK,
                line_width: 1.0,
                dashes: Vec::new(),
                dash_offset: 0.0,
                transform: Affine::FLIP_Y.then_translate((0.0, height).into()),
                stack: Vec::new(),
            }),
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let state = self.state.borrow();
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height
        );
        out.push_str(&state.body);
        out.push_str("</svg>\n");
        out
    }
}

impl<M: TextMeasurer> TextMeasurer for SvgCanvas<M> {
    fn width(&self, font: &Font, text: &str) -> f64 {
        self.measurer.width(font, text)
    }

    fn extents(&self, font: &Font) -> FontExtents {
        self.measurer.extents(font)
    }
}

impl<M: TextMeasurer> Canvas for SvgCanvas<M> {
    fn set_color(&self, color: Color) {
        self.state.borrow_mut().color = color;
    }

    fn set_line_width(&self, width: f64) {
        self.state.borrow_mut().line_width = width;
    }

    fn set_line_dash(&self, dashes: &[f64], offset: f64) {
        let mut state = self.state.borrow_mut();
        state.dashes = dashes.to_vec();
        state.dash_offset = offset;
    }

    fn stroke(&self, path: &BezPath) {
        let mut state = self.state.borrow_mut();
        let SvgState {
            body,
            color,
            line_width,
            dashes,
            dash_offset,
            transform,
            ..
        } = &mut *state;
        // Widths and dashes are in device units; the page transform is a
        // pure flip plus rotations, so they carry over unscaled.
        let d = (*transform * path.clone()).to_svg();
        let _ = write!(body, r#"<path d="{d}" fill="none""#);
        write_paint_attr(body, "stroke", *color);
        let _ = write!(body, r#" stroke-width="{line_width}""#);
        if !dashes.is_empty() {
            let list: Vec<String> = dashes.iter().map(ToString::to_string).collect();
            let _ = write!(
                body,
                r#" stroke-dasharray="{}" stroke-dashoffset="{dash_offset}""#,
                list.join(" ")
            );
        }
        body.push_str("/>\n");
    }

    fn fill(&self, path: &BezPath) {
        let mut state = self.state.borrow_mut();
        let d = (state.transform * path.clone()).to_svg();
        let color = state.color;
        let _ = write!(state.body, r#"<path d="{d}""#);
        write_paint_attr(&mut state.body, "fill", color);
        state.body.push_str("/>\n");
    }

    fn fill_text(&self, font: &Font, x: f64, y: f64, text: &str) {
        let mut state = self.state.borrow_mut();
        // SVG glyphs are drawn y-down: flip them back upright at the baseline.
        let m = (state.transform * Affine::translate((x, y)) * Affine::FLIP_Y).as_coeffs();
        let color = state.color;
        let style = match font.style() {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        };
        let _ = write!(
            state.body,
            r#"<text transform="matrix({} {} {} {} {} {})" font-family="{}" font-size="{}" font-weight="{}" font-style="{style}""#,
            m[0],
            m[1],
            m[2],
            m[3],
            m[4],
            m[5],
            escape_xml(font.family().as_css_family()),
            font.size(),
            font.weight().0,
        );
        write_paint_attr(&mut state.body, "fill", color);
        let _ = writeln!(state.body, ">{}</text>", escape_xml(text));
    }

    fn push(&self) {
        let mut state = self.state.borrow_mut();
        let t = state.transform;
        state.stack.push(t);
    }

    fn pop(&self) {
        let mut state = self.state.borrow_mut();
        match state.stack.pop() {
            Some(t) => state.transform = t,
            None => tracing::warn!("unbalanced pop on SVG canvas"),
        }
    }

    fn rotate(&self, radians: f64) {
        let mut state = self.state.borrow_mut();
        state.transform = state.transform * Affine::rotate(radians);
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
