// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample plot with `plotframe` and writes it as SVG.
//!
//! Usage: `plotframe_demo [OUTPUT]` (default `plot.svg`). Set `RUST_LOG=debug`
//! to see the layout decisions.

mod svg;

use anyhow::Context as _;
use kurbo::Point;
use peniko::color::palette::css;
use plotframe::{
    DrawArea, GlyphShape, GlyphStyle, Line, LineStyle, Plot, Scatter, Tick, constant_ticks,
};
use plotframe_text::TextMeasurer;

/// US letter, landscape, in points.
const PAGE_WIDTH: f64 = 792.0;
const PAGE_HEIGHT: f64 = 612.0;
const MARGIN: f64 = 36.0;

fn main() -> anyhow::Result<()> {
    init_logging();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("plot.svg"));

    let measurer = demo_measurer();
    let canvas = svg::SvgCanvas::new(&*measurer, PAGE_WIDTH, PAGE_HEIGHT);
    let page = DrawArea::new(&canvas, PAGE_WIDTH, PAGE_HEIGHT).crop(
        MARGIN,
        MARGIN,
        -MARGIN,
        -MARGIN,
    );

    let mut plot = Plot::new()?.with_title("Damped oscillation");
    plot.x = plot
        .x
        .with_range(0.0, 4.0 * std::f64::consts::PI)
        .with_label("t (s)")
        .with_marker(constant_ticks(vec![
            Tick::major(0.0, "0"),
            Tick::minor(std::f64::consts::PI),
            Tick::major(2.0 * std::f64::consts::PI, "2π"),
            Tick::minor(3.0 * std::f64::consts::PI),
            Tick::major(4.0 * std::f64::consts::PI, "4π"),
        ]));
    plot.y = plot.y.with_range(-1.0, 1.0).with_label("amplitude");

    let curve: Vec<Point> = (0..=400)
        .map(|i| {
            let t = f64::from(i) * 4.0 * std::f64::consts::PI / 400.0;
            Point::new(t, 1.3 * (-t / 6.0).exp() * t.cos())
        })
        .collect();
    let line = Line::new(curve).with_style(LineStyle::solid(css::STEEL_BLUE, 1.5));

    let peaks = Scatter::new(
        (0..=4)
            .map(|k| {
                let t = f64::from(k) * std::f64::consts::PI;
                Point::new(t, 1.3 * (-t / 6.0).exp() * t.cos())
            })
            .filter(|p| p.y.abs() <= 1.0)
            .collect::<Vec<_>>(),
        GlyphStyle::new(css::CRIMSON, GlyphShape::Ring, 4.0)?,
    );
    let labels = Scatter::new(
        vec![Point::new(std::f64::consts::PI / 2.0, 0.0)],
        GlyphStyle::new(css::DARK_SLATE_GRAY, GlyphShape::character('Z')?, 6.0)?,
    );

    let mut glyphs = peaks.glyph_boxes(&plot);
    glyphs.extend(labels.glyph_boxes(&plot));
    let data = plot.draw(&page, &glyphs)?;
    line.draw(&plot, &data);
    peaks.draw(&plot, &data);
    labels.draw(&plot, &data);

    std::fs::write(&path, canvas.to_svg_string()).with_context(|| format!("write {path}"))?;
    tracing::info!(%path, "wrote plot");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(plotframe_text_parley::ParleyTextMeasurer::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(plotframe_text::HeuristicTextMeasurer)
    }
}
