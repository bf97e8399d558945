// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick marks and tick generators.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use plotframe_text::TextMeasurer;

use crate::style::TextStyle;

/// Produces the ticks for an axis spanning `(min, max)`.
pub type TickMarker = Arc<dyn Fn(f64, f64) -> Vec<Tick>>;

/// A single tick mark on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// The data value the tick marks.
    pub value: f64,
    /// The label drawn at the tick. Empty for a minor tick.
    pub label: String,
}

impl Tick {
    /// A labeled (major) tick.
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// An unlabeled (minor) tick.
    pub fn minor(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
        }
    }

    /// Returns `true` if this tick has no label.
    pub fn is_minor(&self) -> bool {
        self.label.is_empty()
    }

    /// Offset from the start of a tick mark of length `len`: minor ticks
    /// are drawn at half length.
    pub fn length_offset(&self, len: f64) -> f64 {
        if self.is_minor() { len / 2.0 } else { 0.0 }
    }
}

/// The default tick generator: five evenly spaced ticks, with labels on the
/// ends and the middle.
pub fn default_ticks(min: f64, max: f64) -> Vec<Tick> {
    let mid = min + (max - min) / 2.0;
    alloc::vec![
        Tick::major(min, format_value(min)),
        Tick::minor(min + (max - min) / 4.0),
        Tick::major(mid, format_value(mid)),
        Tick::minor(min + 3.0 * (max - min) / 4.0),
        Tick::major(max, format_value(max)),
    ]
}

/// A tick generator that ignores the axis range and always returns `ticks`.
pub fn constant_ticks(ticks: Vec<Tick>) -> TickMarker {
    Arc::new(move |_, _| ticks.clone())
}

/// The height of the tallest major tick label.
pub(crate) fn tick_label_height(sty: &TextStyle, m: &dyn TextMeasurer, ticks: &[Tick]) -> f64 {
    ticks
        .iter()
        .filter(|t| !t.is_minor())
        .map(|t| sty.height(m, &t.label))
        .fold(0.0, f64::max)
}

/// The width of the widest major tick label.
pub(crate) fn tick_label_width(sty: &TextStyle, m: &dyn TextMeasurer, ticks: &[Tick]) -> f64 {
    ticks
        .iter()
        .filter(|t| !t.is_minor())
        .map(|t| sty.width(m, &t.label))
        .fold(0.0, f64::max)
}

/// Formats a tick value compactly: shortest round-trip digits, switching to
/// exponent notation (`1e+06`, `2.5e-05`) for very large or small magnitudes.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        return String::from("NaN");
    }
    if v.is_infinite() {
        return String::from(if v > 0.0 { "+Inf" } else { "-Inf" });
    }
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{v}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if v != 0.0 && !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;
    use plotframe_text::{Font, HeuristicTextMeasurer};

    use super::*;

    #[test]
    fn empty_label_is_minor() {
        assert!(Tick::minor(1.0).is_minor());
        assert!(Tick::major(1.0, "").is_minor());
        assert!(!Tick::major(1.0, "1").is_minor());
        assert_eq!(Tick::minor(0.0).length_offset(8.0), 4.0);
        assert_eq!(Tick::major(0.0, "0").length_offset(8.0), 0.0);
    }

    #[test]
    fn default_ticks_label_ends_and_middle() {
        let ticks = default_ticks(0.0, 100.0);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, [0.0, 25.0, 50.0, 75.0, 100.0]);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "", "50", "", "100"]);
    }

    #[test]
    fn constant_ticks_ignore_range() {
        let marker = constant_ticks(alloc::vec![Tick::major(3.0, "three")]);
        assert_eq!(marker(0.0, 1.0), marker(-50.0, 50.0));
        assert_eq!(marker(0.0, 1.0)[0].label, "three");
    }

    #[test]
    fn values_format_like_printf_g() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.5), "-0.5");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(100000.0), "100000");
        assert_eq!(format_value(1e6), "1e+06");
        assert_eq!(format_value(1.5e21), "1.5e+21");
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(0.000025), "2.5e-05");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn label_extent_ignores_minor_ticks() {
        let m = HeuristicTextMeasurer;
        let sty = TextStyle::new(css::BLACK, Font::sans_serif(10.0).unwrap());
        let ticks = [
            Tick::major(0.0, "0"),
            Tick::minor(1.0),
            Tick::major(2.0, "200\n2"),
        ];
        assert!((tick_label_width(&sty, &m, &ticks) - 18.0).abs() < 1e-9);
        assert!((tick_label_height(&sty, &m, &ticks) - 18.0).abs() < 1e-9);
        assert_eq!(tick_label_width(&sty, &m, &[Tick::minor(0.0)]), 0.0);
    }
}
