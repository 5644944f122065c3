pub mod categorical;
pub mod validation;

use std::error::Error;

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::model::domains::{Domain, N_DOMAINS};
use crate::stats::percentile_linear;

pub type PlotResult = Result<(), Box<dyn Error>>;

/// Categorical domain axis: domain `i` sits at x = i. Paired with
/// `x_labels(N_DOMAINS)` the mesh keys land exactly on the integers.
pub type DomainCoord = Cartesian2d<RangedCoordf64, RangedCoordf64>;

pub const CHART_RAW_COMPARISON: &str = "MELMA_W_Raw_Comparison.svg";
pub const CHART_HUMAN_SCORES: &str = "Human_Scores_Comparison.svg";
pub const CHART_HUMAN_CONSISTENCY: &str = "Human_Consistency_Comparison.svg";
pub const CHART_Z_SCORES: &str = "Validation_Z_Score_Analysis.svg";
pub const CHART_BLAND_ALTMAN: &str = "Validation_Bland_Altman_Analysis.svg";
pub const CHART_SOURCE_BARS: &str = "MELMA_vs_Humans_Validation.svg";
pub const CHART_PAIRED_PANELS: &str = "Fig6_Paired_ModelDomain_Bars.svg";

pub const CHART_FILES: [&str; 7] = [
    CHART_RAW_COMPARISON,
    CHART_HUMAN_SCORES,
    CHART_HUMAN_CONSISTENCY,
    CHART_Z_SCORES,
    CHART_BLAND_ALTMAN,
    CHART_SOURCE_BARS,
    CHART_PAIRED_PANELS,
];

pub const SET2: [RGBColor; 3] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
];
pub const VIRIDIS: [RGBColor; 3] = [
    RGBColor(72, 40, 120),
    RGBColor(38, 130, 142),
    RGBColor(110, 206, 88),
];
pub const REDS: [RGBColor; 3] = [
    RGBColor(252, 146, 114),
    RGBColor(239, 59, 44),
    RGBColor(165, 15, 21),
];
pub const AUTOMATED_COLOR: RGBColor = RGBColor(31, 119, 180);
pub const HUMAN_COLOR: RGBColor = RGBColor(255, 127, 14);
pub const MELMA_Z_COLOR: RGBColor = RGBColor(76, 114, 176);
pub const HUMAN_Z_COLOR: RGBColor = RGBColor(221, 132, 82);
pub const AGREEMENT_COLOR: RGBColor = RGBColor(128, 0, 128);

pub const GROUP_WIDTH: f64 = 0.8;
pub const SOURCE_BAR_WIDTH: f64 = 0.38;

pub fn title_font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Bold)
}

pub fn domain_axis() -> RangedCoordf64 {
    (-0.5f64..(N_DOMAINS as f64 - 0.5)).into()
}

pub fn domain_label(x: &f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    Domain::ALL
        .get(idx as usize)
        .map(|d| d.name().to_string())
        .unwrap_or_default()
}

pub fn group_offsets(n: usize, total_width: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = total_width / n as f64;
    (0..n)
        .map(|i| -total_width / 2.0 + step * (i as f64 + 0.5))
        .collect()
}

pub fn centered_range(min: f64, max: f64, factor: f64) -> (f64, f64) {
    let mid = (min + max) / 2.0;
    let spread = max - min;
    if !spread.is_finite() || spread.abs() < 1e-9 {
        return (mid - 0.5, mid + 0.5);
    }
    (mid - spread * factor, mid + spread * factor)
}

pub fn case_jitter(case: u32, n_cases: u32, width: f64) -> f64 {
    if n_cases <= 1 {
        return 0.0;
    }
    let pos = (case.saturating_sub(1)) as f64 / (n_cases - 1) as f64;
    (pos - 0.5) * width
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
}

pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    let q1 = percentile_linear(values, 0.25);
    let median = percentile_linear(values, 0.5);
    let q3 = percentile_linear(values, 0.75);
    let iqr = q3 - q1;
    let lo_fence = q1 - 1.5 * iqr;
    let hi_fence = q3 + 1.5 * iqr;
    let whisker_low = values
        .iter()
        .copied()
        .filter(|v| *v >= lo_fence)
        .fold(q1, f64::min);
    let whisker_high = values
        .iter()
        .copied()
        .filter(|v| *v <= hi_fence)
        .fold(q3, f64::max);
    Some(BoxStats {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
    })
}

pub fn legend_swatch(color: RGBColor) -> impl Fn((i32, i32)) -> Rectangle<(i32, i32)> {
    move |(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], color.filled())
}

pub fn legend_line(style: ShapeStyle) -> impl Fn((i32, i32)) -> PathElement<(i32, i32)> {
    move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style)
}

#[cfg(test)]
#[path = "../../tests/src_inline/plot/tests.rs"]
mod tests;
