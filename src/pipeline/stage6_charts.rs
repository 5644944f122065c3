use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::model::validation::AgreementMetrics;
use crate::pipeline::stage1_reshape::Stage1Output;
use crate::pipeline::stage2_human::Stage2Output;
use crate::pipeline::stage3_validation::Stage3Output;
use crate::pipeline::stage5_paired::Stage5Output;
use crate::plot::categorical::{BarChartSpec, HumanMetric, render_box_strip, render_human_bars};
use crate::plot::validation::{
    render_bland_altman, render_paired_panels, render_source_bars, render_zscore_lines,
};
use crate::plot::{
    CHART_BLAND_ALTMAN, CHART_FILES, CHART_HUMAN_CONSISTENCY, CHART_HUMAN_SCORES,
    CHART_PAIRED_PANELS, CHART_RAW_COMPARISON, CHART_SOURCE_BARS, CHART_Z_SCORES, PlotResult,
    REDS, VIRIDIS,
};
use crate::stats::min_max;

pub const HIGH_DISAGREEMENT_STD: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct Stage6Input<'a> {
    pub reshaped: &'a Stage1Output,
    pub human: &'a Stage2Output,
    pub validation: &'a Stage3Output,
    pub agreement: &'a AgreementMetrics,
    pub paired: &'a Stage5Output,
}

pub fn write_charts(input: &Stage6Input<'_>, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    emit(out_dir, CHART_RAW_COMPARISON, &mut written, |path| {
        render_box_strip(path, input.reshaped)
    })?;

    emit(out_dir, CHART_HUMAN_SCORES, &mut written, |path| {
        render_human_bars(
            path,
            input.human,
            HumanMetric::Mean,
            &BarChartSpec {
                title: "Human Evaluator Results: Model Comparison",
                y_desc: "Average Human Score (1-5)",
                y_range: (3.0, 5.2),
                palette: &VIRIDIS,
                reference: None,
            },
        )
    })?;

    let std_top = consistency_ceiling(input.human);
    emit(out_dir, CHART_HUMAN_CONSISTENCY, &mut written, |path| {
        render_human_bars(
            path,
            input.human,
            HumanMetric::Std,
            &BarChartSpec {
                title: "Human Consistency: Disagreement Among Evaluator",
                y_desc: "Standard Deviation",
                y_range: (0.0, std_top),
                palette: &REDS,
                reference: Some((HIGH_DISAGREEMENT_STD, "High Disagreement")),
            },
        )
    })?;

    emit(out_dir, CHART_Z_SCORES, &mut written, |path| {
        render_zscore_lines(path, &input.validation.rows)
    })?;

    emit(out_dir, CHART_BLAND_ALTMAN, &mut written, |path| {
        render_bland_altman(path, &input.validation.rows, input.agreement)
    })?;

    emit(out_dir, CHART_SOURCE_BARS, &mut written, |path| {
        render_source_bars(path, &input.validation.rows)
    })?;

    emit(out_dir, CHART_PAIRED_PANELS, &mut written, |path| {
        render_paired_panels(path, input.paired)
    })?;

    debug_assert_eq!(written.len(), CHART_FILES.len());
    info!(charts = written.len(), dir = %out_dir.display(), "charts rendered");
    Ok(written)
}

fn emit<F>(out_dir: &Path, file: &str, written: &mut Vec<PathBuf>, render: F) -> Result<()>
where
    F: FnOnce(&Path) -> PlotResult,
{
    let path = out_dir.join(file);
    debug!(file, "rendering chart");
    render(&path).map_err(|e| AnalysisError::Chart {
        file: file.to_string(),
        message: e.to_string(),
    })?;
    println!("Saved: {}", file);
    written.push(path);
    Ok(())
}

pub fn consistency_ceiling(human: &Stage2Output) -> f64 {
    let stds = human.scores.iter().map(|s| s.std).collect::<Vec<_>>();
    let top = min_max(&stds).map(|(_, hi)| hi).unwrap_or(0.0);
    top.max(HIGH_DISAGREEMENT_STD) * 1.1
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_charts.rs"]
mod tests;
