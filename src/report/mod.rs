pub mod json;
pub mod text;

use std::path::PathBuf;

use serde::Serialize;

use crate::model::scores::HumanDomainScore;
use crate::model::validation::{AgreementMetrics, PairedRow, ValidationRow};
use crate::pipeline::stage2_human::Stage2Output;
use crate::pipeline::stage3_validation::Stage3Output;
use crate::pipeline::stage5_paired::Stage5Output;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub human_scores: Vec<HumanDomainScore>,
    pub validation: Vec<ValidationRow>,
    pub agreement: AgreementMetrics,
    pub paired: Vec<PairedRow>,
    pub paired_shape: (usize, usize),
    pub charts: Vec<String>,
}

pub fn build_summary(
    human: &Stage2Output,
    validation: &Stage3Output,
    agreement: &AgreementMetrics,
    paired: &Stage5Output,
    charts: &[PathBuf],
) -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        human_scores: human.scores.clone(),
        validation: validation.rows.clone(),
        agreement: agreement.clone(),
        paired: paired.rows.clone(),
        paired_shape: paired.shape(),
        charts: charts
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect(),
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
