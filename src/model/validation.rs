use serde::Serialize;

use crate::model::domains::Domain;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationRow {
    pub domain: Domain,
    pub melma: f64,
    pub human: f64,
    pub melma_z: f64,
    pub human_z: f64,
    pub mean_score: f64,
    pub diff_score: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AgreementMetrics {
    pub n: usize,
    pub bias: f64,
    pub sd: f64,
    pub upper_loa: f64,
    pub lower_loa: f64,
    pub diff_min: f64,
    pub diff_max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairedRow {
    pub model: &'static str,
    pub domain: Domain,
    pub melma_1_5: f64,
    pub human_1_5: f64,
}
