use serde::Serialize;

use crate::model::domains::Domain;

#[derive(Debug, Clone, Serialize)]
pub struct LongScore {
    pub model: &'static str,
    pub case: u32,
    pub domain: Domain,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HumanDomainScore {
    pub model: &'static str,
    pub domain: Domain,
    pub mean: f64,
    pub std: f64,
}
