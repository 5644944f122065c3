use crate::input::InputBundle;
use crate::model::domains::Domain;
use crate::model::scores::LongScore;
use crate::stats::mean;

#[derive(Debug)]
pub struct Stage1Output {
    pub long: Vec<LongScore>,
    pub models: Vec<&'static str>,
}

/// Melts the wide automated table into one row per (model, case, domain),
/// domain-major like a column-wise melt.
pub fn run_stage1(bundle: &InputBundle) -> Stage1Output {
    let mut long = Vec::with_capacity(bundle.automated.len() * Domain::ALL.len());
    for domain in Domain::ALL {
        for case in &bundle.automated {
            long.push(LongScore {
                model: case.model,
                case: case.case,
                domain,
                score: case.scores[domain.index()],
            });
        }
    }

    Stage1Output {
        long,
        models: bundle.automated_models(),
    }
}

impl Stage1Output {
    pub fn domain_scores(&self, domain: Domain) -> Vec<f64> {
        self.long
            .iter()
            .filter(|r| r.domain == domain)
            .map(|r| r.score)
            .collect()
    }

    pub fn model_domain_scores(&self, model: &str, domain: Domain) -> Vec<&LongScore> {
        self.long
            .iter()
            .filter(|r| r.model == model && r.domain == domain)
            .collect()
    }

    pub fn model_domain_mean(&self, model: &str, domain: Domain) -> Option<f64> {
        let values = self
            .model_domain_scores(model, domain)
            .iter()
            .map(|r| r.score)
            .collect::<Vec<_>>();
        if values.is_empty() {
            None
        } else {
            Some(mean(&values))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_reshape.rs"]
mod tests;
