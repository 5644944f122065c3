use crate::input::InputBundle;
use crate::model::domains::Domain;
use crate::model::scores::HumanDomainScore;
use crate::stats::{mean, std_population};

#[derive(Debug)]
pub struct Stage2Output {
    pub scores: Vec<HumanDomainScore>,
    pub models: Vec<&'static str>,
}

pub fn run_stage2(bundle: &InputBundle) -> Stage2Output {
    let mut scores = Vec::with_capacity(bundle.human.len() * Domain::ALL.len());
    let mut models = Vec::with_capacity(bundle.human.len());
    for matrix in &bundle.human {
        models.push(matrix.model);
        for domain in Domain::ALL {
            let values = matrix.flatten(domain.question_range());
            scores.push(HumanDomainScore {
                model: matrix.model,
                domain,
                mean: mean(&values),
                std: std_population(&values),
            });
        }
    }
    Stage2Output { scores, models }
}

impl Stage2Output {
    pub fn get(&self, model: &str, domain: Domain) -> Option<&HumanDomainScore> {
        self.scores
            .iter()
            .find(|s| s.model == model && s.domain == domain)
    }

    pub fn domain_mean_across_models(&self, domain: Domain) -> f64 {
        let values = self
            .scores
            .iter()
            .filter(|s| s.domain == domain)
            .map(|s| s.mean)
            .collect::<Vec<_>>();
        mean(&values)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_human.rs"]
mod tests;
