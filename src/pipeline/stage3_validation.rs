use crate::model::domains::Domain;
use crate::model::scales::to_likert;
use crate::model::validation::ValidationRow;
use crate::pipeline::stage1_reshape::Stage1Output;
use crate::pipeline::stage2_human::Stage2Output;
use crate::stats::{mean, zscores};

#[derive(Debug)]
pub struct Stage3Output {
    pub rows: Vec<ValidationRow>,
}

pub fn run_stage3(stage1: &Stage1Output, stage2: &Stage2Output) -> Stage3Output {
    let mut melma = Vec::with_capacity(Domain::ALL.len());
    let mut human = Vec::with_capacity(Domain::ALL.len());
    for domain in Domain::ALL {
        melma.push(to_likert(mean(&stage1.domain_scores(domain))));
        human.push(stage2.domain_mean_across_models(domain));
    }

    let melma_z = zscores(&melma);
    let human_z = zscores(&human);

    let rows = Domain::ALL
        .iter()
        .enumerate()
        .map(|(i, &domain)| ValidationRow {
            domain,
            melma: melma[i],
            human: human[i],
            melma_z: melma_z[i],
            human_z: human_z[i],
            mean_score: (melma[i] + human[i]) / 2.0,
            diff_score: human[i] - melma[i],
        })
        .collect();

    Stage3Output { rows }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_validation.rs"]
mod tests;
