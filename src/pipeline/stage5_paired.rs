use crate::model::domains::Domain;
use crate::model::scales::to_likert;
use crate::model::validation::PairedRow;
use crate::pipeline::stage1_reshape::Stage1Output;
use crate::pipeline::stage2_human::Stage2Output;

pub const HUMAN_MODEL_ALIASES: [(&str, &str); 1] = [("DeepSeek", "DeepSeek V3.2")];

pub const PAIRED_COLUMNS: [&str; 4] = ["LLM", "Domain", "MELMA_1_5", "Human_1_5"];

#[derive(Debug)]
pub struct Stage5Output {
    pub rows: Vec<PairedRow>,
}

pub fn canonical_model(name: &'static str) -> &'static str {
    HUMAN_MODEL_ALIASES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

/// Inner join of automated and human means on (model, domain). Rows come out
/// domain-major with models sorted by name within each domain, the order a
/// grouped-then-melted table keeps through the join.
pub fn run_stage5(stage1: &Stage1Output, stage2: &Stage2Output) -> Stage5Output {
    let mut models = stage1.models.clone();
    models.sort_unstable();

    let mut rows = Vec::new();
    for domain in Domain::ALL {
        for &model in &models {
            let Some(melma_mean) = stage1.model_domain_mean(model, domain) else {
                continue;
            };
            let human = stage2
                .scores
                .iter()
                .find(|s| s.domain == domain && canonical_model(s.model) == model);
            let Some(human) = human else {
                tracing::debug!("no human ratings for {model} / {domain}; dropped from pairing");
                continue;
            };
            rows.push(PairedRow {
                model,
                domain,
                melma_1_5: to_likert(melma_mean),
                human_1_5: human.mean,
            });
        }
    }
    Stage5Output { rows }
}

impl Stage5Output {
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), PAIRED_COLUMNS.len())
    }

    pub fn models(&self) -> Vec<&'static str> {
        let mut models: Vec<&'static str> = Vec::new();
        for row in &self.rows {
            if !models.contains(&row.model) {
                models.push(row.model);
            }
        }
        models
    }

    pub fn for_model(&self, model: &str) -> Vec<&PairedRow> {
        let mut rows = self
            .rows
            .iter()
            .filter(|r| r.model == model)
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| r.domain);
        rows
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_paired.rs"]
mod tests;
