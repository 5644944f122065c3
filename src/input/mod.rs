pub mod automated;
pub mod human;

use thiserror::Error;

use crate::model::domains::{Domain, N_QUESTIONS};
use crate::model::scales::Scale;
use automated::{AutomatedCase, automated_cases};
use human::{HumanMatrix, human_matrices};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{model} case {case}: {domain} score {value} outside the {scale} scale")]
    AutomatedOutOfScale {
        model: String,
        case: u32,
        domain: Domain,
        value: f64,
        scale: &'static str,
    },
    #[error("{model} Q{question} evaluator {evaluator}: rating {value} outside the {scale} scale")]
    HumanOutOfScale {
        model: String,
        question: usize,
        evaluator: usize,
        value: u8,
        scale: &'static str,
    },
    #[error("{model}: expected {expected} questionnaire rows, found {found}")]
    QuestionCount {
        model: String,
        expected: usize,
        found: usize,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
}

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub automated: Vec<AutomatedCase>,
    pub human: Vec<HumanMatrix>,
}

impl InputBundle {
    pub fn automated_models(&self) -> Vec<&'static str> {
        let mut models: Vec<&'static str> = Vec::new();
        for case in &self.automated {
            if !models.contains(&case.model) {
                models.push(case.model);
            }
        }
        models
    }
}

pub fn load_embedded() -> Result<InputBundle, InputError> {
    let bundle = InputBundle {
        automated: automated_cases(),
        human: human_matrices(),
    };
    validate_bundle(&bundle)?;
    Ok(bundle)
}

pub fn validate_bundle(bundle: &InputBundle) -> Result<(), InputError> {
    if bundle.automated.is_empty() {
        return Err(InputError::MissingInput("automated score table is empty".to_string()));
    }
    if bundle.human.is_empty() {
        return Err(InputError::MissingInput("human rating table is empty".to_string()));
    }

    for case in &bundle.automated {
        for domain in Domain::ALL {
            let value = case.scores[domain.index()];
            if !Scale::AUTOMATED.contains(value) {
                return Err(InputError::AutomatedOutOfScale {
                    model: case.model.to_string(),
                    case: case.case,
                    domain,
                    value,
                    scale: Scale::AUTOMATED.name,
                });
            }
        }
    }

    for matrix in &bundle.human {
        if matrix.ratings.len() != N_QUESTIONS {
            return Err(InputError::QuestionCount {
                model: matrix.model.to_string(),
                expected: N_QUESTIONS,
                found: matrix.ratings.len(),
            });
        }
        for (q, row) in matrix.ratings.iter().enumerate() {
            for (e, &value) in row.iter().enumerate() {
                if !Scale::LIKERT.contains(f64::from(value)) {
                    return Err(InputError::HumanOutOfScale {
                        model: matrix.model.to_string(),
                        question: q + 1,
                        evaluator: e + 1,
                        value,
                        scale: Scale::LIKERT.name,
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
