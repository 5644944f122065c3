use crate::model::domains::N_QUESTIONS;

pub const EVALUATORS: usize = 5;

pub const HUMAN_MODELS: [&str; 3] = ["GPT 5.2", "Gemini 3", "DeepSeek"];

#[derive(Debug, Clone, PartialEq)]
pub struct HumanMatrix {
    pub model: &'static str,
    pub ratings: Vec<[u8; EVALUATORS]>,
}

impl HumanMatrix {
    pub fn flatten(&self, questions: std::ops::Range<usize>) -> Vec<f64> {
        let mut out = Vec::with_capacity(questions.len() * EVALUATORS);
        for row in self.ratings.get(questions).unwrap_or(&[]) {
            out.extend(row.iter().map(|&v| f64::from(v)));
        }
        out
    }
}

const GPT_5_2: [[u8; EVALUATORS]; N_QUESTIONS] = [
    [5, 4, 4, 4, 5],
    [5, 4, 4, 3, 4],
    [5, 5, 5, 5, 5],
    [4, 4, 3, 4, 3],
    [5, 5, 5, 4, 5],
    [5, 4, 3, 5, 3],
    [5, 5, 5, 5, 5],
    [5, 4, 4, 4, 3],
    [4, 5, 4, 4, 4],
    [4, 4, 4, 4, 4],
    [5, 5, 5, 4, 5],
    [5, 5, 4, 5, 3],
    [4, 4, 4, 4, 3],
    [4, 4, 1, 4, 4],
    [5, 5, 5, 5, 3],
    [4, 4, 4, 4, 4],
    [5, 5, 5, 4, 5],
    [5, 5, 5, 5, 5],
    [4, 5, 4, 4, 3],
    [5, 4, 1, 4, 5],
    [5, 5, 5, 1, 5],
    [3, 4, 3, 3, 3],
    [4, 4, 4, 4, 5],
    [5, 5, 5, 5, 5],
    [4, 4, 4, 4, 4],
    [4, 4, 4, 4, 4],
    [3, 4, 3, 4, 3],
    [5, 5, 5, 4, 5],
    [4, 4, 4, 4, 4],
    [5, 5, 5, 4, 4],
];

const GEMINI_3: [[u8; EVALUATORS]; N_QUESTIONS] = [
    [5, 4, 4, 5, 4],
    [5, 5, 5, 5, 5],
    [5, 5, 4, 5, 5],
    [5, 4, 5, 5, 3],
    [5, 5, 5, 4, 5],
    [5, 5, 5, 5, 3],
    [5, 5, 2, 4, 5],
    [5, 5, 5, 5, 5],
    [5, 5, 5, 4, 5],
    [5, 5, 4, 5, 5],
    [5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5],
    [3, 5, 4, 5, 5],
    [5, 5, 5, 2, 5],
    [5, 5, 3, 5, 5],
    [5, 5, 5, 5, 5],
    [5, 5, 4, 5, 4],
    [5, 5, 4, 5, 5],
    [5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5],
    [5, 4, 5, 5, 5],
    [5, 5, 5, 5, 5],
    [4, 4, 5, 3, 5],
    [5, 5, 5, 5, 4],
    [5, 5, 5, 5, 5],
    [5, 4, 4, 5, 5],
    [5, 5, 5, 4, 5],
    [5, 5, 4, 5, 5],
    [5, 4, 3, 5, 5],
    [5, 4, 5, 5, 3],
];

const DEEPSEEK: [[u8; EVALUATORS]; N_QUESTIONS] = [
    [5, 4, 2, 5, 5],
    [5, 5, 1, 5, 5],
    [5, 5, 5, 5, 5],
    [5, 4, 5, 5, 2],
    [5, 5, 5, 5, 5],
    [5, 2, 5, 5, 5],
    [4, 4, 4, 4, 4],
    [5, 4, 5, 5, 3],
    [5, 5, 5, 2, 5],
    [4, 4, 4, 4, 4],
    [5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5],
    [4, 4, 4, 4, 4],
    [5, 5, 5, 5, 3],
    [5, 5, 5, 5, 5],
    [5, 5, 5, 5, 5],
    [5, 2, 5, 5, 5],
    [5, 5, 5, 5, 5],
    [5, 4, 5, 5, 5],
    [5, 5, 5, 5, 5],
    [5, 5, 5, 2, 5],
    [4, 4, 4, 4, 5],
    [5, 5, 5, 5, 5],
    [4, 5, 4, 5, 5],
    [4, 3, 4, 4, 4],
    [4, 4, 4, 4, 5],
    [5, 3, 5, 5, 5],
    [4, 4, 4, 4, 4],
    [5, 4, 5, 5, 5],
];

pub fn human_matrices() -> Vec<HumanMatrix> {
    [GPT_5_2, GEMINI_3, DEEPSEEK]
        .iter()
        .zip(HUMAN_MODELS)
        .map(|(ratings, model)| HumanMatrix {
            model,
            ratings: ratings.to_vec(),
        })
        .collect()
}
