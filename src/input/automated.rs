use crate::model::domains::N_DOMAINS;

#[derive(Debug, Clone, PartialEq)]
pub struct AutomatedCase {
    pub model: &'static str,
    pub case: u32,
    pub scores: [f64; N_DOMAINS],
}

// Accuracy, Reasoning, Safety, Linguistic, Understandability, Usefulness, Performance
const AUTOMATED_TABLE: [(&str, u32, [u8; N_DOMAINS]); 15] = [
    ("GPT 5.2", 1, [72, 77, 70, 80, 60, 75, 93]),
    ("GPT 5.2", 2, [72, 77, 60, 85, 60, 75, 100]),
    ("GPT 5.2", 3, [72, 63, 65, 85, 60, 75, 93]),
    ("GPT 5.2", 4, [72, 73, 60, 80, 65, 80, 90]),
    ("GPT 5.2", 5, [64, 80, 65, 80, 60, 85, 93]),
    ("Gemini 3", 1, [72, 83, 80, 80, 60, 75, 80]),
    ("Gemini 3", 2, [64, 73, 70, 70, 65, 75, 80]),
    ("Gemini 3", 3, [72, 77, 75, 80, 55, 85, 80]),
    ("Gemini 3", 4, [72, 70, 70, 80, 65, 75, 80]),
    ("Gemini 3", 5, [64, 73, 60, 75, 60, 80, 67]),
    ("DeepSeek V3.2", 1, [72, 80, 80, 80, 65, 75, 80]),
    ("DeepSeek V3.2", 2, [68, 70, 60, 80, 60, 75, 80]),
    ("DeepSeek V3.2", 3, [68, 77, 70, 80, 60, 70, 80]),
    ("DeepSeek V3.2", 4, [72, 70, 65, 80, 65, 90, 80]),
    ("DeepSeek V3.2", 5, [76, 83, 70, 80, 60, 80, 93]),
];

pub fn automated_cases() -> Vec<AutomatedCase> {
    AUTOMATED_TABLE
        .iter()
        .map(|&(model, case, raw)| AutomatedCase {
            model,
            case,
            scores: raw.map(f64::from),
        })
        .collect()
}
