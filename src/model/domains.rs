use std::ops::Range;

use serde::Serialize;

pub const N_DOMAINS: usize = 7;
pub const N_QUESTIONS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Domain {
    Accuracy,
    Reasoning,
    Safety,
    Linguistic,
    Understandability,
    Usefulness,
    Performance,
}

impl Domain {
    pub const ALL: [Domain; N_DOMAINS] = [
        Domain::Accuracy,
        Domain::Reasoning,
        Domain::Safety,
        Domain::Linguistic,
        Domain::Understandability,
        Domain::Usefulness,
        Domain::Performance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Domain::Accuracy => "Accuracy",
            Domain::Reasoning => "Reasoning",
            Domain::Safety => "Safety",
            Domain::Linguistic => "Linguistic",
            Domain::Understandability => "Understandability",
            Domain::Usefulness => "Usefulness",
            Domain::Performance => "Performance",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Questionnaire items (0-based, end-exclusive) rated by human evaluators
    /// for this domain.
    pub fn question_range(self) -> Range<usize> {
        match self {
            Domain::Accuracy => 0..6,
            Domain::Reasoning => 6..11,
            Domain::Safety => 11..15,
            Domain::Linguistic => 15..19,
            Domain::Understandability => 19..23,
            Domain::Usefulness => 23..27,
            Domain::Performance => 27..30,
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/domains.rs"]
mod tests;
