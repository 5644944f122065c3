#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Scale {
    pub const AUTOMATED: Scale = Scale {
        name: "0-100",
        min: 0.0,
        max: 100.0,
    };

    pub const LIKERT: Scale = Scale {
        name: "1-5",
        min: 1.0,
        max: 5.0,
    };

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

pub const AUTOMATED_TO_LIKERT_DIVISOR: f64 = 20.0;

pub fn to_likert(score_0_100: f64) -> f64 {
    score_0_100 / AUTOMATED_TO_LIKERT_DIVISOR
}
