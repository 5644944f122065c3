use crate::model::validation::{AgreementMetrics, ValidationRow};
use crate::stats::{mean, min_max, std_sample};

pub const LOA_Z: f64 = 1.96;

pub fn run_stage4(rows: &[ValidationRow]) -> AgreementMetrics {
    let diffs = rows.iter().map(|r| r.diff_score).collect::<Vec<_>>();
    let bias = mean(&diffs);
    let sd = std_sample(&diffs);
    let (diff_min, diff_max) = min_max(&diffs).unwrap_or((bias, bias));

    AgreementMetrics {
        n: diffs.len(),
        bias,
        sd,
        upper_loa: bias + LOA_Z * sd,
        lower_loa: bias - LOA_Z * sd,
        diff_min,
        diff_max,
    }
}

impl AgreementMetrics {
    pub fn bias_label(&self) -> String {
        format!("Mean Bias ({:+.2})", self.bias)
    }

    pub fn outside_limits<'a>(&self, rows: &'a [ValidationRow]) -> Vec<&'a ValidationRow> {
        rows.iter()
            .filter(|r| r.diff_score > self.upper_loa || r.diff_score < self.lower_loa)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_agreement.rs"]
mod tests;
