use super::*;
use crate::input::load_embedded;
use crate::model::domains::Domain;
use crate::pipeline::stage1_reshape::run_stage1;
use crate::pipeline::stage2_human::run_stage2;
use crate::pipeline::stage3_validation::run_stage3;

fn row(diff: f64) -> ValidationRow {
    ValidationRow {
        domain: Domain::Accuracy,
        melma: 3.0,
        human: 3.0 + diff,
        melma_z: 0.0,
        human_z: 0.0,
        mean_score: 3.0 + diff / 2.0,
        diff_score: diff,
    }
}

#[test]
fn test_embedded_bland_altman() {
    let bundle = load_embedded().unwrap();
    let stage3 = run_stage3(&run_stage1(&bundle), &run_stage2(&bundle));
    let m = run_stage4(&stage3.rows);

    assert_eq!(m.n, 7);
    assert!((m.bias - 0.8039682539682539).abs() < 1e-9);
    assert!((m.sd - 0.35178548524748027).abs() < 1e-9);
    assert!((m.upper_loa - 1.4934678050533152).abs() < 1e-9);
    assert!((m.lower_loa - 0.11446870288319255).abs() < 1e-9);
    assert!((m.diff_min - 0.2588888888888894).abs() < 1e-9);
    assert!((m.diff_max - 1.3333333333333326).abs() < 1e-9);
    assert_eq!(m.bias_label(), "Mean Bias (+0.80)");
    assert!(m.outside_limits(&stage3.rows).is_empty());
}

#[test]
fn test_limits_are_symmetric_around_bias() {
    let rows = vec![row(1.0), row(2.0), row(3.0)];
    let m = run_stage4(&rows);
    assert_eq!(m.bias, 2.0);
    assert_eq!(m.sd, 1.0);
    assert!((m.upper_loa - (2.0 + LOA_Z)).abs() < 1e-12);
    assert!((m.lower_loa - (2.0 - LOA_Z)).abs() < 1e-12);
}

#[test]
fn test_outside_limits_flags_outlier() {
    let mut rows = vec![row(0.0); 20];
    rows.push(row(5.0));
    let m = run_stage4(&rows);
    let outside = m.outside_limits(&rows);
    assert_eq!(outside.len(), 1);
    assert_eq!(outside[0].diff_score, 5.0);
}

#[test]
fn test_single_row_has_zero_spread() {
    let m = run_stage4(&[row(-0.5)]);
    assert_eq!(m.sd, 0.0);
    assert_eq!(m.upper_loa, -0.5);
    assert_eq!(m.lower_loa, -0.5);
    assert_eq!(m.bias_label(), "Mean Bias (-0.50)");
}
