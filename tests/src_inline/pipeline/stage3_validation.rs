use super::*;
use crate::input::load_embedded;
use crate::pipeline::stage1_reshape::run_stage1;
use crate::pipeline::stage2_human::run_stage2;

fn validation() -> Stage3Output {
    let bundle = load_embedded().unwrap();
    run_stage3(&run_stage1(&bundle), &run_stage2(&bundle))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_rows_follow_domain_order() {
    let out = validation();
    let domains = out.rows.iter().map(|r| r.domain).collect::<Vec<_>>();
    assert_eq!(domains, Domain::ALL.to_vec());
}

#[test]
fn test_accuracy_row() {
    let out = validation();
    let acc = &out.rows[Domain::Accuracy.index()];
    assert_close(acc.melma, 3.506666666666667);
    assert_close(acc.human, 4.488888888888889);
    assert_close(acc.melma_z, -0.5063539874752256);
    assert_close(acc.human_z, -0.06703446213941573);
    assert_close(acc.mean_score, 3.997777777777778);
    assert_close(acc.diff_score, 0.9822222222222221);
}

#[test]
fn test_extreme_rows() {
    let out = validation();
    let und = &out.rows[Domain::Understandability.index()];
    assert_close(und.melma, 3.066666666666667);
    assert_close(und.melma_z, -1.712207297854373);
    assert_close(und.diff_score, 1.3333333333333326);

    let ling = &out.rows[Domain::Linguistic.index()];
    assert_close(ling.human_z, 2.279171712740272);

    let perf = &out.rows[Domain::Performance.index()];
    assert_close(perf.melma, 4.23);
    assert_close(perf.melma_z, 1.4759957727692805);
}

#[test]
fn test_zscores_sum_to_zero() {
    let out = validation();
    let melma_sum: f64 = out.rows.iter().map(|r| r.melma_z).sum();
    let human_sum: f64 = out.rows.iter().map(|r| r.human_z).sum();
    assert!(melma_sum.abs() < 1e-9);
    assert!(human_sum.abs() < 1e-9);
}

#[test]
fn test_humans_score_higher_in_every_domain() {
    let out = validation();
    assert!(out.rows.iter().all(|r| r.diff_score > 0.0));
}
