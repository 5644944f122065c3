use super::*;
use crate::input::load_embedded;

fn reshaped() -> Stage1Output {
    run_stage1(&load_embedded().unwrap())
}

#[test]
fn test_long_table_has_one_row_per_case_and_domain() {
    let out = reshaped();
    assert_eq!(out.long.len(), 15 * 7);
    assert_eq!(out.models, vec!["GPT 5.2", "Gemini 3", "DeepSeek V3.2"]);
    for domain in Domain::ALL {
        assert_eq!(out.domain_scores(domain).len(), 15);
        for &model in &out.models {
            assert_eq!(out.model_domain_scores(model, domain).len(), 5);
        }
    }
}

#[test]
fn test_melt_is_domain_major() {
    let out = reshaped();
    assert_eq!(out.long[0].domain, Domain::Accuracy);
    assert_eq!(out.long[0].model, "GPT 5.2");
    assert_eq!(out.long[0].case, 1);
    assert_eq!(out.long[14].model, "DeepSeek V3.2");
    assert_eq!(out.long[14].domain, Domain::Accuracy);
    assert_eq!(out.long[15].domain, Domain::Reasoning);
    assert_eq!(out.long[15].score, 77.0);
}

#[test]
fn test_model_domain_means() {
    let out = reshaped();
    let gpt_perf = out.model_domain_mean("GPT 5.2", Domain::Performance).unwrap();
    assert!((gpt_perf - 93.8).abs() < 1e-9);
    let gemini_safety = out.model_domain_mean("Gemini 3", Domain::Safety).unwrap();
    assert!((gemini_safety - 71.0).abs() < 1e-9);
    assert!(out.model_domain_mean("DeepSeek", Domain::Safety).is_none());
}
