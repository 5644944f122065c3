use super::*;
use crate::input::load_embedded;
use crate::pipeline::stage1_reshape::run_stage1;
use crate::pipeline::stage2_human::run_stage2;
use crate::pipeline::stage3_validation::run_stage3;
use crate::pipeline::stage4_agreement::run_stage4;
use crate::pipeline::stage5_paired::run_stage5;

#[test]
fn test_consistency_ceiling_covers_reference_and_data() {
    let human = run_stage2(&load_embedded().unwrap());
    let ceiling = consistency_ceiling(&human);
    assert!((ceiling - 1.1947803145348521 * 1.1).abs() < 1e-9);
    assert!(ceiling > HIGH_DISAGREEMENT_STD);
}

#[test]
fn test_consistency_ceiling_without_scores() {
    let human = Stage2Output {
        scores: Vec::new(),
        models: Vec::new(),
    };
    assert!((consistency_ceiling(&human) - 1.1).abs() < 1e-12);
}

#[test]
fn test_render_failure_is_reported_with_file_name() {
    let dir = std::env::temp_dir().join(format!("melma_chart_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let mut written = Vec::new();
    let err = emit(&dir, "broken.svg", &mut written, |_| Err("backend unavailable".into()))
        .unwrap_err();
    match err {
        AnalysisError::Chart { file, message } => {
            assert_eq!(file, "broken.svg");
            assert_eq!(message, "backend unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(written.is_empty());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_write_charts_renders_every_file() {
    let bundle = load_embedded().unwrap();
    let stage1 = run_stage1(&bundle);
    let stage2 = run_stage2(&bundle);
    let stage3 = run_stage3(&stage1, &stage2);
    let agreement = run_stage4(&stage3.rows);
    let stage5 = run_stage5(&stage1, &stage2);
    let input = Stage6Input {
        reshaped: &stage1,
        human: &stage2,
        validation: &stage3,
        agreement: &agreement,
        paired: &stage5,
    };

    let dir = std::env::temp_dir()
        .join(format!("melma_charts_{}", std::process::id()))
        .join("figures");
    let written = write_charts(&input, &dir).unwrap();

    assert_eq!(written.len(), CHART_FILES.len());
    for (path, name) in written.iter().zip(CHART_FILES) {
        assert_eq!(path, &dir.join(name));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("<svg"), "{name} is not an svg document");
    }
    let paired = std::fs::read_to_string(dir.join(CHART_PAIRED_PANELS)).unwrap();
    assert!(paired.contains("DeepSeek V3.2"));
    let bland_altman = std::fs::read_to_string(dir.join(CHART_BLAND_ALTMAN)).unwrap();
    assert!(bland_altman.contains("Mean Bias (+0.80)"));

    let _ = std::fs::remove_dir_all(dir.parent().unwrap());
}
