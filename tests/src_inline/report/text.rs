use super::*;
use crate::model::domains::Domain;

fn rows() -> Vec<PairedRow> {
    vec![
        PairedRow {
            model: "GPT 5.2",
            domain: Domain::Accuracy,
            melma_1_5: 3.52,
            human_1_5: 4.3,
        },
        PairedRow {
            model: "GPT 5.2",
            domain: Domain::Reasoning,
            melma_1_5: 3.7,
            human_1_5: 4.4,
        },
        PairedRow {
            model: "Gemini 3",
            domain: Domain::Understandability,
            melma_1_5: 3.05,
            human_1_5: 4.75,
        },
    ]
}

#[test]
fn test_shape_line() {
    assert_eq!(render_shape_line((21, 4)), "Paired dataset shape: (21, 4)");
}

#[test]
fn test_preview_truncates_and_aligns() {
    let text = render_paired_preview(&rows(), 2);
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("LLM"));
    assert!(lines[0].ends_with("Human_1_5"));
    assert!(lines[1].starts_with("0  GPT 5.2"));
    assert!(lines[1].contains("Accuracy"));
    assert!(lines[1].ends_with("3.52        4.3"));
    assert!(lines[2].ends_with("3.70        4.4"));
    assert!(lines[2].starts_with("1  GPT 5.2"));
    assert_eq!(lines[1].len(), lines[0].len());
    assert_eq!(lines[2].len(), lines[0].len());
    assert!(!text.contains("Gemini 3"));
}

#[test]
fn test_preview_of_empty_rows_is_header_only() {
    let text = render_paired_preview(&[], 5);
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_column_precision_is_shared_within_column() {
    assert_eq!(format_column(&[3.52, 3.7]), vec!["3.52", "3.70"]);
    assert_eq!(format_column(&[4.5, 4.3]), vec!["4.5", "4.3"]);
    assert_eq!(format_column(&[4.0, 5.0]), vec!["4.0", "5.0"]);
    assert_eq!(
        format_column(&[4.5, 4.666666666666667]),
        vec!["4.500000", "4.666667"]
    );
    assert!(format_column(&[]).is_empty());
}
