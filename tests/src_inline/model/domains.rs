use super::*;

#[test]
fn test_question_ranges_cover_questionnaire() {
    let mut next = 0usize;
    for domain in Domain::ALL {
        let range = domain.question_range();
        assert_eq!(range.start, next, "{domain} does not continue the previous range");
        assert!(range.end > range.start);
        next = range.end;
    }
    assert_eq!(next, N_QUESTIONS);
}

#[test]
fn test_domain_order_and_index() {
    for (i, domain) in Domain::ALL.iter().enumerate() {
        assert_eq!(domain.index(), i);
    }
    assert_eq!(Domain::ALL[0].name(), "Accuracy");
    assert_eq!(Domain::ALL[N_DOMAINS - 1].name(), "Performance");
}

#[test]
fn test_question_counts_per_domain() {
    let counts = Domain::ALL
        .iter()
        .map(|d| d.question_range().len())
        .collect::<Vec<_>>();
    assert_eq!(counts, vec![6, 5, 4, 4, 4, 4, 3]);
}
