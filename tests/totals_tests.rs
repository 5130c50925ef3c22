mod common;

use common::outcomes;
use mewt_report::types::{MutantStatus, MutationScore, StatusCategory, Totals};
use pretty_assertions::assert_eq;

fn mixed() -> Vec<MutantStatus> {
    vec![
        MutantStatus::Killed,
        MutantStatus::Killed,
        MutantStatus::Survived,
        MutantStatus::Timeout,
        MutantStatus::NoCoverage,
        MutantStatus::RuntimeError,
        MutantStatus::CompileError,
        MutantStatus::Other("Pending".to_string()),
    ]
}

#[test]
fn test_total_mutants_equals_input_length() {
    for n in 0..mixed().len() {
        let input = outcomes(&mixed()[..n]);
        assert_eq!(Totals::aggregate(&input).total_mutants(), n);
    }
}

#[test]
fn test_detected_undetected_and_errors_partition_the_input() {
    let input = outcomes(&mixed());
    let totals = Totals::aggregate(&input);
    assert_eq!(totals.total_detected(), 3);
    assert_eq!(totals.total_undetected(), 2);
    assert_eq!(totals.total_invalid(), 3);
    assert_eq!(
        totals.total_detected() + totals.total_undetected() + totals.total_invalid(),
        input.len()
    );
    assert_eq!(totals.counts().values().sum::<usize>(), input.len());
}

#[test]
fn test_empty_input_score_is_not_applicable() {
    let totals = Totals::aggregate(&outcomes(&[]));
    assert_eq!(totals.mutation_score(), MutationScore::NotApplicable);
    assert_eq!(totals.mutation_score().value(), None);
    assert_eq!(totals.total_mutants(), 0);
}

#[test]
fn test_counts_cover_the_full_status_set() {
    let totals = Totals::aggregate(&outcomes(&[MutantStatus::Killed]));
    let keys: Vec<StatusCategory> = totals.counts().keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            StatusCategory::Killed,
            StatusCategory::Survived,
            StatusCategory::Timeout,
            StatusCategory::NoCoverage,
            StatusCategory::RuntimeError,
            StatusCategory::CompileError,
            StatusCategory::Other,
        ]
    );
    assert_eq!(totals.count(StatusCategory::Killed), 1);
    assert_eq!(totals.count(StatusCategory::Survived), 0);
}

#[test]
fn test_mutation_score_formula() {
    let totals = Totals::aggregate(&outcomes(&mixed()));
    // 3 detected of 5 valid
    assert_eq!(totals.mutation_score(), MutationScore::Score(60.0));
    assert_eq!(totals.mutation_score().to_string(), "60.00");
    // 3 detected of 4 covered (killed, timeout, survived)
    assert_eq!(
        totals.mutation_score_based_on_covered_code(),
        MutationScore::Score(75.0)
    );
}

#[test]
fn test_aggregation_is_deterministic_and_leaves_input_alone() {
    let input = outcomes(&mixed());
    let before = input.clone();
    let first = Totals::aggregate(&input);
    let second = Totals::aggregate(&input);
    assert_eq!(first, second);
    assert_eq!(input, before);
}

#[test]
fn test_sum_of_parts_equals_whole() {
    let statuses = mixed();
    let (left, right) = statuses.split_at(3);
    let parts = [
        Totals::aggregate(&outcomes(left)),
        Totals::aggregate(&outcomes(right)),
    ];
    let summed: Totals = parts.iter().sum();
    assert_eq!(summed, Totals::aggregate(&outcomes(&statuses)));
}
