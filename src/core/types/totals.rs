use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;

use serde::{Serialize, Serializer};

use crate::types::{MutantOutcome, StatusCategory};

/// A mutation score, or the sentinel for "no mutant was eligible"
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MutationScore {
    Score(f64),
    NotApplicable,
}

impl MutationScore {
    fn ratio(numerator: usize, denominator: usize) -> Self {
        if denominator > 0 {
            MutationScore::Score(numerator as f64 * 100.0 / denominator as f64)
        } else {
            MutationScore::NotApplicable
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            MutationScore::Score(score) => Some(score),
            MutationScore::NotApplicable => None,
        }
    }

    pub fn is_applicable(self) -> bool {
        self.value().is_some()
    }
}

impl fmt::Display for MutationScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationScore::Score(score) => write!(f, "{score:.2}"),
            MutationScore::NotApplicable => f.write_str("N/A"),
        }
    }
}

impl Serialize for MutationScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

/// Per-status counts and the scores derived from them.
///
/// Values are only produced by aggregation or merging, so the derived
/// figures always agree with the counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    counts: BTreeMap<StatusCategory, usize>,
    killed: usize,
    survived: usize,
    timeout: usize,
    no_coverage: usize,
    runtime_errors: usize,
    compile_errors: usize,
    other: usize,
    total_detected: usize,
    total_undetected: usize,
    total_covered: usize,
    total_valid: usize,
    total_invalid: usize,
    total_mutants: usize,
    mutation_score: MutationScore,
    mutation_score_based_on_covered_code: MutationScore,
}

impl Totals {
    /// Count outcomes by status. Never fails; an empty input gives zero
    /// counts and a not-applicable score.
    pub fn aggregate<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a MutantOutcome>,
    {
        let mut counts = zero_counts();
        for outcome in outcomes {
            *counts.entry(outcome.status.category()).or_default() += 1;
        }
        Self::from_counts(counts)
    }

    /// Combine the totals of disjoint outcome sets
    pub fn merge(&self, other: &Totals) -> Self {
        let mut counts = self.counts.clone();
        for (category, count) in &other.counts {
            *counts.entry(*category).or_default() += count;
        }
        Self::from_counts(counts)
    }

    fn from_counts(counts: BTreeMap<StatusCategory, usize>) -> Self {
        let count = |category: StatusCategory| counts.get(&category).copied().unwrap_or(0);
        let killed = count(StatusCategory::Killed);
        let survived = count(StatusCategory::Survived);
        let timeout = count(StatusCategory::Timeout);
        let no_coverage = count(StatusCategory::NoCoverage);
        let runtime_errors = count(StatusCategory::RuntimeError);
        let compile_errors = count(StatusCategory::CompileError);
        let other = count(StatusCategory::Other);

        let total_detected = killed + timeout;
        let total_undetected = survived + no_coverage;
        let total_covered = total_detected + survived;
        let total_valid = total_detected + total_undetected;
        let total_invalid = runtime_errors + compile_errors + other;

        Self {
            killed,
            survived,
            timeout,
            no_coverage,
            runtime_errors,
            compile_errors,
            other,
            total_detected,
            total_undetected,
            total_covered,
            total_valid,
            total_invalid,
            total_mutants: total_valid + total_invalid,
            mutation_score: MutationScore::ratio(total_detected, total_valid),
            mutation_score_based_on_covered_code: MutationScore::ratio(
                total_detected,
                total_covered,
            ),
            counts,
        }
    }

    /// Count for every known category, in column order
    pub fn counts(&self) -> &BTreeMap<StatusCategory, usize> {
        &self.counts
    }

    pub fn count(&self, category: StatusCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn killed(&self) -> usize {
        self.killed
    }

    pub fn survived(&self) -> usize {
        self.survived
    }

    pub fn timeout(&self) -> usize {
        self.timeout
    }

    pub fn no_coverage(&self) -> usize {
        self.no_coverage
    }

    pub fn runtime_errors(&self) -> usize {
        self.runtime_errors
    }

    pub fn compile_errors(&self) -> usize {
        self.compile_errors
    }

    /// Statuses the report schema did not know about when this was built
    pub fn other(&self) -> usize {
        self.other
    }

    pub fn total_detected(&self) -> usize {
        self.total_detected
    }

    pub fn total_undetected(&self) -> usize {
        self.total_undetected
    }

    pub fn total_covered(&self) -> usize {
        self.total_covered
    }

    pub fn total_valid(&self) -> usize {
        self.total_valid
    }

    pub fn total_invalid(&self) -> usize {
        self.total_invalid
    }

    pub fn total_mutants(&self) -> usize {
        self.total_mutants
    }

    pub fn mutation_score(&self) -> MutationScore {
        self.mutation_score
    }

    pub fn mutation_score_based_on_covered_code(&self) -> MutationScore {
        self.mutation_score_based_on_covered_code
    }
}

impl Default for Totals {
    fn default() -> Self {
        Self::from_counts(zero_counts())
    }
}

impl<'a> Sum<&'a Totals> for Totals {
    fn sum<I: Iterator<Item = &'a Totals>>(iter: I) -> Self {
        iter.fold(Totals::default(), |acc, totals| acc.merge(totals))
    }
}

fn zero_counts() -> BTreeMap<StatusCategory, usize> {
    StatusCategory::all().map(|category| (category, 0)).collect()
}
