//! Corpus evaluation and regression reports.

use crate::classify::pipeline::Classifier;
use crate::eval::corpus::CorpusEntry;
use crate::model::category::Category;
use crate::model::classification::ClassificationResult;
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;

/// Classification outcome of one corpus entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    /// Position in the evaluated corpus.
    pub index: usize,
    pub text: String,
    pub expected: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub result: ClassificationResult,
}

impl EntryOutcome {
    pub fn passed(&self) -> bool {
        self.result.category == self.expected
    }
}

/// Entry that passed under the baseline ruleset and fails under the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Regression {
    pub index: usize,
    pub text: String,
    pub expected: Category,
    pub baseline: ClassificationResult,
    pub candidate: ClassificationResult,
}

/// Result of running one ruleset over one corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub ruleset_version: String,
    pub outcomes: Vec<EntryOutcome>,
}

impl EvaluationReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Share of passing entries; an empty report counts as fully accurate.
    pub fn accuracy(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 1.0;
        }
        self.passed() as f64 / self.total() as f64
    }

    /// Counts keyed by `(expected, actual)`.
    pub fn confusion(&self) -> BTreeMap<(Category, Category), usize> {
        let mut counts = BTreeMap::new();
        for outcome in &self.outcomes {
            *counts
                .entry((outcome.expected, outcome.result.category))
                .or_insert(0) += 1;
        }
        counts
    }

    /// Entries this report fails that passed in `baseline`.
    ///
    /// Entries are paired by position; pairs whose text differs are skipped,
    /// so both reports should come from the same corpus.
    pub fn regressions_against(&self, baseline: &EvaluationReport) -> Vec<Regression> {
        baseline
            .outcomes
            .iter()
            .zip(&self.outcomes)
            .filter(|(before, after)| before.text == after.text)
            .filter(|(before, after)| before.passed() && !after.passed())
            .map(|(before, after)| Regression {
                index: after.index,
                text: after.text.clone(),
                expected: after.expected,
                baseline: before.result.clone(),
                candidate: after.result.clone(),
            })
            .collect()
    }
}

/// Runs a classifier over corpora.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'lib> {
    classifier: Classifier<'lib>,
}

impl Evaluator<'static> {
    /// Evaluator for the built-in ruleset.
    pub fn builtin() -> Self {
        Self::new(Classifier::builtin())
    }
}

impl<'lib> Evaluator<'lib> {
    pub fn new(classifier: Classifier<'lib>) -> Self {
        Self { classifier }
    }

    pub fn evaluate(&self, corpus: &[CorpusEntry]) -> EvaluationReport {
        let outcomes: Vec<EntryOutcome> = corpus
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryOutcome {
                index,
                text: entry.text.clone(),
                expected: entry.expected,
                tag: entry.tag.clone(),
                result: self.classifier.classify(&entry.text),
            })
            .collect();

        let report = EvaluationReport {
            ruleset_version: self.classifier.library().version().to_string(),
            outcomes,
        };
        info!(
            "event=evaluate module=eval status={} ruleset={} total={} passed={}",
            if report.is_clean() { "ok" } else { "failed" },
            report.ruleset_version,
            report.total(),
            report.passed()
        );
        report
    }
}
