use crate::models::SummaryRecord;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"));

/// Largest integer mentioned in a "volumes owned" description.
///
/// `"1-5, 7"` yields 7; text without digits yields `None`. A digit run too
/// long for `i64` saturates to `i64::MAX`.
pub fn max_declared_issue(volumes_owned: &str) -> Option<i64> {
    DIGIT_RUN
        .find_iter(volumes_owned)
        .map(|m| m.as_str().parse::<i64>().unwrap_or(i64::MAX))
        .max()
}

/// Declared issue totals from the summary sheet, keyed by series name.
#[derive(Debug, Default)]
pub struct DeclaredTotals {
    totals: HashMap<String, i64>,
}

impl DeclaredTotals {
    /// Later rows for the same series replace earlier ones.
    pub fn from_summary(records: &[SummaryRecord]) -> Self {
        let mut totals = HashMap::new();
        for record in records {
            if let Some(max) = max_declared_issue(&record.volumes_owned) {
                totals.insert(record.series_name.clone(), max);
            }
        }
        DeclaredTotals { totals }
    }

    pub fn get(&self, series: &str) -> Option<i64> {
        self.totals.get(series).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }
}
