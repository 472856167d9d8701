use crate::models::Series;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStatus {
    CoverA,
    OtherCover,
    Missing,
}

impl Series {
    pub fn issue_status(&self, issue: i64) -> IssueStatus {
        if self.owned_cover_a.contains(&issue) {
            IssueStatus::CoverA
        } else if self.owned_other.contains(&issue) {
            IssueStatus::OtherCover
        } else {
            IssueStatus::Missing
        }
    }

    /// Issues owned in an unbroken run starting at #1.
    pub fn consecutive_count(&self) -> i64 {
        (1..=self.total_issues)
            .take_while(|issue| self.issue_status(*issue) != IssueStatus::Missing)
            .count() as i64
    }

    pub fn completion_percent(&self) -> i64 {
        if self.total_issues == 0 {
            return 100;
        }
        (self.consecutive_count() as f64 / self.total_issues as f64 * 100.0).round() as i64
    }

    pub fn is_complete(&self) -> bool {
        self.consecutive_count() == self.total_issues
    }

    /// Issues from 1 to `total_issues` that are not owned, in order.
    ///
    /// Lazy: declared totals come from free text and can be huge.
    pub fn missing_issues(&self) -> impl Iterator<Item = i64> + '_ {
        (1..=self.total_issues).filter(|issue| self.issue_status(*issue) == IssueStatus::Missing)
    }

    /// Number of missing issues, computed from the owned lists only.
    pub fn missing_count(&self) -> i64 {
        let owned_in_range = self
            .owned_cover_a
            .iter()
            .chain(self.owned_other.iter())
            .filter(|issue| (1..=self.total_issues).contains(*issue))
            .count() as i64;
        self.total_issues.max(0) - owned_in_range
    }
}

/// Roll-up over a whole collection, for the end-of-run log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectionStats {
    pub series: usize,
    pub complete: usize,
    pub owned_issues: usize,
    pub missing_issues: i64,
}

impl CollectionStats {
    pub fn from_series(series: &[Series]) -> Self {
        series.iter().fold(CollectionStats::default(), |mut acc, s| {
            acc.series += 1;
            if s.is_complete() {
                acc.complete += 1;
            }
            acc.owned_issues += s.owned_cover_a.len() + s.owned_other.len();
            acc.missing_issues = acc.missing_issues.saturating_add(s.missing_count());
            acc
        })
    }
}
