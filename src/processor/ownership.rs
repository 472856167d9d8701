use crate::models::PurchaseRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Issues owned for one series.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeriesOwnership {
    pub all_volumes: BTreeSet<i64>,
    pub cover_a: BTreeSet<i64>,
}

impl SeriesOwnership {
    pub fn owned_cover_a(&self) -> Vec<i64> {
        self.cover_a.iter().copied().collect()
    }

    /// Owned volumes with no Cover A copy.
    pub fn owned_other(&self) -> Vec<i64> {
        self.all_volumes.difference(&self.cover_a).copied().collect()
    }

    pub fn max_volume(&self) -> Option<i64> {
        self.all_volumes.last().copied()
    }
}

/// Ownership per series, keyed and ordered by display name.
#[derive(Debug, Default)]
pub struct OwnershipIndex {
    series: BTreeMap<String, SeriesOwnership>,
}

impl OwnershipIndex {
    pub fn from_purchases(purchases: &[PurchaseRecord]) -> Self {
        let mut index = OwnershipIndex::default();
        for purchase in purchases {
            index.record(purchase);
        }
        index
    }

    pub fn record(&mut self, purchase: &PurchaseRecord) {
        let entry = self.series.entry(purchase.series.clone()).or_default();
        entry.all_volumes.insert(purchase.volume);
        if purchase.is_cover_a() {
            entry.cover_a.insert(purchase.volume);
        }
    }

    #[cfg(test)]
    pub fn get(&self, series: &str) -> Option<&SeriesOwnership> {
        self.series.get(series)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SeriesOwnership)> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
