use super::item_index::ItemIndex;
use crate::models::{CoverInfo, ItemInfo, MarketplaceRecord, is_cover_a};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Counts for one batch of marketplace rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HarvestStats {
    pub matched: usize,
    pub unmatched: usize,
}

/// Image URLs gathered from marketplace exports.
///
/// A Cover A purchase always replaces whatever image was recorded before it;
/// any other purchase only fills a gap.
#[derive(Debug, Default)]
pub struct ImageHarvest {
    series_images: HashMap<String, String>,
    issue_images: HashMap<String, BTreeMap<i64, String>>,
    issue_covers: HashMap<String, BTreeMap<i64, Vec<CoverInfo>>>,
    seen_covers: HashSet<(String, i64, String)>,
}

impl ImageHarvest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join marketplace rows against the item index. Unknown items are counted
    /// and otherwise ignored.
    pub fn absorb(&mut self, index: &ItemIndex, records: &[MarketplaceRecord]) -> HarvestStats {
        let mut stats = HarvestStats::default();
        for record in records {
            match index.lookup(&record.item_name) {
                Some(info) => {
                    self.record(info, &record.image_url);
                    stats.matched += 1;
                }
                None => stats.unmatched += 1,
            }
        }
        stats
    }

    pub fn record(&mut self, info: &ItemInfo, image_url: &str) {
        let cover_a = info.is_cover_a();

        if cover_a || !self.series_images.contains_key(&info.series) {
            self.series_images
                .insert(info.series.clone(), image_url.to_string());
        }

        let issues = self.issue_images.entry(info.series.clone()).or_default();
        if cover_a || !issues.contains_key(&info.volume) {
            issues.insert(info.volume, image_url.to_string());
        }

        let key = (info.series.clone(), info.volume, info.cover.clone());
        if self.seen_covers.insert(key) {
            self.issue_covers
                .entry(info.series.clone())
                .or_default()
                .entry(info.volume)
                .or_default()
                .push(CoverInfo {
                    cover: info.cover.clone(),
                    image_url: image_url.to_string(),
                });
        }
    }

    pub fn series_image(&self, series: &str) -> Option<&str> {
        self.series_images.get(series).map(String::as_str)
    }

    pub fn issue_images(&self, series: &str) -> BTreeMap<i64, String> {
        self.issue_images.get(series).cloned().unwrap_or_default()
    }

    /// Cover variants per issue, Cover A first and then by label.
    pub fn issue_covers(&self, series: &str) -> BTreeMap<i64, Vec<CoverInfo>> {
        let mut covers = self.issue_covers.get(series).cloned().unwrap_or_default();
        for variants in covers.values_mut() {
            variants.sort_by(|a, b| {
                (!is_cover_a(&a.cover), &a.cover).cmp(&(!is_cover_a(&b.cover), &b.cover))
            });
        }
        covers
    }

    pub fn series_with_images(&self) -> usize {
        self.series_images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PurchaseRecord;

    fn info(series: &str, volume: i64, cover: &str) -> ItemInfo {
        ItemInfo {
            series: series.to_string(),
            volume,
            cover: cover.to_string(),
        }
    }

    #[test]
    fn first_image_fills_gap() {
        let mut harvest = ImageHarvest::new();
        harvest.record(&info("Batman", 1, "CVR B"), "b1");
        harvest.record(&info("Batman", 1, "CVR C"), "c1");

        assert_eq!(harvest.series_image("Batman"), Some("b1"));
        assert_eq!(harvest.issue_images("Batman").get(&1).map(String::as_str), Some("b1"));
    }

    #[test]
    fn cover_a_wins_regardless_of_order() {
        let mut before = ImageHarvest::new();
        before.record(&info("Batman", 1, "CVR A"), "a1");
        before.record(&info("Batman", 1, "CVR B"), "b1");

        let mut after = ImageHarvest::new();
        after.record(&info("Batman", 1, "CVR B"), "b1");
        after.record(&info("Batman", 1, "CVR A"), "a1");

        for harvest in [before, after] {
            assert_eq!(harvest.series_image("Batman"), Some("a1"));
            assert_eq!(harvest.issue_images("Batman")[&1], "a1");
        }
    }

    #[test]
    fn last_cover_a_wins() {
        let mut harvest = ImageHarvest::new();
        harvest.record(&info("Batman", 1, "CVR A"), "a1");
        harvest.record(&info("Batman", 2, "CVR A"), "a2");

        assert_eq!(harvest.series_image("Batman"), Some("a2"));
        let issues = harvest.issue_images("Batman");
        assert_eq!(issues[&1], "a1");
        assert_eq!(issues[&2], "a2");
    }

    #[test]
    fn unknown_items_are_counted_not_recorded() {
        let index = ItemIndex::from_purchases(&[PurchaseRecord {
            series: "Batman".into(),
            volume: 1,
            cover: Some("CVR A".into()),
            item_name: Some("itemX".into()),
        }]);
        let records = vec![
            MarketplaceRecord {
                item_name: "itemX".into(),
                image_url: "x".into(),
            },
            MarketplaceRecord {
                item_name: "somebody else's comic".into(),
                image_url: "y".into(),
            },
        ];

        let mut harvest = ImageHarvest::new();
        let stats = harvest.absorb(&index, &records);
        assert_eq!(stats, HarvestStats { matched: 1, unmatched: 1 });
        assert_eq!(harvest.series_image("Batman"), Some("x"));
        assert_eq!(harvest.series_with_images(), 1);
    }

    #[test]
    fn covers_deduplicated_and_ordered() {
        let mut harvest = ImageHarvest::new();
        harvest.record(&info("Batman", 1, "CVR C"), "c1");
        harvest.record(&info("Batman", 1, "CVR B"), "b1");
        harvest.record(&info("Batman", 1, "CVR B"), "b1-again");
        harvest.record(&info("Batman", 1, "CVR A"), "a1");

        let covers = harvest.issue_covers("Batman");
        let labels: Vec<(&str, &str)> = covers[&1]
            .iter()
            .map(|c| (c.cover.as_str(), c.image_url.as_str()))
            .collect();
        assert_eq!(labels, vec![("CVR A", "a1"), ("CVR B", "b1"), ("CVR C", "c1")]);
    }

    #[test]
    fn unseen_series_is_empty() {
        let harvest = ImageHarvest::new();
        assert_eq!(harvest.series_image("Batman"), None);
        assert!(harvest.issue_images("Batman").is_empty());
        assert!(harvest.issue_covers("Batman").is_empty());
    }
}
