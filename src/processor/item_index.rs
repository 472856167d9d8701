use crate::models::{ItemInfo, PurchaseRecord};
use std::collections::HashMap;

/// Marketplace item name to the purchase it belongs to.
#[derive(Debug, Default)]
pub struct ItemIndex {
    items: HashMap<String, ItemInfo>,
}

impl ItemIndex {
    /// Purchases without an item name are left out. When two purchases share
    /// an item name the later one wins.
    pub fn from_purchases(purchases: &[PurchaseRecord]) -> Self {
        let mut items = HashMap::new();
        for purchase in purchases {
            let Some(item_name) = purchase.item_name.as_ref() else {
                continue;
            };
            items.insert(
                item_name.clone(),
                ItemInfo {
                    series: purchase.series.clone(),
                    volume: purchase.volume,
                    cover: purchase.cover.clone().unwrap_or_default(),
                },
            );
        }
        ItemIndex { items }
    }

    pub fn lookup(&self, item_name: &str) -> Option<&ItemInfo> {
        self.items.get(item_name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
