use crate::config::ColumnConfig;
use crate::reader::{cell_integer, cell_text};
use anyhow::Result;
use calamine::Data;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cover labels containing this marker are the primary print variant.
const COVER_A_MARKER: &str = "CVR A";

pub fn is_cover_a(cover: &str) -> bool {
    cover.to_uppercase().contains(COVER_A_MARKER)
}

/// A row of the "All Purchases" sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    pub series: String,
    pub volume: i64,
    pub cover: Option<String>,
    /// Trimmed; used to join against marketplace exports.
    pub item_name: Option<String>,
}

impl PurchaseRecord {
    /// Returns `Ok(None)` for rows without a series or volume.
    pub fn from_row(row: &[Data], columns: &ColumnConfig) -> Result<Option<Self>> {
        let Some(series) = cell_text(row, columns.purchase_series) else {
            return Ok(None);
        };
        let Some(volume) = cell_integer(row, columns.purchase_volume)? else {
            return Ok(None);
        };

        Ok(Some(PurchaseRecord {
            series,
            volume,
            cover: cell_text(row, columns.purchase_cover),
            item_name: cell_text(row, columns.purchase_item).map(|s| s.trim().to_string()),
        }))
    }

    pub fn is_cover_a(&self) -> bool {
        self.cover.as_deref().is_some_and(is_cover_a)
    }
}

/// A row of the "Collection Summary" sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub series_name: String,
    /// Free text such as "1-17" or "1, 15".
    pub volumes_owned: String,
}

impl SummaryRecord {
    pub fn from_row(row: &[Data], columns: &ColumnConfig) -> Option<Self> {
        let series_name = cell_text(row, columns.summary_series)?;
        Some(SummaryRecord {
            series_name,
            volumes_owned: cell_text(row, columns.summary_volumes).unwrap_or_default(),
        })
    }
}

/// A row of a marketplace purchase-history export.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceRecord {
    pub item_name: String,
    pub image_url: String,
}

impl MarketplaceRecord {
    pub fn from_row(row: &[Data], columns: &ColumnConfig) -> Option<Self> {
        let item_name = cell_text(row, columns.marketplace_item)?.trim().to_string();
        let image_url = cell_text(row, columns.marketplace_image)?;
        Some(MarketplaceRecord {
            item_name,
            image_url,
        })
    }
}

/// What a purchased item resolves to in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    pub series: String,
    pub volume: i64,
    /// Empty when the purchase had no cover label.
    pub cover: String,
}

impl ItemInfo {
    pub fn is_cover_a(&self) -> bool {
        is_cover_a(&self.cover)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverInfo {
    pub cover: String,
    pub image_url: String,
}

/// One comic series as consumed by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: String,
    pub name: String,
    pub publisher: String,
    pub total_issues: i64,
    pub owned_cover_a: Vec<i64>,
    pub owned_other: Vec<i64>,
    pub image_url: String,
    pub issue_images: BTreeMap<i64, String>,
    pub issue_covers: BTreeMap<i64, Vec<CoverInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub series: Vec<Series>,
}
