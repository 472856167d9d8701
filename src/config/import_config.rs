use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Import configuration, loaded from a TOML file with every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub collection: CollectionSection,
    pub columns: ColumnConfig,
    pub marketplace: MarketplaceSection,
    pub output: OutputSection,
}

/// The primary collection workbook
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionSection {
    pub workbook: String,
    pub purchases_sheet: String,
    pub summary_sheet: String,
    pub publisher: String,
}

/// Zero-based column positions for every sheet we read
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub purchase_series: usize,
    pub purchase_volume: usize,
    pub purchase_cover: usize,
    pub purchase_item: usize,
    pub summary_series: usize,
    pub summary_volumes: usize,
    pub marketplace_item: usize,
    pub marketplace_image: usize,
}

/// Where the marketplace purchase-history exports live
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceSection {
    pub directory: String,
    pub file_prefix: String,
    pub years: Vec<u16>,
    /// Scan `directory` for every `<file_prefix>*.xlsx` instead of using `years`
    pub discover: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub path: String,
}

impl Default for CollectionSection {
    fn default() -> Self {
        Self {
            workbook: "~/Downloads/comic_collection_tracker.xlsx".to_string(),
            purchases_sheet: "All Purchases".to_string(),
            summary_sheet: "Collection Summary".to_string(),
            publisher: "DC".to_string(),
        }
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            purchase_series: 1,
            purchase_volume: 2,
            purchase_cover: 3,
            purchase_item: 4,
            summary_series: 0,
            summary_volumes: 1,
            marketplace_item: 4,
            marketplace_image: 11,
        }
    }
}

impl Default for MarketplaceSection {
    fn default() -> Self {
        Self {
            directory: "~/Downloads".to_string(),
            file_prefix: "Ebay_Purchase_History_".to_string(),
            years: vec![2024, 2025, 2026],
            discover: false,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: "src/data/collection.json".to_string(),
        }
    }
}

impl ImportConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read import config file: {}", path))?;

        let config: ImportConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse import config file: {}", path))?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the built-in defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            info!("Loading import configuration from {}", path);
            Self::from_file(path)
        } else {
            info!("No config file at {}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn workbook_path(&self) -> PathBuf {
        expand_home(&self.collection.workbook)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_home(&self.output.path)
    }

    /// Candidate marketplace workbooks, in processing order.
    ///
    /// Paths are not checked for existence here; missing files are skipped
    /// by the pipeline.
    pub fn marketplace_paths(&self) -> Result<Vec<PathBuf>> {
        let directory = expand_home(&self.marketplace.directory);

        if !self.marketplace.discover {
            return Ok(self
                .marketplace
                .years
                .iter()
                .map(|year| directory.join(format!("{}{}.xlsx", self.marketplace.file_prefix, year)))
                .collect());
        }

        if !directory.is_dir() {
            debug!("Marketplace directory {} not found", directory.display());
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        let entries = std::fs::read_dir(&directory)
            .with_context(|| format!("Failed to list marketplace directory: {}", directory.display()))?;

        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.starts_with(&self.marketplace.file_prefix) && name.ends_with(".xlsx") {
                paths.push(entry.path());
            }
        }

        paths.sort();
        Ok(paths)
    }
}

/// Expand a leading `~/` against the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
