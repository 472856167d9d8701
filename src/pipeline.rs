use crate::config::{ColumnConfig, ImportConfig};
use crate::models::{Collection, MarketplaceRecord, PurchaseRecord, SummaryRecord};
use crate::processor::{
    CollectionStats, DeclaredTotals, ImageHarvest, ItemIndex, OwnershipIndex, build_series,
};
use crate::reader::{Row, WorkbookReader};
use crate::storage::write_collection;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a successful import.
#[derive(Debug)]
pub struct ImportReport {
    pub series_written: usize,
    pub output_path: PathBuf,
    pub stats: CollectionStats,
}

/// Rows of one marketplace export, tagged with where they came from.
pub struct MarketplaceSheet {
    pub source: PathBuf,
    pub rows: Vec<Row>,
}

/// Read every input, build the collection and write it out.
///
/// Nothing is written unless every input was read successfully.
pub fn run(config: &ImportConfig) -> Result<ImportReport> {
    let workbook_path = config.workbook_path();
    info!("Reading collection workbook {}", workbook_path.display());

    let (purchase_rows, summary_rows) = {
        let mut reader = WorkbookReader::open(&workbook_path)?;
        let purchases = reader.data_rows(&config.collection.purchases_sheet)?;
        let summary = reader.data_rows(&config.collection.summary_sheet)?;
        (purchases, summary)
    };
    info!(
        "Loaded {} purchase rows and {} summary rows",
        purchase_rows.len(),
        summary_rows.len()
    );

    let marketplace_sheets = read_marketplace_sheets(&config.marketplace_paths()?)?;

    let collection = assemble(config, &purchase_rows, &summary_rows, &marketplace_sheets)?;

    let output_path = config.output_path();
    write_collection(&output_path, &collection)?;

    let stats = CollectionStats::from_series(&collection.series);

    Ok(ImportReport {
        series_written: collection.series.len(),
        output_path,
        stats,
    })
}

/// First-sheet rows of every marketplace export that exists on disk.
pub fn read_marketplace_sheets(paths: &[PathBuf]) -> Result<Vec<MarketplaceSheet>> {
    let mut sheets = Vec::new();

    for path in paths {
        if !path.exists() {
            debug!("Marketplace export not found, skipping: {}", path.display());
            continue;
        }

        let rows = {
            let mut reader = WorkbookReader::open(path)?;
            reader.first_sheet_rows()?
        };

        if rows.is_empty() {
            warn!("Marketplace export has no data rows: {}", path.display());
        } else {
            info!("Loaded {} rows from {}", rows.len(), path.display());
        }

        sheets.push(MarketplaceSheet {
            source: path.clone(),
            rows,
        });
    }

    Ok(sheets)
}

/// Build the collection from already-loaded sheet rows (headers removed).
pub fn assemble(
    config: &ImportConfig,
    purchase_rows: &[Row],
    summary_rows: &[Row],
    marketplace_sheets: &[MarketplaceSheet],
) -> Result<Collection> {
    let columns = &config.columns;

    let purchases = parse_purchases(purchase_rows, columns, &config.collection.purchases_sheet)?;
    let ownership = OwnershipIndex::from_purchases(&purchases);
    if ownership.is_empty() {
        warn!("No purchases with both a series and a volume were found");
    }
    info!(
        "Found {} series across {} purchases",
        ownership.len(),
        purchases.len()
    );

    let summary: Vec<SummaryRecord> = summary_rows
        .iter()
        .filter_map(|row| SummaryRecord::from_row(row, columns))
        .collect();
    let totals = DeclaredTotals::from_summary(&summary);
    debug!("Declared issue totals for {} series", totals.len());

    let items = ItemIndex::from_purchases(&purchases);
    debug!("Indexed {} purchased items", items.len());

    let mut images = ImageHarvest::new();
    for sheet in marketplace_sheets {
        let records = parse_marketplace(&sheet.rows, columns);
        let stats = images.absorb(&items, &records);
        info!(
            "{}: {} rows matched a purchase, {} did not",
            display_name(&sheet.source),
            stats.matched,
            stats.unmatched
        );
    }
    info!("Found images for {} series", images.series_with_images());

    let series = build_series(&ownership, &totals, &images, &config.collection.publisher);
    for s in &series {
        debug!(
            "{} ({}): {}% complete, {} of {} issues missing",
            s.name,
            s.id,
            s.completion_percent(),
            s.missing_count(),
            s.total_issues
        );
    }

    Ok(Collection { series })
}

fn parse_purchases(rows: &[Row], columns: &ColumnConfig, sheet: &str) -> Result<Vec<PurchaseRecord>> {
    let mut purchases = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        // Data rows start on sheet row 2.
        let record = PurchaseRecord::from_row(row, columns)
            .with_context(|| format!("Invalid purchase on '{}' row {}", sheet, index + 2))?;
        if let Some(record) = record {
            purchases.push(record);
        }
    }
    Ok(purchases)
}

fn parse_marketplace(rows: &[Row], columns: &ColumnConfig) -> Vec<MarketplaceRecord> {
    rows.iter()
        .filter_map(|row| MarketplaceRecord::from_row(row, columns))
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
