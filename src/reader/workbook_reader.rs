use super::cells::Row;
use anyhow::{Context, Result, anyhow};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only handle on one `.xlsx` workbook.
///
/// The underlying file is released when the reader is dropped.
pub struct WorkbookReader {
    path: PathBuf,
    workbook: Xlsx<BufReader<File>>,
}

impl WorkbookReader {
    pub fn open(path: &Path) -> Result<Self> {
        let workbook: Xlsx<_> = open_workbook(path)
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

        debug!("Opened workbook {}", path.display());

        Ok(WorkbookReader {
            path: path.to_path_buf(),
            workbook,
        })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Data rows of the named sheet, header row removed.
    pub fn data_rows(&mut self, sheet_name: &str) -> Result<Vec<Row>> {
        let range = self.workbook.worksheet_range(sheet_name).with_context(|| {
            format!(
                "Failed to read sheet '{}' from workbook: {}",
                sheet_name,
                self.path.display()
            )
        })?;

        let rows = data_rows_from_range(&range);
        debug!(
            "Read {} data rows from '{}' in {}",
            rows.len(),
            sheet_name,
            self.path.display()
        );
        Ok(rows)
    }

    /// Data rows of the first sheet, whatever it is called.
    pub fn first_sheet_rows(&mut self) -> Result<Vec<Row>> {
        let first = self
            .sheet_names()
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Workbook has no sheets: {}", self.path.display()))?;
        self.data_rows(&first)
    }
}

/// Materialize a range as rows aligned to the sheet origin, then drop the
/// header row.
///
/// calamine ranges begin at the first used cell, so leading blank rows and
/// columns are padded back in to keep column indexes absolute.
pub fn data_rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let leading_rows = std::iter::repeat_with(Row::new).take(start_row as usize);
    let used_rows = range.rows().map(|cells| {
        let mut row = Vec::with_capacity(start_col as usize + cells.len());
        row.resize(start_col as usize, Data::Empty);
        row.extend_from_slice(cells);
        row
    });

    leading_rows.chain(used_rows).skip(1).collect()
}
