//! Builds small `.xlsx` fixtures on disk for reader and pipeline tests.

use rust_xlsxwriter::Workbook;
use std::path::Path;

pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub struct SheetFixture<'a> {
    pub name: &'a str,
    pub rows: Vec<Vec<Cell<'a>>>,
}

pub fn write_workbook(path: &Path, sheets: &[SheetFixture]) {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name).unwrap();
        for (r, row) in sheet.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(r as u32, c as u16, *s).unwrap();
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Purchase row laid out like "All Purchases": date, series, volume, cover, item.
pub fn purchase<'a>(series: &'a str, volume: f64, cover: Option<&'a str>, item: &'a str) -> Vec<Cell<'a>> {
    vec![
        Cell::Text("2025-01-01"),
        Cell::Text(series),
        Cell::Number(volume),
        cover.map_or(Cell::Blank, Cell::Text),
        Cell::Text(item),
    ]
}

/// Marketplace export row: item name in column 4, image URL in column 11.
pub fn export_row<'a>(item: &'a str, url: &'a str) -> Vec<Cell<'a>> {
    let mut row: Vec<Cell<'a>> = (0..12).map(|_| Cell::Blank).collect();
    row[0] = Cell::Text("order");
    row[4] = Cell::Text(item);
    row[11] = Cell::Text(url);
    row
}

pub fn tracker_fixture<'a>(purchases: Vec<Vec<Cell<'a>>>, summary: Vec<Vec<Cell<'a>>>) -> Vec<SheetFixture<'a>> {
    let mut purchase_rows = vec![vec![
        Cell::Text("Date"),
        Cell::Text("Series"),
        Cell::Text("Volume #"),
        Cell::Text("Cover"),
        Cell::Text("Item Name"),
    ]];
    purchase_rows.extend(purchases);

    let mut summary_rows = vec![vec![Cell::Text("Series"), Cell::Text("Volumes Owned")]];
    summary_rows.extend(summary);

    vec![
        SheetFixture {
            name: "All Purchases",
            rows: purchase_rows,
        },
        SheetFixture {
            name: "Collection Summary",
            rows: summary_rows,
        },
    ]
}
