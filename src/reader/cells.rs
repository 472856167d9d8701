use anyhow::{Result, anyhow, bail};
use calamine::Data;

/// One worksheet row, aligned so that index 0 is column A.
pub type Row = Vec<Data>;

/// Text content of a cell, or `None` for empty cells and blank text.
///
/// Non-text cells use their display form, so a float `3.0` reads as `"3"`.
pub fn cell_text(row: &[Data], col: usize) -> Option<String> {
    match row.get(col)? {
        Data::Empty => None,
        Data::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        other => {
            let rendered = other.to_string();
            if rendered.trim().is_empty() {
                None
            } else {
                Some(rendered)
            }
        }
    }
}

/// Integer content of a cell. Floats are truncated toward zero.
///
/// Returns `Ok(None)` when the cell is absent; any value that cannot be read
/// as an integer is an error.
pub fn cell_integer(row: &[Data], col: usize) -> Result<Option<i64>> {
    let Some(cell) = row.get(col) else {
        return Ok(None);
    };

    match cell {
        Data::Empty => Ok(None),
        Data::Int(i) => Ok(Some(*i)),
        Data::Float(f) => {
            if !f.is_finite() {
                bail!("non-finite number {} in column {}", f, col);
            }
            Ok(Some(f.trunc() as i64))
        }
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|e| anyhow!("cannot read {:?} in column {} as an issue number: {}", s, col, e))
        }
        other => bail!("cannot read {:?} in column {} as an issue number", other, col),
    }
}
