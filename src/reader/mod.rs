pub mod cells;
pub mod workbook_reader;

pub use cells::*;
pub use workbook_reader::*;
