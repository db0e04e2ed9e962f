//! Export pipeline: resolve a date range, project stored records into
//! labeled rows, and serialize them as a single-sheet XLSX workbook.

pub mod range;
pub mod rows;
pub mod xlsx;

pub use range::{DateRange, QuickFilter};
pub use rows::{Cell, Sheet};
pub use xlsx::workbook_bytes;
