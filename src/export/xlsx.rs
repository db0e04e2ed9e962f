//! Workbook serialization: one sheet per export call, auto-sized columns.

use rust_xlsxwriter::Workbook;
use tracing::debug;

use super::rows::{Cell, Sheet};
use crate::errors::{Result, VisitError};

/// Serialize a projected sheet into XLSX bytes.
///
/// The caller must have short-circuited the "no data" case already; an
/// empty row set is an error here, never a zero-row workbook.
pub fn workbook_bytes(sheet: &Sheet) -> Result<Vec<u8>> {
    if sheet.rows.is_empty() {
        return Err(VisitError::workbook(format!(
            "Refusing to serialize empty sheet '{}'",
            sheet.name
        )));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet.name)?;

    for (col, label) in sheet.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, *label)?;
    }

    for (r, row) in sheet.rows.iter().enumerate() {
        let row_num = (r + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(row_num, col as u16, s)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(row_num, col as u16, *n)?;
                }
                Cell::Empty => {}
            }
        }
    }

    for (col, width) in column_widths(sheet).into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width as f64)?;
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(
        "Serialized sheet '{}': {} rows, {} bytes",
        sheet.name,
        sheet.rows.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Per-column width in character units:
/// max(header length, longest rendered cell) + 2.
pub fn column_widths(sheet: &Sheet) -> Vec<usize> {
    sheet
        .columns
        .iter()
        .enumerate()
        .map(|(col, label)| {
            let mut width = label.chars().count();
            for row in &sheet.rows {
                if let Some(cell) = row.get(col) {
                    width = width.max(cell.rendered().chars().count());
                }
            }
            width + 2
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: Vec<Vec<Cell>>) -> Sheet {
        Sheet {
            name: "Partners",
            columns: &["Id", "Employee Name"],
            rows,
        }
    }

    #[test]
    fn test_empty_rows_is_an_error() {
        let err = workbook_bytes(&sheet(vec![])).unwrap_err();
        assert!(matches!(err, VisitError::Workbook(_)));
    }

    #[test]
    fn test_workbook_bytes_is_xlsx() {
        let s = sheet(vec![vec![
            Cell::Number(1.0),
            Cell::Text("Asha Rao".into()),
        ]]);
        let bytes = workbook_bytes(&s).unwrap();
        // XLSX is a ZIP container; check the magic.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_widths_cover_header_and_cells() {
        let s = sheet(vec![
            vec![Cell::Number(12345.0), Cell::Text("A".into())],
            vec![Cell::Empty, Cell::Text("A very long employee name".into())],
        ]);
        let widths = column_widths(&s);

        // "12345" (5) beats "Id" (2); long cell beats "Employee Name".
        assert_eq!(widths[0], 5 + 2);
        assert_eq!(widths[1], "A very long employee name".len() + 2);

        for (col, label) in s.columns.iter().enumerate() {
            assert!(widths[col] >= label.len() + 2);
            for row in &s.rows {
                assert!(widths[col] >= row[col].rendered().len() + 2);
            }
        }
    }
}
