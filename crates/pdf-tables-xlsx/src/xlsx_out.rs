use std::path::Path;

use rust_xlsxwriter::{ColNum, RowNum, Workbook, Worksheet};

use crate::error::ConvertError;
use crate::model::{CellValue, ColumnLabel, Sheet};

fn position(sheet: &str, row: usize, col: usize) -> Result<(RowNum, ColNum), ConvertError> {
    let row = RowNum::try_from(row).map_err(|_| ConvertError::SheetTooLarge {
        sheet: sheet.to_string(),
        reason: format!("row {row} is out of range"),
    })?;
    let col = ColNum::try_from(col).map_err(|_| ConvertError::SheetTooLarge {
        sheet: sheet.to_string(),
        reason: format!("column {col} is out of range"),
    })?;
    Ok((row, col))
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    cell: &CellValue,
) -> Result<(), ConvertError> {
    match cell {
        CellValue::Text(text) => {
            worksheet.write_string(row, col, text)?;
        }
        CellValue::Number(value) => {
            worksheet.write_number(row, col, *value)?;
        }
        CellValue::Blank => {}
    }
    Ok(())
}

fn build_workbook(sheets: &[Sheet]) -> Result<Workbook, ConvertError> {
    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, label) in sheet.dataset.labels.iter().enumerate() {
            let (row, col) = position(&sheet.name, 0, col)?;
            match label {
                ColumnLabel::Named(name) => {
                    worksheet.write_string(row, col, name)?;
                }
                ColumnLabel::Index(index) => {
                    // Bounded by the column limit, so exact in f64.
                    #[allow(clippy::cast_precision_loss)]
                    let index = *index as f64;
                    worksheet.write_number(row, col, index)?;
                }
            }
        }

        for (record_index, record) in sheet.dataset.records.iter().enumerate() {
            for (col, cell) in record.iter().enumerate() {
                let (row, col) = position(&sheet.name, record_index + 1, col)?;
                write_cell(worksheet, row, col, cell)?;
            }
        }
    }

    Ok(workbook)
}

pub(crate) fn write_workbook(path: &Path, sheets: &[Sheet]) -> Result<(), ConvertError> {
    let mut workbook = build_workbook(sheets)?;
    workbook.save(path)?;
    Ok(())
}

/// Encodes `sheets` as an in-memory XLSX workbook, in order.
///
/// # Errors
///
/// Returns [`ConvertError::SheetTooLarge`] when a sheet does not fit the
/// XLSX grid and [`ConvertError::Workbook`] when encoding fails.
pub fn write_workbook_to_bytes(sheets: &[Sheet]) -> Result<Vec<u8>, ConvertError> {
    let mut workbook = build_workbook(sheets)?;
    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::write_workbook_to_bytes;
    use crate::workbook::assemble_workbook;

    #[test]
    fn placeholder_workbook_encodes_as_zip() {
        let bytes = write_workbook_to_bytes(&assemble_workbook(Vec::new()))
            .expect("placeholder workbook should encode");
        assert!(bytes.starts_with(b"PK"));
    }
}
