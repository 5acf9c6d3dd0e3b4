use crate::model::CellValue;

/// Treats the first row as column labels when at least half of its cells
/// (rounded down, never fewer than one) hold text.
#[must_use]
pub fn is_header_row(row: &[CellValue], width: usize) -> bool {
    let texty = row.iter().filter(|cell| cell.is_text()).count();
    texty >= (width / 2).max(1)
}
