use crate::model::{CellValue, NormalizedGrid, RawTable};

/// Pads every row with blanks up to the widest row. Tables without rows
/// produce nothing.
#[must_use]
pub fn normalize_table(table: RawTable) -> Option<NormalizedGrid> {
    if table.rows.is_empty() {
        return None;
    }

    let width = table.rows.iter().map(Vec::len).max().unwrap_or(0);
    let rows = table
        .rows
        .into_iter()
        .map(|mut row| {
            row.resize(width, CellValue::Blank);
            row
        })
        .collect();

    Some(NormalizedGrid {
        page: table.page,
        width,
        rows,
    })
}
