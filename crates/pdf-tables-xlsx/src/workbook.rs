use crate::model::{CellValue, ColumnLabel, Sheet, TabularDataset};

pub const MAX_SHEET_NAME_CHARS: usize = 31;
pub const SUMMARY_SHEET_NAME: &str = "Summary";
pub const NO_TABLES_NOTE: &str = "No tables detected";

#[must_use]
pub fn table_sheet_name(index: usize) -> String {
    format!("Table_{index}")
        .chars()
        .take(MAX_SHEET_NAME_CHARS)
        .collect()
}

#[must_use]
pub fn placeholder_dataset() -> TabularDataset {
    TabularDataset {
        labels: vec![ColumnLabel::Named("note".to_string())],
        records: vec![vec![CellValue::Text(NO_TABLES_NOTE.to_string())]],
    }
}

/// Names datasets `Table_1`, `Table_2`, ... in arrival order. An empty input
/// yields the single `Summary` placeholder sheet.
#[must_use]
pub fn assemble_workbook(datasets: Vec<TabularDataset>) -> Vec<Sheet> {
    if datasets.is_empty() {
        return vec![Sheet {
            name: SUMMARY_SHEET_NAME.to_string(),
            dataset: placeholder_dataset(),
        }];
    }

    datasets
        .into_iter()
        .enumerate()
        .map(|(index, dataset)| Sheet {
            name: table_sheet_name(index + 1),
            dataset,
        })
        .collect()
}
