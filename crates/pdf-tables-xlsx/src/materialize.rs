use crate::header::is_header_row;
use crate::model::{ColumnLabel, NormalizedGrid, TabularDataset};

#[must_use]
pub fn materialize_table(grid: NormalizedGrid, has_header: bool) -> TabularDataset {
    if grid.width == 0 {
        return TabularDataset {
            labels: Vec::new(),
            records: Vec::new(),
        };
    }

    let mut rows = grid.rows.into_iter();
    if has_header && let Some(first) = rows.next() {
        return TabularDataset {
            labels: first
                .iter()
                .map(|cell| ColumnLabel::Named(cell.to_label()))
                .collect(),
            records: rows.collect(),
        };
    }

    TabularDataset {
        labels: (0..grid.width).map(ColumnLabel::Index).collect(),
        records: rows.collect(),
    }
}

/// Classifies the first row and builds the dataset in one step.
#[must_use]
pub fn dataset_from_grid(grid: NormalizedGrid) -> TabularDataset {
    let has_header = grid
        .rows
        .first()
        .is_some_and(|first| is_header_row(first, grid.width));
    materialize_table(grid, has_header)
}

#[cfg(test)]
mod tests {
    use super::{dataset_from_grid, materialize_table};
    use crate::model::{CellValue, ColumnLabel, NormalizedGrid};

    fn grid(rows: Vec<Vec<CellValue>>) -> NormalizedGrid {
        let width = rows.first().map_or(0, Vec::len);
        NormalizedGrid {
            page: 1,
            width,
            rows,
        }
    }

    fn numbers(values: &[f64]) -> Vec<CellValue> {
        values.iter().copied().map(CellValue::Number).collect()
    }

    #[test]
    fn header_row_becomes_labels() {
        let dataset = materialize_table(
            grid(vec![
                vec![" Name ".into(), CellValue::Blank],
                vec!["Alice".into(), "30".into()],
                vec!["Bob".into(), "22".into()],
            ]),
            true,
        );

        assert_eq!(
            dataset.labels,
            vec![
                ColumnLabel::Named("Name".to_string()),
                ColumnLabel::Named(String::new()),
            ]
        );
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.records[0], vec!["Alice".into(), "30".into()]);
    }

    #[test]
    fn no_header_keeps_every_row_under_positions() {
        let dataset = materialize_table(
            grid(vec![
                numbers(&[1.0, 2.0, 3.0]),
                numbers(&[4.0, 5.0, 6.0]),
                numbers(&[7.0, 8.0, 9.0]),
            ]),
            false,
        );

        assert_eq!(
            dataset.labels,
            vec![
                ColumnLabel::Index(0),
                ColumnLabel::Index(1),
                ColumnLabel::Index(2),
            ]
        );
        assert_eq!(dataset.records.len(), 3);
        assert_eq!(dataset.records[0], numbers(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn classification_drives_the_split() {
        let texty = dataset_from_grid(grid(vec![
            vec!["Name".into(), "Age".into()],
            vec!["Alice".into(), CellValue::Number(30.0)],
        ]));
        assert_eq!(texty.records.len(), 1);

        let numeric = dataset_from_grid(grid(vec![
            numbers(&[1.0, 2.0]),
            numbers(&[3.0, 4.0]),
        ]));
        assert_eq!(numeric.records.len(), 2);
        assert_eq!(numeric.labels[1], ColumnLabel::Index(1));
    }

    #[test]
    fn every_record_matches_label_count() {
        let dataset = dataset_from_grid(grid(vec![
            vec!["a".into(), "b".into(), CellValue::Blank],
            vec![CellValue::Blank, CellValue::Blank, CellValue::Blank],
        ]));
        assert!(
            dataset
                .records
                .iter()
                .all(|record| record.len() == dataset.width())
        );
    }

    #[test]
    fn zero_width_grid_has_no_columns_or_records() {
        let dataset = dataset_from_grid(NormalizedGrid {
            page: 1,
            width: 0,
            rows: vec![vec![], vec![]],
        });
        assert!(dataset.labels.is_empty());
        assert!(dataset.records.is_empty());
    }
}
