/// One cell as handed over by the table detector.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Blank,
    Number(f64),
}

impl CellValue {
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Header coercion: trimmed text, empty string for blanks.
    #[must_use]
    pub fn to_label(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Blank => String::new(),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Blank, Self::Text)
    }
}

#[cfg(test)]
impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Rows exactly as detected; rows may differ in length.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub page: usize,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    #[must_use]
    pub fn new(page: usize, rows: Vec<Vec<CellValue>>) -> Self {
        Self { page, rows }
    }
}

/// A table whose rows all share `width` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGrid {
    pub page: usize,
    pub width: usize,
    pub rows: Vec<Vec<CellValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnLabel {
    Named(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabularDataset {
    pub labels: Vec<ColumnLabel>,
    pub records: Vec<Vec<CellValue>>,
}

impl TabularDataset {
    #[must_use]
    pub fn width(&self) -> usize {
        self.labels.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub dataset: TabularDataset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub page_count: usize,
    pub table_count: usize,
    pub sheet_names: Vec<String>,
    pub warnings: Vec<crate::warning::ConvertWarning>,
}
