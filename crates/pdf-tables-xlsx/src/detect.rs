use pdfplumber::{Pdf, Strategy, TableSettings};

use crate::error::ConvertError;
use crate::model::{CellValue, RawTable};

/// Table geometry settings handed to the detector for every page. Both axes
/// always take their edges from ruling lines and rectangle borders.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorSettings {
    pub intersection_x_tolerance: f64,
    pub intersection_y_tolerance: f64,
    pub snap_tolerance: f64,
    pub join_tolerance: f64,
    pub edge_min_length: f64,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            intersection_x_tolerance: 5.0,
            intersection_y_tolerance: 5.0,
            snap_tolerance: 3.0,
            join_tolerance: 3.0,
            edge_min_length: 3.0,
        }
    }
}

impl DetectorSettings {
    #[must_use]
    pub fn to_table_settings(&self) -> TableSettings {
        TableSettings {
            strategy: Strategy::Lattice,
            snap_tolerance: self.snap_tolerance,
            snap_x_tolerance: self.snap_tolerance,
            snap_y_tolerance: self.snap_tolerance,
            join_tolerance: self.join_tolerance,
            join_x_tolerance: self.join_tolerance,
            join_y_tolerance: self.join_tolerance,
            edge_min_length: self.edge_min_length,
            intersection_x_tolerance: self.intersection_x_tolerance,
            intersection_y_tolerance: self.intersection_y_tolerance,
            ..TableSettings::default()
        }
    }
}

/// A document the conversion can walk page by page.
pub trait TableSource {
    fn page_count(&self) -> usize;

    /// Raw tables of the 1-based `page`, in detection order.
    ///
    /// # Errors
    ///
    /// Returns a message when the page cannot be interpreted.
    fn page_tables(&self, page: usize) -> Result<Vec<RawTable>, String>;
}

pub struct PdfTableSource {
    pdf: Pdf,
    settings: TableSettings,
}

impl PdfTableSource {
    /// # Errors
    ///
    /// Returns [`ConvertError::MalformedDocument`] when the bytes are not a
    /// readable PDF.
    pub fn open(bytes: &[u8], settings: &DetectorSettings) -> Result<Self, ConvertError> {
        let pdf = Pdf::open(bytes, None)
            .map_err(|error| ConvertError::MalformedDocument(error.to_string()))?;
        Ok(Self {
            pdf,
            settings: settings.to_table_settings(),
        })
    }
}

impl TableSource for PdfTableSource {
    fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    fn page_tables(&self, page: usize) -> Result<Vec<RawTable>, String> {
        let index = page.checked_sub(1).ok_or("pages are 1-based")?;
        let pdf_page = self.pdf.page(index).map_err(|error| error.to_string())?;

        let tables = pdf_page
            .find_tables(&self.settings)
            .into_iter()
            .map(|table| {
                let rows = table
                    .rows
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|cell| CellValue::from(cell.text))
                            .collect()
                    })
                    .collect();
                RawTable::new(page, rows)
            })
            .collect();
        Ok(tables)
    }
}
