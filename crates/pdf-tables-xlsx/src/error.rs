use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to open PDF: {0}")]
    MalformedDocument(String),

    #[error("failed to extract tables from page {page}: {message}")]
    PageExtraction { page: usize, message: String },

    #[error("document has {actual} pages, limit is {limit}")]
    TooManyPages { limit: usize, actual: usize },

    #[error("sheet '{sheet}' does not fit in a worksheet: {reason}")]
    SheetTooLarge { sheet: String, reason: String },

    #[error("XLSX write error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
