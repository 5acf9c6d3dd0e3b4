use pdf_tables_xlsx::{ConvertOptions, convert_pdf_bytes_to_xlsx};

use crate::error::ApiError;

pub fn convert_pdf_bytes(pdf_bytes: &[u8], options: &ConvertOptions) -> Result<Vec<u8>, ApiError> {
    let (xlsx, report) = convert_pdf_bytes_to_xlsx(pdf_bytes, options).map_err(|error| {
        worker::console_error!("pdf conversion failed: {error}");
        ApiError::from(error)
    })?;

    worker::console_log!(
        "pdf conversion completed: pages={}, tables={}, sheets={}, warnings={}",
        report.page_count,
        report.table_count,
        report.sheet_names.len(),
        report.warnings.len()
    );
    for warning in &report.warnings {
        worker::console_log!(
            "  {:?} page={:?}: {}",
            warning.code,
            warning.page,
            warning.message
        );
    }

    Ok(xlsx)
}
