mod detect;
mod error;
mod header;
mod materialize;
mod model;
mod normalize;
mod options;
mod warning;
mod workbook;
mod xlsx_out;

use std::path::Path;

use crate::warning::WarningCode;
use crate::xlsx_out::write_workbook;

pub use detect::{DetectorSettings, PdfTableSource, TableSource};
pub use error::ConvertError;
pub use header::is_header_row;
pub use materialize::{dataset_from_grid, materialize_table};
pub use model::{
    CellValue, ColumnLabel, ConversionReport, NormalizedGrid, RawTable, Sheet, TabularDataset,
};
pub use normalize::normalize_table;
pub use options::{ConvertOptions, PageErrorPolicy};
pub use warning::{ConvertWarning, WarningCode as ConvertWarningCode};
pub use workbook::{
    MAX_SHEET_NAME_CHARS, NO_TABLES_NOTE, SUMMARY_SHEET_NAME, assemble_workbook,
    placeholder_dataset, table_sheet_name,
};
pub use xlsx_out::write_workbook_to_bytes;

fn collect_datasets<S: TableSource>(
    source: &S,
    options: &ConvertOptions,
    warnings: &mut Vec<ConvertWarning>,
) -> Result<Vec<TabularDataset>, ConvertError> {
    let mut datasets = Vec::new();

    for page in 1..=source.page_count() {
        let tables = match source.page_tables(page) {
            Ok(tables) => tables,
            Err(message) => match options.page_errors {
                PageErrorPolicy::Skip => {
                    tracing::warn!(page, %message, "table detection failed; skipping page");
                    warnings.push(
                        ConvertWarning::new(
                            WarningCode::PageExtractionFailed,
                            format!("table detection failed: {message}"),
                        )
                        .with_page(page),
                    );
                    continue;
                }
                PageErrorPolicy::Fail => {
                    return Err(ConvertError::PageExtraction { page, message });
                }
            },
        };
        tracing::debug!(page, tables = tables.len(), "detected tables");

        for table in tables {
            let Some(grid) = normalize_table(table) else {
                warnings.push(
                    ConvertWarning::new(
                        WarningCode::EmptyTableSkipped,
                        "skipping table without rows",
                    )
                    .with_page(page),
                );
                continue;
            };
            let table_page = grid.page;
            let dataset = dataset_from_grid(grid);
            tracing::debug!(
                page = table_page,
                columns = dataset.width(),
                records = dataset.records.len(),
                "materialized table"
            );
            datasets.push(dataset);
        }
    }

    Ok(datasets)
}

/// Walks every page of `source` and lays out one sheet per detected table.
///
/// # Errors
///
/// Fails when the page limit is exceeded or, under
/// [`PageErrorPolicy::Fail`], when a page cannot be read.
pub fn extract_sheets<S: TableSource>(
    source: &S,
    options: &ConvertOptions,
) -> Result<(Vec<Sheet>, ConversionReport), ConvertError> {
    let page_count = source.page_count();
    if let Some(limit) = options.max_pages
        && page_count > limit
    {
        return Err(ConvertError::TooManyPages {
            limit,
            actual: page_count,
        });
    }

    let mut warnings = Vec::new();
    let datasets = collect_datasets(source, options, &mut warnings)?;
    let table_count = datasets.len();
    if table_count == 0 {
        warnings.push(ConvertWarning::new(
            WarningCode::NoTablesDetected,
            "no ruled tables were detected in the document",
        ));
    }

    let sheets = assemble_workbook(datasets);
    let report = ConversionReport {
        page_count,
        table_count,
        sheet_names: sheets.iter().map(|sheet| sheet.name.clone()).collect(),
        warnings,
    };
    Ok((sheets, report))
}

fn open_source(input_pdf: &[u8]) -> Result<PdfTableSource, ConvertError> {
    if input_pdf.is_empty() {
        return Err(ConvertError::InvalidInput("PDF content is empty".to_string()));
    }
    PdfTableSource::open(input_pdf, &DetectorSettings::default())
}

/// Converts PDF bytes into XLSX bytes.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInput`] for empty input and
/// [`ConvertError::MalformedDocument`] when the bytes are not a PDF.
pub fn convert_pdf_bytes_to_xlsx(
    input_pdf: &[u8],
    options: &ConvertOptions,
) -> Result<(Vec<u8>, ConversionReport), ConvertError> {
    let source = open_source(input_pdf)?;
    let (sheets, report) = extract_sheets(&source, options)?;
    let xlsx = write_workbook_to_bytes(&sheets)?;
    Ok((xlsx, report))
}

/// # Errors
///
/// Same as [`convert_pdf_bytes_to_xlsx`], plus I/O failures on either path.
pub fn convert_pdf_to_xlsx(
    input_pdf: &Path,
    output_xlsx: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let bytes = std::fs::read(input_pdf)?;
    let source = open_source(&bytes)?;
    let (sheets, report) = extract_sheets(&source, options)?;
    write_workbook(output_xlsx, &sheets)?;
    Ok(report)
}
