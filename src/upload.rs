use worker::{File, FormEntry, Request};

use crate::error::ApiError;
use crate::models::{EMPTY_FILE_MESSAGE, MISSING_FILE_MESSAGE, NOT_A_PDF_MESSAGE, UPLOAD_FIELD};

pub fn validate_filename(filename: &str) -> Result<(), ApiError> {
    if filename.is_empty() || !filename.to_ascii_lowercase().ends_with(".pdf") {
        return Err(ApiError::BadRequest(NOT_A_PDF_MESSAGE.to_string()));
    }
    Ok(())
}

pub fn validate_size(size: usize, max_upload_bytes: Option<usize>) -> Result<(), ApiError> {
    match max_upload_bytes {
        Some(limit) if size > limit => Err(ApiError::PayloadTooLarge(format!(
            "PDF exceeds the {limit} byte upload limit"
        ))),
        _ => Ok(()),
    }
}

pub fn validate_content(bytes: &[u8]) -> Result<(), ApiError> {
    if bytes.is_empty() {
        return Err(ApiError::BadRequest(EMPTY_FILE_MESSAGE.to_string()));
    }
    Ok(())
}

/// Only a file part under the upload field counts; text fields and absent
/// entries are rejected alike.
pub fn require_file(entry: Option<FormEntry>) -> Result<File, ApiError> {
    match entry {
        Some(FormEntry::File(file)) => Ok(file),
        _ => Err(ApiError::BadRequest(MISSING_FILE_MESSAGE.to_string())),
    }
}

/// Pulls the PDF out of the multipart body. Name and size are checked before
/// the content is read.
pub async fn read_pdf_upload(
    req: &mut Request,
    max_upload_bytes: Option<usize>,
) -> Result<Vec<u8>, ApiError> {
    // A body that is not multipart has no upload field either.
    let entry = req
        .form_data()
        .await
        .ok()
        .and_then(|form| form.get(UPLOAD_FIELD));
    let file = require_file(entry)?;

    validate_filename(&file.name())?;
    validate_size(file.size(), max_upload_bytes)?;

    let bytes = file.bytes().await?;
    validate_content(&bytes)?;
    Ok(bytes)
}
