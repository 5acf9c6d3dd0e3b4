pub const UPLOAD_FIELD: &str = "file";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const OUTPUT_CONTENT_DISPOSITION: &str = "attachment; filename=\"output.xlsx\"";

/// Headers set on every successful conversion response.
pub const XLSX_RESPONSE_HEADERS: [(&str, &str); 3] = [
    ("Content-Type", XLSX_CONTENT_TYPE),
    ("Content-Disposition", OUTPUT_CONTENT_DISPOSITION),
    ("Cache-Control", "no-store"),
];

pub const MISSING_FILE_MESSAGE: &str = "No file uploaded under field \"file\"";
pub const NOT_A_PDF_MESSAGE: &str = "Please upload a .pdf file";
pub const EMPTY_FILE_MESSAGE: &str = "Empty file uploaded";
pub const UNREADABLE_PDF_MESSAGE: &str = "Could not read the uploaded file as a PDF";

pub const MAX_UPLOAD_BYTES_VAR: &str = "MAX_UPLOAD_BYTES";
pub const MAX_PAGES_VAR: &str = "MAX_PAGES";
pub const PAGE_ERRORS_VAR: &str = "PAGE_ERRORS";
