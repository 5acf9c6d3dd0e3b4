use std::fmt::{Display, Formatter};

use pdf_tables_xlsx::ConvertError;
use worker::{Response, Result};

use crate::models::{EMPTY_FILE_MESSAGE, UNREADABLE_PDF_MESSAGE};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    Unprocessable(String),
    Internal(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::Unprocessable(_) => "unprocessable_document",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::PayloadTooLarge(message)
            | Self::Unprocessable(message)
            | Self::Internal(message) => message,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::PayloadTooLarge(_) => 413,
            Self::Unprocessable(_) => 422,
            Self::Internal(_) => 500,
        }
    }

    pub fn into_response(self) -> Result<Response> {
        let mut response = Response::error(self.message(), self.status_code())?;
        response
            .headers_mut()
            .set("Content-Type", "text/plain; charset=utf-8")?;
        response.headers_mut().set("Cache-Control", "no-store")?;
        Ok(response)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<worker::Error> for ApiError {
    fn from(error: worker::Error) -> Self {
        Self::Internal(error.to_string())
    }
}

impl From<ConvertError> for ApiError {
    fn from(error: ConvertError) -> Self {
        match error {
            ConvertError::InvalidInput(_) => Self::BadRequest(EMPTY_FILE_MESSAGE.to_string()),
            ConvertError::MalformedDocument(_) => {
                Self::Unprocessable(UNREADABLE_PDF_MESSAGE.to_string())
            }
            ConvertError::PageExtraction { .. } | ConvertError::TooManyPages { .. } => {
                Self::Unprocessable(error.to_string())
            }
            ConvertError::SheetTooLarge { .. } | ConvertError::Workbook(_) | ConvertError::Io(_) => {
                Self::Internal(error.to_string())
            }
        }
    }
}
