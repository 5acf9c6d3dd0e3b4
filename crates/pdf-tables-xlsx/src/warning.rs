#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    PageExtractionFailed,
    EmptyTableSkipped,
    NoTablesDetected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertWarning {
    pub code: WarningCode,
    pub message: String,
    pub page: Option<usize>,
}

impl ConvertWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            page: None,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }
}
