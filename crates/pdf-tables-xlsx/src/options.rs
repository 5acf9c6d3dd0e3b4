use std::str::FromStr;

/// What to do when the detector fails on a single page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageErrorPolicy {
    /// Treat the page as having no tables and record a warning.
    #[default]
    Skip,
    /// Abort the conversion.
    Fail,
}

impl FromStr for PageErrorPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "invalid page error policy '{other}', expected skip or fail"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub page_errors: PageErrorPolicy,
    pub max_pages: Option<usize>,
}
