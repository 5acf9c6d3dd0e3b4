use std::str::FromStr;

use pdf_tables_xlsx::{ConvertOptions, PageErrorPolicy};
use worker::Env;

use crate::models::{MAX_PAGES_VAR, MAX_UPLOAD_BYTES_VAR, PAGE_ERRORS_VAR};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub max_upload_bytes: Option<usize>,
    pub convert: ConvertOptions,
}

fn parse_limit(name: &str, raw: Option<String>, problems: &mut Vec<String>) -> Option<usize> {
    let raw = raw?;
    match raw.trim().parse::<usize>() {
        Ok(0) => {
            problems.push(format!("{name} must be greater than zero"));
            None
        }
        Ok(value) => Some(value),
        Err(error) => {
            problems.push(format!("{name}='{raw}' is not a number: {error}"));
            None
        }
    }
}

impl AppConfig {
    pub fn from_env(env: &Env) -> Self {
        let (config, problems) =
            Self::from_lookup(|name| env.var(name).ok().map(|var| var.to_string()));
        for problem in problems {
            worker::console_error!("ignoring invalid configuration: {problem}");
        }
        config
    }

    /// Builds the configuration from variable lookups; invalid values fall
    /// back to defaults and are reported in the second element.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();

        let max_upload_bytes = parse_limit(
            MAX_UPLOAD_BYTES_VAR,
            lookup(MAX_UPLOAD_BYTES_VAR),
            &mut problems,
        );
        let max_pages = parse_limit(MAX_PAGES_VAR, lookup(MAX_PAGES_VAR), &mut problems);
        let page_errors = match lookup(PAGE_ERRORS_VAR) {
            Some(raw) => PageErrorPolicy::from_str(&raw).unwrap_or_else(|error| {
                problems.push(format!("{PAGE_ERRORS_VAR}: {error}"));
                PageErrorPolicy::default()
            }),
            None => PageErrorPolicy::default(),
        };

        let config = Self {
            max_upload_bytes,
            convert: ConvertOptions {
                page_errors,
                max_pages,
            },
        };
        (config, problems)
    }
}
