//! Error adapter for converting IconryError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use iconry::IconryError;

use crate::available_icons;

/// Adapter giving an [`IconryError`] a diagnostic code and, where useful, a
/// help line.
pub struct ErrorAdapter<'a> {
    err: &'a IconryError,
    help: Option<String>,
}

impl<'a> ErrorAdapter<'a> {
    pub fn new(err: &'a IconryError) -> Self {
        let help = match err {
            IconryError::UnknownIcon(_) => Some(format!(
                "available icons: {}",
                available_icons().join(", ")
            )),
            IconryError::Config(_) => Some(
                "check --size and the [icon] and [export] sections of your config file"
                    .to_string(),
            ),
            _ => None,
        };
        Self { err, help }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.err, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.err)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            IconryError::Io(_) => "iconry::io",
            IconryError::UnknownIcon(_) => "iconry::unknown_icon",
            IconryError::Config(_) => "iconry::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }
}

/// Convert an [`IconryError`] into something miette can render.
pub fn to_reportable(err: &IconryError) -> ErrorAdapter<'_> {
    ErrorAdapter::new(err)
}
