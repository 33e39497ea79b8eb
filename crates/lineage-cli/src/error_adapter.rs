//! Error adapter for converting DiagramError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Node maps carry
//! no source spans, so a report consists of a code, the message and, where
//! the fix is obvious, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan};

use lineage::DiagramError;

/// Renders `err` as a graphical miette report.
///
/// Falls back to the plain message if the report cannot be formatted.
pub fn render_report(err: &DiagramError) -> String {
    let mut report = String::new();
    match GraphicalReportHandler::new().render_report(&mut report, &ErrorAdapter(err)) {
        Ok(()) => report,
        Err(_) => err.to_string(),
    }
}

/// Adapter exposing a [`DiagramError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a DiagramError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DiagramError::InvalidArgument(_) => "lineage::invalid_argument",
            DiagramError::NotFound(_) => "lineage::not_found",
            DiagramError::Cycle { .. } => "lineage::cycle",
            DiagramError::Config(_) => "lineage::config",
            DiagramError::Io(_) => "lineage::io",
            DiagramError::Input(_) => "lineage::input",
            DiagramError::Export(_) => "lineage::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            DiagramError::NotFound(name) => Some(Box::new(format!(
                "add an entry named \"{name}\" to the node map, or pick another node with --focus"
            ))),
            DiagramError::Cycle { name } => Some(Box::new(format!(
                "\"{name}\" is reached again through its own parent or children; remove one of the references"
            ))),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn code(err: &DiagramError) -> String {
        ErrorAdapter(err)
            .code()
            .map(|code| code.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            code(&DiagramError::InvalidArgument("x".to_string())),
            "lineage::invalid_argument"
        );
        assert_eq!(
            code(&DiagramError::NotFound("Class".to_string())),
            "lineage::not_found"
        );
        assert_eq!(
            code(&DiagramError::Io(io::Error::other("disk"))),
            "lineage::io"
        );
        assert_eq!(
            code(&DiagramError::Input("bad".to_string())),
            "lineage::input"
        );
    }

    #[test]
    fn test_message_is_passed_through() {
        let err = DiagramError::NotFound("Class".to_string());

        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Node data for \"Class\" does not exist in the provided node map"
        );
    }

    #[test]
    fn test_help_for_not_found_and_cycle() {
        let not_found = DiagramError::NotFound("Class".to_string());
        let cycle = DiagramError::Cycle {
            name: "Loop".to_string(),
        };
        let config = DiagramError::Config("bad".to_string());

        let help = ErrorAdapter(&not_found).help().unwrap().to_string();
        assert!(help.contains("--focus"));
        let help = ErrorAdapter(&cycle).help().unwrap().to_string();
        assert!(help.contains("\"Loop\""));
        assert!(ErrorAdapter(&config).help().is_none());
    }

    #[test]
    fn test_report_renders() {
        let err = DiagramError::Cycle {
            name: "Loop".to_string(),
        };

        let out = render_report(&err);

        assert!(out.contains("lineage::cycle"));
        assert!(out.contains("Loop"));
    }
}
