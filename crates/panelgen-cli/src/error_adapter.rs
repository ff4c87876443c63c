//! Rendering of [`PanelgenError`] through miette.
//!
//! Panel parse errors become one report per diagnostic, with labelled
//! snippets of the SVG source. Every other error becomes a single report
//! carrying a `panelgen::*` code and, where the user can act on it, help.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use panelgen::{PanelgenError, aggregator::PatchError};
use panelgen_parser::error::Diagnostic;

/// One panel diagnostic together with the source it points into.
pub struct PanelReport<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl fmt::Debug for PanelReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.diag, f)
    }
}

impl fmt::Display for PanelReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for PanelReport<'_> {}

impl MietteDiagnostic for PanelReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|code| Box::new(code) as Box<dyn fmt::Display + 'a>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(if self.diag.severity().is_error() {
            miette::Severity::Error
        } else {
            miette::Severity::Warning
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(self.diag.labels().iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Any non-parse [`PanelgenError`].
#[derive(Debug)]
pub struct ErrorReport<'a>(&'a PanelgenError);

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for ErrorReport<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            PanelgenError::Io(_) => "panelgen::io",
            PanelgenError::Parse { .. } => "panelgen::parse",
            PanelgenError::Slug(_) => "panelgen::slug",
            PanelgenError::Patch(_) => "panelgen::patch",
            PanelgenError::Registry(_) => "panelgen::registry",
            PanelgenError::Config(_) => "panelgen::config",
            PanelgenError::Manifest(_) => "panelgen::manifest",
            PanelgenError::PanelNotFound(_) => "panelgen::panel",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            PanelgenError::Patch(PatchError::SentinelNotFoundIn { file, sentinel }) => format!(
                "add a `{sentinel}` line to the {file}, or change [sentinels] in the configuration"
            ),
            PanelgenError::Patch(PatchError::SentinelNotFound { sentinel }) => {
                format!("add a `{sentinel}` line to the file")
            }
            PanelgenError::Manifest(_) => {
                "run `panelgen create-manifest <slug>` to create plugin.json".to_string()
            }
            PanelgenError::Slug(_) => {
                "slugs become file and class names, e.g. `Gain` or `VCO-2`".to_string()
            }
            PanelgenError::Registry(_) => {
                "delete the registry file to rebuild it on the next run".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Splits `err` into the reports shown to the user, one per panel diagnostic.
pub fn to_reportables<'a>(err: &'a PanelgenError) -> Vec<Box<dyn MietteDiagnostic + 'a>> {
    match err {
        PanelgenError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Box::new(PanelReport { diag, src }) as Box<dyn MietteDiagnostic + 'a>)
            .collect(),
        _ => vec![Box::new(ErrorReport(err)) as Box<dyn MietteDiagnostic + 'a>],
    }
}
