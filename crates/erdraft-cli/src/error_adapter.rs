//! Error adapter for converting ErdraftError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use erdraft::{ErdraftError, GenerateError, export::ExportError};

/// Adapter rendering an [`ErdraftError`] as a miette diagnostic.
///
/// The input text has no source spans worth pointing at (parsing is
/// fail-soft), so only a code and an optional help line are attached.
pub struct ErrorAdapter<'a>(pub &'a ErdraftError);

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
            ErdraftError::Io(_) => "erdraft::io",
            ErdraftError::Config(_) => "erdraft::config",
            ErdraftError::Generate(_) => "erdraft::generate",
            ErdraftError::Export(err) => export_code(err),
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ErdraftError::Generate(
                GenerateError::Request(_) | GenerateError::Unavailable(_),
            ) => "is the Ollama server running? Use --structured to skip the text generator",
            ErdraftError::Export(ExportError::UnknownEntity { .. }) => {
                "declare every relationship endpoint with an `Entity:` line"
            }
            ErdraftError::Export(ExportError::Render(_) | ExportError::MissingOutput(_)) => {
                "make sure Graphviz is installed and `dot` is on PATH"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

fn export_code(err: &ExportError) -> &'static str {
    match err {
        ExportError::UnknownEntity { .. } => "erdraft::export::unknown_entity",
        ExportError::NotRendered => "erdraft::export::not_rendered",
        ExportError::MissingOutput(_) => "erdraft::export::missing_output",
        ExportError::Render(_) => "erdraft::export::render",
        ExportError::Image(_) => "erdraft::export::image",
        ExportError::Archive(_) => "erdraft::export::archive",
        ExportError::Io(_) => "erdraft::export::io",
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use super::*;

    fn code(err: &ErdraftError) -> String {
        ErrorAdapter(err).code().unwrap().to_string()
    }

    fn help(err: &ErdraftError) -> Option<String> {
        ErrorAdapter(err).help().map(|h| h.to_string())
    }

    #[test]
    fn test_codes() {
        let io = ErdraftError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(code(&io), "erdraft::io");

        let config = ErdraftError::Config("bad".to_string());
        assert_eq!(code(&config), "erdraft::config");

        let unknown = ErdraftError::from(ExportError::UnknownEntity {
            name: "Ghost".to_string(),
        });
        assert_eq!(code(&unknown), "erdraft::export::unknown_entity");

        let missing = ErdraftError::from(ExportError::MissingOutput(PathBuf::from("er.png")));
        assert_eq!(code(&missing), "erdraft::export::missing_output");
    }

    #[test]
    fn test_help() {
        let unreachable = ErdraftError::from(GenerateError::Request("refused".to_string()));
        assert!(help(&unreachable).unwrap().contains("--structured"));

        let render = ErdraftError::from(ExportError::Render("dot not found".to_string()));
        assert!(help(&render).unwrap().contains("Graphviz"));

        let config = ErdraftError::Config("bad".to_string());
        assert_eq!(help(&config), None);
    }

    #[test]
    fn test_display_passthrough() {
        let err = ErdraftError::from(ExportError::NotRendered);
        assert_eq!(ErrorAdapter(&err).to_string(), err.to_string());
    }
}
