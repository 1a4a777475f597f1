//! Miette-based diagnostics for configuration errors.
//!
//! Renders a malformed config file with a labeled span at the offending
//! location instead of a bare parse message.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(propline::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: miette::NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: miette::NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic from a TOML parse error. Returns `None` when the
    /// error carries no location.
    #[must_use]
    pub fn from_toml(name: &str, src: &str, err: &toml::de::Error) -> Option<Self> {
        let span = err.span()?;
        let len = span.end.saturating_sub(span.start).max(1);
        let offset = span.start.min(src.len().saturating_sub(1));
        Some(
            Self::new(err.message(), name, src, offset, len)
                .with_help("run `propline config init --force` to regenerate the template"),
        )
    }
}

/// Render a diagnostic as a string (graphical when the terminal supports it).
#[must_use]
pub fn render(diagnostic: ConfigDiagnostic) -> String {
    format!("{:?}", miette::Report::new(diagnostic))
}
