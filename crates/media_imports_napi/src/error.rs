use napi_derive::napi;

use media_imports::{Diagnostic, DiagnosticLabel, DiagnosticSeverity};

#[napi(object, use_nullable = true)]
#[derive(Clone)]
pub struct TransformError {
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<ErrorLabel>,
    pub help_message: Option<String>,
}

impl TransformError {
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Vec<Self> {
        diagnostics.into_iter().map(Self::from).collect()
    }
}

impl From<Diagnostic> for TransformError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            severity: Severity::from(diagnostic.severity),
            message: diagnostic.text,
            labels: diagnostic.labels.into_iter().map(ErrorLabel::from).collect(),
            help_message: (!diagnostic.hint.is_empty()).then_some(diagnostic.hint),
        }
    }
}

#[napi(object, use_nullable = true)]
#[derive(Clone)]
pub struct ErrorLabel {
    pub message: Option<String>,
    pub start: u32,
    pub end: u32,
    /// 1-based line number in the source.
    pub line: u32,
    /// 0-based column number in the source.
    pub column: u32,
}

impl From<DiagnosticLabel> for ErrorLabel {
    fn from(label: DiagnosticLabel) -> Self {
        Self {
            message: label.text,
            start: label.start,
            end: label.end,
            line: label.line,
            column: label.column,
        }
    }
}

#[napi(string_enum)]
#[derive(Clone)]
pub enum Severity {
    Error,
    Warning,
    Advice,
}

impl From<DiagnosticSeverity> for Severity {
    fn from(value: DiagnosticSeverity) -> Self {
        match value {
            DiagnosticSeverity::Error => Self::Error,
            DiagnosticSeverity::Warning => Self::Warning,
            DiagnosticSeverity::Hint => Self::Advice,
        }
    }
}
