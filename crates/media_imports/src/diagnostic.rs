//! Diagnostics reported by [`transform`](crate::transform).
//!
//! The rewrite itself never fails. Diagnostics come from two places: parse
//! errors in the input (mapped from oxc) and imports that had to be dropped
//! because the content function was missing.

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Hint,
}

/// A labeled source span within a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticLabel {
    pub text: Option<String>,
    /// Byte offset of the span start.
    pub start: u32,
    /// Byte offset of the span end (exclusive).
    pub end: u32,
    /// 1-based line number.
    pub line: u32,
    /// 0-based column number.
    pub column: u32,
}

impl DiagnosticLabel {
    pub fn new(text: Option<String>, start: u32, end: u32, source_text: &str) -> Self {
        let (line, column) = line_column(source_text, start as usize);
        Self { text, start, end, line, column }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub text: String,
    /// Suggestion for fixing the issue, empty if there is none.
    pub hint: String,
    pub labels: Vec<DiagnosticLabel>,
}

impl Diagnostic {
    /// Map an oxc parse diagnostic, resolving its spans against `source_text`.
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_oxc(source_text: &str, diag: &oxc_diagnostics::OxcDiagnostic) -> Self {
        let severity = match diag.severity {
            oxc_diagnostics::Severity::Error => DiagnosticSeverity::Error,
            oxc_diagnostics::Severity::Warning => DiagnosticSeverity::Warning,
            oxc_diagnostics::Severity::Advice => DiagnosticSeverity::Hint,
        };

        let labels = diag
            .labels
            .iter()
            .flatten()
            .map(|label| {
                DiagnosticLabel::new(
                    label.label().map(ToString::to_string),
                    label.offset() as u32,
                    (label.offset() + label.len()) as u32,
                    source_text,
                )
            })
            .collect();

        Self {
            severity,
            text: diag.message.to_string(),
            hint: diag.help.as_ref().map(ToString::to_string).unwrap_or_default(),
            labels,
        }
    }

    pub fn from_oxc_list(source_text: &str, diagnostics: &[oxc_diagnostics::OxcDiagnostic]) -> Vec<Self> {
        diagnostics.iter().map(|d| Self::from_oxc(source_text, d)).collect()
    }

    /// Imports were collected but the content function they belong in was not found.
    pub fn dropped_imports(content_function: &str, count: usize) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            text: format!(
                "{count} media import(s) dropped: no top-level function `{content_function}` found"
            ),
            hint: "The rewritten attributes reference identifiers that are never imported. \
                   Run the rewrite on the compiled MDX program, or set `content_function`."
                .to_string(),
            labels: Vec::new(),
        }
    }
}

/// Convert a UTF-8 byte offset to a 1-based line and 0-based column.
fn line_column(source: &str, offset: usize) -> (u32, u32) {
    let mut line = 1;
    let mut column = 0;
    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (line, column)
}
