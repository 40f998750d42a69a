//! Options for the media import rewrite.
//!
//! These mirror the `ImportMediaOptions` accepted by the recma plugin. Every
//! field has a default so an empty options value rewrites both markdown and
//! html syntax.

use std::{fmt, str::FromStr};

/// Name of the function compiled MDX uses to produce the document content.
pub const DEFAULT_CONTENT_FUNCTION: &str = "_createMdxContent";

/// The authoring syntax an element came from.
///
/// Markdown images compile to `_components.img`, raw html compiles to a plain
/// `"img"` kind, so either one can be switched off independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// `![alt](./image.png)` and friends, overridable through `_components`.
    Markdown,
    /// Raw `<img src="..." />` written inside the document.
    Html,
}

impl Syntax {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a syntax name is neither `markdown` nor `html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSyntax(pub String);

impl fmt::Display for UnknownSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown syntax `{}`, expected `markdown` or `html`", self.0)
    }
}

impl std::error::Error for UnknownSyntax {}

impl FromStr for Syntax {
    type Err = UnknownSyntax;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            _ => Err(UnknownSyntax(s.to_string())),
        }
    }
}

/// Options for a media import rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportMediaOptions {
    /// Syntaxes whose elements are left untouched.
    ///
    /// `Html` skips elements named by a plain string or identifier,
    /// `Markdown` skips `_components.*` elements.
    pub exclude_syntax: Vec<Syntax>,

    /// Name of the top-level function the imports are inserted before.
    /// Defaults to `"_createMdxContent"`.
    pub content_function: Option<String>,
}

impl ImportMediaOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude one syntax from the rewrite. Excluding the same syntax twice is a no-op.
    #[must_use]
    pub fn with_excluded_syntax(mut self, syntax: Syntax) -> Self {
        if !self.exclude_syntax.contains(&syntax) {
            self.exclude_syntax.push(syntax);
        }
        self
    }

    /// Replace the whole exclusion list.
    #[must_use]
    pub fn with_exclude_syntax(mut self, syntax: impl IntoIterator<Item = Syntax>) -> Self {
        self.exclude_syntax.clear();
        for s in syntax {
            self = self.with_excluded_syntax(s);
        }
        self
    }

    /// Set the name of the content function.
    #[must_use]
    pub fn with_content_function(mut self, name: impl Into<String>) -> Self {
        self.content_function = Some(name.into());
        self
    }

    /// Returns true if elements written in `syntax` should be skipped.
    pub fn excludes(&self, syntax: Syntax) -> bool {
        self.exclude_syntax.contains(&syntax)
    }

    /// Get the content function name, with default fallback.
    pub fn get_content_function(&self) -> &str {
        self.content_function
            .as_deref()
            .unwrap_or(DEFAULT_CONTENT_FUNCTION)
    }
}
