//! Source-to-source entry point: parse, rewrite, print.

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;

use crate::diagnostic::Diagnostic;
use crate::{ImportMediaOptions, MediaImporter};

/// An import added to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResultImport {
    /// The generated local name, e.g. `imagepng$recmamdximport`.
    pub identifier: String,
    /// The module specifier, e.g. `./image.png`.
    pub specifier: String,
}

/// Output from [`transform`].
#[derive(Debug)]
pub struct TransformResult {
    /// The rewritten JavaScript. Equal to the input when parsing failed.
    pub code: String,
    /// Imports that were inserted, in output order.
    pub imports: Vec<TransformResultImport>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Rewrite the media paths of a compiled MDX module given as source text.
///
/// Top-level `return` is accepted so that MDX's `function-body` output format
/// parses. On parse errors the source is returned unchanged along with the
/// errors; imports that could not be placed produce a warning.
///
/// ```
/// use media_imports::{ImportMediaOptions, transform};
/// use oxc_span::SourceType;
///
/// let source = r#"function _createMdxContent(props) { return <img src="./image.png" />; }"#;
/// let result = transform(source, SourceType::jsx(), ImportMediaOptions::new());
/// assert!(result.code.contains(r#"import imagepng$recmamdximport from "./image.png";"#));
/// ```
pub fn transform(
    source_text: &str,
    source_type: SourceType,
    options: ImportMediaOptions,
) -> TransformResult {
    let allocator = Allocator::default();
    let parse_options = ParseOptions { allow_return_outside_function: true, ..ParseOptions::default() };
    let mut ret = Parser::new(&allocator, source_text, source_type)
        .with_options(parse_options)
        .parse();

    if !ret.errors.is_empty() || ret.panicked {
        return TransformResult {
            code: source_text.to_string(),
            imports: Vec::new(),
            diagnostics: Diagnostic::from_oxc_list(source_text, &ret.errors),
        };
    }

    let content_function = options.get_content_function().to_string();
    let result = MediaImporter::new(&allocator, options).build(&mut ret.program);

    let mut diagnostics = Vec::new();
    if result.dropped_imports() {
        diagnostics.push(Diagnostic::dropped_imports(&content_function, result.bindings.len()));
    }

    let imports = if result.inserted {
        result
            .bindings
            .into_iter()
            .map(|binding| TransformResultImport {
                identifier: binding.identifier,
                specifier: binding.path,
            })
            .collect()
    } else {
        Vec::new()
    };

    TransformResult { code: Codegen::new().build(&ret.program).code, imports, diagnostics }
}
