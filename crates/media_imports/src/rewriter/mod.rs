//! The media import rewriter.
//!
//! Runs over a compiled MDX `Program` in three passes that share one
//! [`IdentifierRegistry`]:
//!
//! 1. [`call`] — `_jsx("img", { src: "a.png" })` construction calls
//! 2. [`jsx`] — `<img src="a.png" />` element literals
//! 3. [`imports`] — `import …$recmamdximport from "./a.png"` declarations,
//!    inserted before the content function
//!
//! The passes run strictly in that order, so identifiers are numbered by
//! first sight across the whole document.

use cow_utils::CowUtils;
use oxc_allocator::Allocator;
use oxc_ast::AstBuilder;
use oxc_ast::ast::*;
use oxc_ast_visit::VisitMut;
use oxc_span::SPAN;

use crate::ImportMediaOptions;
use crate::candidates::{CandidateListRewrite, TemplateParts, decompose_list};
use crate::path::{ResourceReference, is_rewritable};
use crate::registry::{Binding, IdentifierRegistry};
use crate::shape::AttributeRole;

mod call;
mod imports;
mod jsx;

/// Attribute appended to hold a stripped query/fragment, e.g. `data-meta="#hash"`.
pub const METADATA_ATTRIBUTE: &str = "data-meta";

/// Output from a media import rewrite.
#[derive(Debug, Default)]
pub struct MediaImportReturn {
    /// One binding per distinct path, in first-seen order.
    pub bindings: Vec<Binding>,
    /// Whether the import declarations were inserted into the program.
    ///
    /// `false` with non-empty `bindings` means the content function was not
    /// found and the imports were dropped.
    pub inserted: bool,
    /// Number of attribute values replaced across both element encodings.
    pub rewritten_attributes: usize,
}

impl MediaImportReturn {
    /// Imports were collected but there was nowhere to put them.
    pub fn dropped_imports(&self) -> bool {
        !self.bindings.is_empty() && !self.inserted
    }
}

/// The replacement for one attribute value.
struct ValueRewrite<'a> {
    value: Expression<'a>,
    /// Query/fragment suffix to keep in a [`METADATA_ATTRIBUTE`].
    metadata: Option<String>,
}

/// Rewrites relative media paths in a compiled MDX program into imports.
///
/// One importer handles one document; [`build`](Self::build) consumes it,
/// so identifier state can never leak from one document into the next.
///
/// ```
/// use media_imports::{ImportMediaOptions, MediaImporter};
/// use oxc_allocator::Allocator;
/// use oxc_parser::Parser;
/// use oxc_span::SourceType;
///
/// let source = r#"function _createMdxContent() { return <img src="a.png#x" srcSet="a.png 2x" />; }"#;
/// let allocator = Allocator::default();
/// let mut ret = Parser::new(&allocator, source, SourceType::jsx()).parse();
/// let result = MediaImporter::new(&allocator, ImportMediaOptions::new()).build(&mut ret.program);
///
/// assert!(result.inserted);
/// assert_eq!(result.bindings[0].identifier, "apng$recmamdximport");
/// assert_eq!(result.rewritten_attributes, 2);
/// ```
pub struct MediaImporter<'a> {
    ast: AstBuilder<'a>,
    options: ImportMediaOptions,
    registry: IdentifierRegistry,
    rewritten_attributes: usize,
}

impl<'a> MediaImporter<'a> {
    pub fn new(allocator: &'a Allocator, options: ImportMediaOptions) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
            options,
            registry: IdentifierRegistry::new(),
            rewritten_attributes: 0,
        }
    }

    /// Rewrite `program` in place.
    pub fn build(mut self, program: &mut Program<'a>) -> MediaImportReturn {
        call::ConstructionCallPass::new(&mut self).visit_program(program);
        jsx::ElementLiteralPass::new(&mut self).visit_program(program);

        let bindings = self.registry.take_bindings();
        let inserted = !bindings.is_empty()
            && imports::insert_imports(
                self.ast,
                program,
                self.options.get_content_function(),
                &bindings,
            );

        if !bindings.is_empty() && !inserted {
            tracing::warn!(
                content_function = self.options.get_content_function(),
                count = bindings.len(),
                "content function not found, media imports dropped"
            );
        }

        MediaImportReturn { bindings, inserted, rewritten_attributes: self.rewritten_attributes }
    }

    /// Compute the replacement for a literal attribute value, if it has one.
    fn rewrite_value(&mut self, role: AttributeRole, value: &str) -> Option<ValueRewrite<'a>> {
        let rewrite = match role {
            AttributeRole::CandidateList => match decompose_list(value)? {
                CandidateListRewrite::Collapsed(path) => {
                    ValueRewrite { value: self.reference(&path), metadata: None }
                }
                CandidateListRewrite::Template(parts) => {
                    ValueRewrite { value: self.template(&parts), metadata: None }
                }
            },
            AttributeRole::Single => {
                if !is_rewritable(value) {
                    return None;
                }
                let reference = ResourceReference::decompose(value);
                ValueRewrite {
                    value: self.reference(&reference.resolved_path),
                    metadata: reference.has_suffix().then_some(reference.suffix),
                }
            }
        };

        tracing::trace!(value, "rewrote media attribute");
        self.rewritten_attributes += 1;
        Some(rewrite)
    }

    /// An identifier expression naming the import bound to `path`.
    fn reference(&mut self, path: &str) -> Expression<'a> {
        let name = self.ast.atom(self.registry.resolve(path));
        self.ast.expression_identifier(SPAN, name)
    }

    /// `` `${a} 2x, ${b} 4x` `` from decomposed template parts.
    fn template(&mut self, parts: &TemplateParts) -> Expression<'a> {
        let last = parts.quasis.len().saturating_sub(1);
        let mut quasis = self.ast.vec_with_capacity(parts.quasis.len());
        for (index, text) in parts.quasis.iter().enumerate() {
            let value = TemplateElementValue {
                raw: self.ast.atom(&escape_template_literal(text)),
                cooked: Some(self.ast.atom(text)),
            };
            quasis.push(self.ast.template_element(SPAN, value, index == last));
        }

        let mut expressions = self.ast.vec_with_capacity(parts.paths.len());
        for path in &parts.paths {
            expressions.push(self.reference(path));
        }

        self.ast.expression_template_literal(SPAN, quasis, expressions)
    }
}

/// Escape text for the raw part of a template literal.
///
/// Backslashes, backticks and `${` would otherwise change the meaning of the
/// literal run.
fn escape_template_literal(s: &str) -> String {
    let s = s.cow_replace('\\', "\\\\");
    let s = s.cow_replace('`', "\\`");
    s.cow_replace("${", "\\${").into_owned()
}
