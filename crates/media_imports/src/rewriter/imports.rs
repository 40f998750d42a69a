//! Import synthesis: one default import per binding, placed before the content function.

use oxc_ast::ast::*;
use oxc_ast::{AstBuilder, NONE};
use oxc_span::SPAN;

use crate::registry::Binding;

/// `import <identifier> from "<path>";` for every binding, in order.
pub(super) fn compose_import_declarations<'a>(
    ast: AstBuilder<'a>,
    bindings: &[Binding],
) -> Vec<Statement<'a>> {
    bindings
        .iter()
        .map(|binding| {
            let local = ast.binding_identifier(SPAN, ast.atom(&binding.identifier));
            let specifier = ast.import_declaration_specifier_import_default_specifier(SPAN, local);
            let source = ast.string_literal(SPAN, ast.atom(&binding.path), None);
            Statement::ImportDeclaration(ast.alloc_import_declaration(
                SPAN,
                Some(ast.vec1(specifier)),
                source,
                None,
                NONE,
                ImportOrExportKind::Value,
            ))
        })
        .collect()
}

/// Index of the top-level `function <name>() {}` declaration.
///
/// Only direct children of the program count; nested or exported functions
/// with the same name are not insertion points.
pub(super) fn find_content_function(body: &[Statement<'_>], name: &str) -> Option<usize> {
    body.iter().position(|statement| match statement {
        Statement::FunctionDeclaration(function) => {
            function.id.as_ref().is_some_and(|id| id.name == name)
        }
        _ => false,
    })
}

/// Splice the imports for `bindings` in front of the content function.
///
/// Returns `false`, leaving the program untouched, if there is no such function.
pub(super) fn insert_imports<'a>(
    ast: AstBuilder<'a>,
    program: &mut Program<'a>,
    content_function: &str,
    bindings: &[Binding],
) -> bool {
    let Some(index) = find_content_function(&program.body, content_function) else {
        return false;
    };

    tracing::debug!(index, count = bindings.len(), "inserting media imports");
    for (offset, statement) in compose_import_declarations(ast, bindings).into_iter().enumerate() {
        program.body.insert(index + offset, statement);
    }
    true
}
