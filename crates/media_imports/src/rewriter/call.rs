//! Construction-call pass: `_jsx("img", { src: "image.png" })`.

use oxc_allocator::Vec as ArenaVec;
use oxc_ast::ast::*;
use oxc_ast_visit::{VisitMut, walk_mut};
use oxc_span::SPAN;

use super::{METADATA_ATTRIBUTE, MediaImporter};
use crate::shape::{ElementShape, TargetElementKind, match_construction_call, property_key_name};

pub(super) struct ConstructionCallPass<'r, 'a> {
    importer: &'r mut MediaImporter<'a>,
}

impl<'r, 'a> ConstructionCallPass<'r, 'a> {
    pub(super) fn new(importer: &'r mut MediaImporter<'a>) -> Self {
        Self { importer }
    }
}

impl<'a> VisitMut<'a> for ConstructionCallPass<'_, 'a> {
    fn visit_call_expression(&mut self, it: &mut CallExpression<'a>) {
        if let Some(ElementShape::ConstructionCall { kind, properties }) =
            match_construction_call(it, &self.importer.options)
        {
            self.importer.rewrite_properties(kind, properties);
        }
        walk_mut::walk_call_expression(self, it);
    }
}

impl<'a> MediaImporter<'a> {
    /// Rewrite the media properties of a `_jsx` props object.
    ///
    /// Only non-computed properties holding a plain string literal qualify.
    /// Metadata properties are appended after every existing property.
    fn rewrite_properties(
        &mut self,
        kind: TargetElementKind,
        properties: &mut ArenaVec<'a, ObjectPropertyKind<'a>>,
    ) {
        let mut metadata = Vec::new();

        for property in properties.iter_mut() {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            if property.computed {
                continue;
            }
            let Some(role) = property_key_name(&property.key).and_then(|name| kind.attribute_role(name))
            else {
                continue;
            };
            let Expression::StringLiteral(lit) = &property.value else {
                continue;
            };

            let value = lit.value.to_string();
            if let Some(rewrite) = self.rewrite_value(role, &value) {
                property.value = rewrite.value;
                metadata.extend(rewrite.metadata);
            }
        }

        for suffix in metadata {
            properties.push(self.metadata_property(&suffix));
        }
    }

    /// `"data-meta": "<suffix>"`
    fn metadata_property(&self, suffix: &str) -> ObjectPropertyKind<'a> {
        let key = PropertyKey::StringLiteral(self.ast.alloc_string_literal(SPAN, METADATA_ATTRIBUTE, None));
        let value = self.ast.expression_string_literal(SPAN, self.ast.atom(suffix), None);
        self.ast.object_property_kind_object_property(
            SPAN,
            PropertyKind::Init,
            key,
            value,
            false,
            false,
            false,
        )
    }
}
