//! Element-literal pass: `<img src="image.png" />`, as emitted with `jsx: true`.

use oxc_allocator::Vec as ArenaVec;
use oxc_ast::ast::*;
use oxc_ast_visit::{VisitMut, walk_mut};
use oxc_span::SPAN;

use super::{METADATA_ATTRIBUTE, MediaImporter};
use crate::shape::{ElementShape, TargetElementKind, jsx_attribute_name, match_element_literal};

pub(super) struct ElementLiteralPass<'r, 'a> {
    importer: &'r mut MediaImporter<'a>,
}

impl<'r, 'a> ElementLiteralPass<'r, 'a> {
    pub(super) fn new(importer: &'r mut MediaImporter<'a>) -> Self {
        Self { importer }
    }
}

impl<'a> VisitMut<'a> for ElementLiteralPass<'_, 'a> {
    fn visit_jsx_opening_element(&mut self, it: &mut JSXOpeningElement<'a>) {
        if let Some(ElementShape::ElementLiteral { kind, attributes }) =
            match_element_literal(it, &self.importer.options)
        {
            self.importer.rewrite_attributes(kind, attributes);
        }
        walk_mut::walk_jsx_opening_element(self, it);
    }
}

impl<'a> MediaImporter<'a> {
    /// Rewrite the media attributes of a JSX opening element.
    ///
    /// Spread attributes, namespaced names and attributes that already hold an
    /// expression are skipped. Rewritten values are wrapped in `{...}`.
    fn rewrite_attributes(
        &mut self,
        kind: TargetElementKind,
        attributes: &mut ArenaVec<'a, JSXAttributeItem<'a>>,
    ) {
        let mut metadata = Vec::new();

        for item in attributes.iter_mut() {
            let JSXAttributeItem::Attribute(attribute) = item else {
                continue;
            };
            let Some(role) = jsx_attribute_name(&attribute.name).and_then(|name| kind.attribute_role(name))
            else {
                continue;
            };
            let Some(JSXAttributeValue::StringLiteral(lit)) = &attribute.value else {
                continue;
            };

            let value = lit.value.to_string();
            if let Some(rewrite) = self.rewrite_value(role, &value) {
                let expression = JSXExpression::from(rewrite.value);
                attribute.value =
                    Some(self.ast.jsx_attribute_value_expression_container(SPAN, expression));
                metadata.extend(rewrite.metadata);
            }
        }

        for suffix in metadata {
            attributes.push(self.metadata_attribute(&suffix));
        }
    }

    /// `data-meta="<suffix>"`
    fn metadata_attribute(&self, suffix: &str) -> JSXAttributeItem<'a> {
        let name = self.ast.jsx_attribute_name_identifier(SPAN, METADATA_ATTRIBUTE);
        let value = self.ast.jsx_attribute_value_string_literal(SPAN, self.ast.atom(suffix), None);
        self.ast.jsx_attribute_item_attribute(SPAN, name, Some(value))
    }
}
