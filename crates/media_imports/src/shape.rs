//! Recognition of media elements in compiled MDX output.
//!
//! MDX emits the same element in one of two encodings depending on the
//! `jsx` compile option:
//!
//! ```js
//! _jsx("img", { src: "image.png" })        // construction call, html syntax
//! _jsx(_components.img, { src: "image.png" }) // construction call, markdown syntax
//! <img src="image.png" />                  // element literal, html syntax
//! <_components.img src="image.png" />      // element literal, markdown syntax
//! ```

use oxc_allocator::Vec as ArenaVec;
use oxc_ast::ast::*;

use crate::options::{ImportMediaOptions, Syntax};

/// Callee names MDX uses for the automatic JSX runtime.
pub const JSX_HELPERS: [&str; 3] = ["_jsx", "_jsxs", "_jsxDEV"];

/// Object through which markdown elements can be overridden.
pub const COMPONENTS_OBJECT: &str = "_components";

/// Element kinds that can reference media.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetElementKind {
    Img,
    Video,
    Audio,
    Source,
    Embed,
    Track,
    Input,
    Script,
}

impl TargetElementKind {
    pub const ALL: [Self; 8] = [
        Self::Img,
        Self::Video,
        Self::Audio,
        Self::Source,
        Self::Embed,
        Self::Track,
        Self::Input,
        Self::Script,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Img => "img",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Source => "source",
            Self::Embed => "embed",
            Self::Track => "track",
            Self::Input => "input",
            Self::Script => "script",
        }
    }

    /// Attributes of this element that may hold a media path.
    pub const fn attributes(self) -> &'static [&'static str] {
        match self {
            Self::Img | Self::Source => &["src", "srcset"],
            Self::Video => &["src", "poster"],
            Self::Audio | Self::Embed | Self::Track | Self::Input | Self::Script => &["src"],
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Case-insensitive lookup, for names as the author typed them.
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// How the attribute `name` of this element should be rewritten, if at all.
    ///
    /// Attribute names match case-insensitively, so the JSX spelling `srcSet`
    /// is still treated as a candidate list.
    pub fn attribute_role(self, name: &str) -> Option<AttributeRole> {
        let attribute = self
            .attributes()
            .iter()
            .find(|attribute| attribute.eq_ignore_ascii_case(name))?;
        Some(if *attribute == "srcset" { AttributeRole::CandidateList } else { AttributeRole::Single })
    }
}

/// How an attribute value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeRole {
    /// One path, possibly with a query/fragment suffix.
    Single,
    /// A `srcset`-style list of candidates.
    CandidateList,
}

/// A matched media element and its mutable attribute container.
#[derive(Debug)]
pub enum ElementShape<'s, 'a> {
    /// `_jsx(kind, { ... })`: the properties of the second argument.
    ConstructionCall {
        kind: TargetElementKind,
        properties: &'s mut ArenaVec<'a, ObjectPropertyKind<'a>>,
    },
    /// `<kind ... />`: the attributes of the opening element.
    ElementLiteral {
        kind: TargetElementKind,
        attributes: &'s mut ArenaVec<'a, JSXAttributeItem<'a>>,
    },
}

/// Match a construction call such as `_jsx("img", { src: "a.png" })`.
pub fn match_construction_call<'s, 'a>(
    call: &'s mut CallExpression<'a>,
    options: &ImportMediaOptions,
) -> Option<ElementShape<'s, 'a>> {
    if let Expression::Identifier(callee) = &call.callee
        && !JSX_HELPERS.contains(&callee.name.as_str())
    {
        return None;
    }

    let (first, rest) = call.arguments.split_first_mut()?;
    let kind = match first {
        Argument::StringLiteral(lit) if !options.excludes(Syntax::Html) => {
            TargetElementKind::from_name(lit.value.as_str())
        }
        Argument::StaticMemberExpression(member) if !options.excludes(Syntax::Markdown) => {
            components_member_kind(&member.object, member.property.name.as_str())
                .and_then(TargetElementKind::from_name)
        }
        _ => None,
    }?;

    match rest.first_mut()? {
        Argument::ObjectExpression(object) => Some(ElementShape::ConstructionCall {
            kind,
            properties: &mut object.properties,
        }),
        _ => None,
    }
}

/// Match an element literal such as `<img src="a.png" />`.
pub fn match_element_literal<'s, 'a>(
    element: &'s mut JSXOpeningElement<'a>,
    options: &ImportMediaOptions,
) -> Option<ElementShape<'s, 'a>> {
    let kind = match &element.name {
        JSXElementName::Identifier(ident) if !options.excludes(Syntax::Html) => {
            TargetElementKind::from_name_ignore_case(ident.name.as_str())
        }
        JSXElementName::IdentifierReference(ident) if !options.excludes(Syntax::Html) => {
            TargetElementKind::from_name_ignore_case(ident.name.as_str())
        }
        JSXElementName::MemberExpression(member) if !options.excludes(Syntax::Markdown) => {
            match &member.object {
                JSXMemberExpressionObject::IdentifierReference(object)
                    if object.name == COMPONENTS_OBJECT =>
                {
                    TargetElementKind::from_name_ignore_case(member.property.name.as_str())
                }
                _ => None,
            }
        }
        _ => None,
    }?;

    Some(ElementShape::ElementLiteral { kind, attributes: &mut element.attributes })
}

/// `_components.<property>` → `Some(property)`.
fn components_member_kind<'n>(object: &Expression<'_>, property: &'n str) -> Option<&'n str> {
    match object {
        Expression::Identifier(ident) if ident.name == COMPONENTS_OBJECT => Some(property),
        _ => None,
    }
}

/// The static name of an object property key, if it has one.
pub fn property_key_name<'n>(key: &'n PropertyKey<'_>) -> Option<&'n str> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// The plain name of a JSX attribute; namespaced names (`xlink:href`) have none.
pub fn jsx_attribute_name<'n>(name: &'n JSXAttributeName<'_>) -> Option<&'n str> {
    match name {
        JSXAttributeName::Identifier(ident) => Some(ident.name.as_str()),
        JSXAttributeName::NamespacedName(_) => None,
    }
}
