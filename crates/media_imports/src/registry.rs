//! Per-document registry of synthesized import bindings.

use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use oxc_syntax::identifier::{is_identifier_part, is_identifier_start};
use rustc_hash::{FxHashSet, FxHasher};

use crate::slugger::Slugger;

/// Appended to every generated name so it cannot clash with author code.
pub const IDENTIFIER_SUFFIX: &str = "$recmamdximport";

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// A resolved path and the import binding generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub path: String,
    pub identifier: String,
}

/// Maps each distinct path to exactly one generated identifier.
///
/// Bindings keep first-seen order, which is the order imports are emitted in.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    bindings: FxIndexMap<String, String>,
    /// Every identifier handed out, since distinct slugs can sanitize to one name.
    issued: FxHashSet<String>,
    slugger: Slugger,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the identifier bound to `path`, creating it on first sight.
    pub fn resolve(&mut self, path: &str) -> &str {
        if !self.bindings.contains_key(path) {
            // `a-b` and `a_b` are different slugs but the same binding name;
            // slug again until the slugger's `-N` suffix makes it unique.
            let identifier = loop {
                let candidate = to_binding_name(&self.slugger.slug(path));
                if self.issued.insert(candidate.clone()) {
                    break candidate;
                }
            };
            tracing::debug!(path, identifier = %identifier, "registered media import");
            self.bindings.insert(path.to_string(), identifier);
        }
        &self.bindings[path]
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drain every binding in first-seen order and reset the slug state,
    /// leaving the registry ready for another document.
    pub fn take_bindings(&mut self) -> Vec<Binding> {
        self.slugger.reset();
        self.issued.clear();
        self.bindings
            .drain(..)
            .map(|(path, identifier)| Binding { path, identifier })
            .collect()
    }
}

/// Turn a slug into a JavaScript binding name ending in [`IDENTIFIER_SUFFIX`].
fn to_binding_name(slug: &str) -> String {
    let mut name = String::with_capacity(slug.len() + IDENTIFIER_SUFFIX.len() + 1);
    for (i, c) in slug.chars().enumerate() {
        if i == 0 && !is_identifier_start(c) && is_identifier_part(c) {
            name.push('_');
        }
        name.push(if is_identifier_part(c) { c } else { '_' });
    }
    name.push_str(IDENTIFIER_SUFFIX);
    name
}
