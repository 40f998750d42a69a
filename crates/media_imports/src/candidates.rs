//! Decomposition of `srcset` values into literal text and path references.
//!
//! `"image.png 2x, https://cdn/x.png 3x"` becomes a template with one
//! substitution for `./image.png` and the literal runs `""` and
//! `" 2x, https://cdn/x.png 3x"`.

use std::fmt::Write;

use crate::path::{ResourceReference, is_rewritable};
use crate::srcset::{self, CandidateListEntry};

/// How a `srcset` value should be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateListRewrite {
    /// A single plain path: the value becomes a bare reference to its import.
    Collapsed(String),
    /// Literal runs interleaved with path references.
    Template(TemplateParts),
}

/// `quasis[0] ${paths[0]} quasis[1] ... ${paths[n-1]} quasis[n]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParts {
    /// Literal text runs, always one more than `paths`.
    pub quasis: Vec<String>,
    /// Resolved paths, in order of appearance.
    pub paths: Vec<String>,
}

/// Decompose a `srcset` value.
///
/// Returns `None` when no candidate is rewritable, or when any candidate is
/// malformed, in which case the value must be left exactly as authored.
pub fn decompose_list(value: &str) -> Option<CandidateListRewrite> {
    let entries = srcset::parse_complete(value)?;

    if let [entry] = entries.as_slice()
        && !entry.has_descriptors()
        && is_rewritable(&entry.url)
    {
        let reference = ResourceReference::decompose(&entry.url);
        if !reference.has_suffix() {
            return Some(CandidateListRewrite::Collapsed(reference.resolved_path));
        }
    }

    let mut quasis = Vec::new();
    let mut paths = Vec::new();
    let mut raw = String::new();
    let last = entries.len().saturating_sub(1);

    for (index, entry) in entries.iter().enumerate() {
        if is_rewritable(&entry.url) {
            let reference = ResourceReference::decompose(&entry.url);
            quasis.push(std::mem::replace(&mut raw, reference.suffix));
            paths.push(reference.resolved_path);
        } else {
            raw.push_str(&entry.url);
        }

        push_descriptors(&mut raw, entry);
        if index < last {
            raw.push_str(", ");
        }
    }

    if paths.is_empty() {
        return None;
    }

    quasis.push(raw);
    Some(CandidateListRewrite::Template(TemplateParts { quasis, paths }))
}

/// Append ` {d}x`, ` {w}w` and ` {h}h` in that order, each only if present.
fn push_descriptors(raw: &mut String, entry: &CandidateListEntry) {
    if let Some(density) = entry.density {
        let _ = write!(raw, " {density}x");
    }
    if let Some(width) = entry.width {
        let _ = write!(raw, " {width}w");
    }
    if let Some(height) = entry.height {
        let _ = write!(raw, " {height}h");
    }
}
