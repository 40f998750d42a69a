//! Media imports for compiled MDX
//!
//! Rewrites relative media paths in the JavaScript that MDX compiles to
//! into imports, so a bundler resolves, hashes and emits the files instead
//! of leaving bare strings in the output.
//!
//! ## Example
//!
//! ```js
//! // before
//! function _createMdxContent(props) {
//!   return _jsx("img", { src: "../image.png#hash" });
//! }
//!
//! // after
//! import imagepng$recmamdximport from "../image.png";
//! function _createMdxContent(props) {
//!   return _jsx("img", { src: imagepng$recmamdximport, "data-meta": "#hash" });
//! }
//! ```
//!
//! Absolute paths (`/image.png`), protocol URLs (`https://...`) and values
//! that are already expressions are never touched.

mod candidates;
mod diagnostic;
mod options;
mod path;
mod registry;
mod rewriter;
mod shape;
mod slugger;
mod srcset;
mod transform;

pub use candidates::{CandidateListRewrite, TemplateParts, decompose_list};
pub use diagnostic::{Diagnostic, DiagnosticLabel, DiagnosticSeverity};
pub use options::{DEFAULT_CONTENT_FUNCTION, ImportMediaOptions, Syntax, UnknownSyntax};
pub use path::{ResourceReference, is_rewritable};
pub use registry::{Binding, IDENTIFIER_SUFFIX, IdentifierRegistry};
pub use rewriter::{METADATA_ATTRIBUTE, MediaImportReturn, MediaImporter};
pub use shape::{AttributeRole, ElementShape, TargetElementKind};
pub use slugger::Slugger;
pub use srcset::{CandidateListEntry, parse as parse_srcset};
pub use transform::{TransformResult, TransformResultImport, transform};
