//! Media import rewriting for compiled MDX, exposed to Node.js.

mod error;

#[cfg(all(
    feature = "allocator",
    not(any(
        target_arch = "arm",
        target_os = "freebsd",
        target_os = "windows",
        target_family = "wasm"
    ))
))]
#[global_allocator]
static ALLOC: mimalloc_safe::MiMalloc = mimalloc_safe::MiMalloc;

use std::mem;

use napi::{Task, bindgen_prelude::AsyncTask};
use napi_derive::napi;

use media_imports::{ImportMediaOptions, Syntax, transform};
use oxc_span::SourceType;

use crate::error::TransformError;

/// Which authoring syntax to leave untouched.
#[napi(string_enum)]
pub enum ExcludeSyntax {
    /// Markdown images, compiled to `_components.img`.
    #[napi(value = "markdown")]
    Markdown,
    /// Raw HTML elements such as `<img>` and `<video>`.
    #[napi(value = "html")]
    Html,
}

impl From<&ExcludeSyntax> for Syntax {
    fn from(value: &ExcludeSyntax) -> Self {
        match value {
            ExcludeSyntax::Markdown => Self::Markdown,
            ExcludeSyntax::Html => Self::Html,
        }
    }
}

/// Options for rewriting a compiled MDX module.
#[napi(object)]
#[derive(Default)]
pub struct TransformOptions {
    /// The filename of the compiled module. Its extension decides how the
    /// source is parsed; unknown or missing extensions parse as JSX.
    pub filename: Option<String>,

    /// Element syntaxes whose media paths should not be rewritten.
    ///
    /// @default []
    #[napi(ts_type = "Array<'markdown' | 'html'>")]
    pub exclude_syntax: Option<Vec<ExcludeSyntax>>,

    /// Name of the top-level function the imports are inserted before.
    ///
    /// @default "_createMdxContent"
    pub content_function: Option<String>,
}

/// An import inserted into the module.
#[napi(object)]
#[derive(Clone)]
pub struct MediaImport {
    /// The local binding, e.g. `imagepng$recmamdximport`.
    pub identifier: String,
    /// The module specifier, e.g. `"./image.png"`.
    pub specifier: String,
}

/// Result of rewriting a compiled MDX module.
#[napi(object)]
pub struct TransformResult {
    /// The rewritten JavaScript. Unchanged from the input if it failed to parse.
    pub code: String,
    /// Imports inserted before the content function, in output order.
    pub imports: Vec<MediaImport>,
    /// Parse errors, and a warning when imports had to be dropped.
    pub errors: Vec<TransformError>,
}

fn transform_impl(source_text: &str, options: &TransformOptions) -> TransformResult {
    let source_type = options
        .filename
        .as_deref()
        .and_then(|filename| SourceType::from_path(filename).ok())
        .unwrap_or_else(SourceType::jsx);

    let mut import_options = ImportMediaOptions::new()
        .with_exclude_syntax(options.exclude_syntax.iter().flatten().map(Syntax::from));
    if let Some(content_function) = &options.content_function {
        import_options = import_options.with_content_function(content_function.as_str());
    }

    let result = transform(source_text, source_type, import_options);

    TransformResult {
        code: result.code,
        imports: result
            .imports
            .into_iter()
            .map(|import| MediaImport { identifier: import.identifier, specifier: import.specifier })
            .collect(),
        errors: TransformError::from_diagnostics(result.diagnostics),
    }
}

/// Rewrite relative media paths of a compiled MDX module into imports,
/// synchronously on the current thread.
///
/// @example
/// ```javascript
/// import { transformSync } from 'recma-mdx-import-media-binding';
///
/// const result = transformSync(compiled, { filename: 'post.jsx' });
///
/// console.log(result.imports); // [{ identifier: 'imagepng$recmamdximport', specifier: './image.png' }]
/// ```
#[napi]
pub fn transform_sync(source_text: String, options: Option<TransformOptions>) -> TransformResult {
    let options = options.unwrap_or_default();
    transform_impl(&source_text, &options)
}

pub struct TransformTask {
    source_text: String,
    options: TransformOptions,
}

#[napi]
impl Task for TransformTask {
    type JsValue = TransformResult;
    type Output = TransformResult;

    fn compute(&mut self) -> napi::Result<Self::Output> {
        let source_text = mem::take(&mut self.source_text);
        Ok(transform_impl(&source_text, &self.options))
    }

    fn resolve(&mut self, _: napi::Env, result: Self::Output) -> napi::Result<Self::JsValue> {
        Ok(result)
    }
}

/// Rewrite relative media paths of a compiled MDX module into imports,
/// on a separate thread.
///
/// `transformSync` is usually cheaper since it does not spawn a thread; use
/// this one to keep the main thread free while rewriting large documents.
#[napi(js_name = "transform")]
pub fn transform_async(
    source_text: String,
    options: Option<TransformOptions>,
) -> AsyncTask<TransformTask> {
    let options = options.unwrap_or_default();
    AsyncTask::new(TransformTask { source_text, options })
}
