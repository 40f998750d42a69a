//! End-to-end tests over MDX-shaped programs.
//!
//! Inputs mirror what `@mdx-js/mdx` emits for the default (`_jsx` calls) and
//! `jsx: true` (element literals) output modes.

use media_imports::{IdentifierRegistry, ImportMediaOptions, Syntax, TransformResult, transform};
use oxc_span::SourceType;

fn rewrite(source: &str) -> TransformResult {
    rewrite_with_options(source, ImportMediaOptions::new())
}

fn rewrite_with_options(source: &str, options: ImportMediaOptions) -> TransformResult {
    let result = transform(source, SourceType::jsx(), options);
    assert!(
        result.diagnostics.iter().all(|d| d.text.contains("dropped")),
        "unexpected diagnostics: {:?}",
        result.diagnostics
    );
    result
}

/// One `identifier <- specifier` line per import.
fn imports_of(result: &TransformResult) -> String {
    result
        .imports
        .iter()
        .map(|import| format!("{} <- {}", import.identifier, import.specifier))
        .collect::<Vec<_>>()
        .join("\n")
}

fn position(code: &str, needle: &str) -> usize {
    code.find(needle).unwrap_or_else(|| panic!("`{needle}` not found in:\n{code}"))
}

const README_CALLS: &str = r#"
import {jsx as _jsx, jsxs as _jsxs} from "react/jsx-runtime";
function _createMdxContent(props) {
  const _components = {
    img: "img",
    p: "p",
    ...props.components
  };
  return _jsxs(_Fragment, {
    children: [_jsx(_components.p, {
      children: _jsx(_components.img, {
        src: "./image.png",
        alt: "alt"
      })
    }), "\n", _jsx("img", {
      src: "../../image.png",
      alt: "alt"
    })]
  });
}
export default function MDXContent(props = {}) {
  const {wrapper: MDXLayout} = props.components || ({});
  return MDXLayout ? _jsx(MDXLayout, {
    ...props,
    children: _jsx(_createMdxContent, {
      ...props
    })
  }) : _createMdxContent(props);
}
"#;

const README_ELEMENTS: &str = r#"
function _createMdxContent(props) {
  const _components = {
    img: "img",
    p: "p",
    ...props.components
  };
  return <><_components.p><_components.img src="./image.png" alt="alt" /></_components.p>{"\n"}<img src="../../image.png" alt="alt" /></>;
}
export default function MDXContent(props = {}) {
  const {wrapper: MDXLayout} = props.components || ({});
  return MDXLayout ? <MDXLayout {...props}><_createMdxContent {...props} /></MDXLayout> : _createMdxContent(props);
}
"#;

// --- construction calls ---

#[test]
fn test_calls_markdown_and_html_images() {
    let result = rewrite(README_CALLS);
    insta::assert_snapshot!(imports_of(&result), @r"
    imagepng$recmamdximport <- ./image.png
    imagepng_1$recmamdximport <- ../../image.png
    ");

    let code = &result.code;
    assert!(code.contains("src: imagepng$recmamdximport"));
    assert!(code.contains("src: imagepng_1$recmamdximport"));
    assert!(code.contains(r#"import imagepng$recmamdximport from "./image.png";"#));
    assert!(code.contains(r#"import imagepng_1$recmamdximport from "../../image.png";"#));
    assert!(!code.contains(r#""./image.png","#));
}

#[test]
fn test_imports_land_directly_before_content_function() {
    let code = rewrite(README_CALLS).code;
    let runtime = position(&code, "react/jsx-runtime");
    let first = position(&code, "import imagepng$recmamdximport");
    let second = position(&code, "import imagepng_1$recmamdximport");
    let function = position(&code, "function _createMdxContent");
    assert!(runtime < first);
    assert!(first < second);
    assert!(second < function);
}

#[test]
fn test_calls_exclude_html() {
    let result =
        rewrite_with_options(README_CALLS, ImportMediaOptions::new().with_excluded_syntax(Syntax::Html));
    insta::assert_snapshot!(imports_of(&result), @"imagepng$recmamdximport <- ./image.png");
    assert!(result.code.contains(r#"src: "../../image.png""#));
}

#[test]
fn test_calls_exclude_markdown() {
    let result = rewrite_with_options(
        README_CALLS,
        ImportMediaOptions::new().with_excluded_syntax(Syntax::Markdown),
    );
    insta::assert_snapshot!(imports_of(&result), @"imagepng$recmamdximport <- ../../image.png");
    assert!(result.code.contains(r#"src: "./image.png""#));
}

#[test]
fn test_calls_exclude_both() {
    let result = rewrite_with_options(
        README_CALLS,
        ImportMediaOptions::new().with_exclude_syntax([Syntax::Markdown, Syntax::Html]),
    );
    assert!(result.imports.is_empty());
    assert!(!result.code.contains("$recmamdximport"));
}

#[test]
fn test_calls_metadata_property() {
    let source = r#"
function _createMdxContent(props) {
  return _jsxs(_Fragment, {
    children: [_jsx("img", {
      src: "image.png#hash"
    }), _jsx("img", {
      src: "../image.png?size=16#hash",
      alt: ""
    }), _jsx("img", {
      src: "?size=16"
    })]
  });
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @r"
    imagepng$recmamdximport <- ./image.png
    imagepng_1$recmamdximport <- ../image.png
    $recmamdximport <- ./
    ");

    let code = &result.code;
    assert!(code.contains(r##""data-meta": "#hash""##));
    assert!(code.contains(r##""data-meta": "?size=16#hash""##));
    assert!(code.contains(r#""data-meta": "?size=16""#));
    // metadata goes after every existing property
    assert!(position(code, r#"alt: """#) < position(code, r##""data-meta": "?size=16#hash""##));
}

#[test]
fn test_calls_other_media_elements() {
    let source = r#"
function _createMdxContent(props) {
  return _jsxs(_Fragment, {
    children: [_jsx("audio", { children: _jsx("source", { src: "audio.ogg", type: "audio/ogg" }) }),
      _jsx("embed", { type: "video/webm", src: "video.mp4" }),
      _jsx("video", { src: "video.webm", poster: "video.png", children: _jsx("track", { kind: "captions", src: "video.vtt" }) }),
      _jsx("script", { src: "script.js" }),
      _jsx("input", { type: "image", src: "button.gif" }),
      _jsx("iframe", { src: "page.html" })]
  });
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @r"
    audioogg$recmamdximport <- ./audio.ogg
    videomp4$recmamdximport <- ./video.mp4
    videowebm$recmamdximport <- ./video.webm
    videopng$recmamdximport <- ./video.png
    videovtt$recmamdximport <- ./video.vtt
    scriptjs$recmamdximport <- ./script.js
    buttongif$recmamdximport <- ./button.gif
    ");
    assert!(result.code.contains(r#"src: "page.html""#));
    assert!(result.code.contains(r#"type: "audio/ogg""#));
}

#[test]
fn test_calls_with_unknown_callee_are_ignored() {
    let source = r#"
function _createMdxContent(props) {
  return h("img", { src: "image.png" });
}
"#;
    let result = rewrite(source);
    assert!(result.imports.is_empty());
    assert!(result.code.contains(r#"src: "image.png""#));
}

#[test]
fn test_calls_through_member_callee_are_matched() {
    let source = r#"
function _createMdxContent(props) {
  return runtime.jsx("img", { src: "image.png" });
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @"imagepng$recmamdximport <- ./image.png");
}

#[test]
fn test_calls_kind_is_case_sensitive() {
    let source = r#"
function _createMdxContent(props) {
  return _jsx("IMG", { src: "image.png" });
}
"#;
    assert!(rewrite(source).imports.is_empty());
}

#[test]
fn test_calls_dynamic_values_are_untouched() {
    let source = r#"
const imgSrc = "./image.png";
function _createMdxContent(props) {
  return _jsxs(_Fragment, {
    children: [_jsx("img", { src: imgSrc }), _jsx("img", { src: `./${name}.png` }), _jsx("img", { ["src"]: "a.png" }), _jsx("img", { ...rest })]
  });
}
"#;
    let result = rewrite(source);
    assert!(result.imports.is_empty());
    assert!(result.code.contains("src: imgSrc"));
}

// --- element literals ---

#[test]
fn test_elements_markdown_and_html_images() {
    let result = rewrite(README_ELEMENTS);
    insta::assert_snapshot!(imports_of(&result), @r"
    imagepng$recmamdximport <- ./image.png
    imagepng_1$recmamdximport <- ../../image.png
    ");

    let code = &result.code;
    assert!(code.contains("src={imagepng$recmamdximport}"));
    assert!(code.contains("src={imagepng_1$recmamdximport}"));
    assert!(code.contains(r#"alt="alt""#));
    assert!(position(code, "import imagepng_1$recmamdximport") < position(code, "function _createMdxContent"));
}

#[test]
fn test_elements_exclude_markdown() {
    let result = rewrite_with_options(
        README_ELEMENTS,
        ImportMediaOptions::new().with_excluded_syntax(Syntax::Markdown),
    );
    insta::assert_snapshot!(imports_of(&result), @"imagepng$recmamdximport <- ../../image.png");
    assert!(result.code.contains(r#"src="./image.png""#));
}

#[test]
fn test_elements_metadata_attribute() {
    let source = r#"
function _createMdxContent(props) {
  return <><img src="image.png#hash" /><img src="../image.png#hash?size=16" alt="" /></>;
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @r"
    imagepng$recmamdximport <- ./image.png
    imagepng_1$recmamdximport <- ../image.png
    ");
    let code = &result.code;
    assert!(code.contains(r##"data-meta="#hash""##));
    assert!(code.contains(r##"data-meta="#hash?size=16""##));
}

#[test]
fn test_elements_kind_is_case_insensitive() {
    let source = r#"
function _createMdxContent(props) {
  return <><IMG src="a.png" /><Video poster="b.png" /></>;
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @r"
    apng$recmamdximport <- ./a.png
    bpng$recmamdximport <- ./b.png
    ");
}

#[test]
fn test_elements_expression_values_are_untouched() {
    let source = r#"
function _createMdxContent(props) {
  return <><img src={imgSrc} /><img src={"./literal.png"} /><img {...props} /><svg><image xlink:href="a.png" /></svg></>;
}
"#;
    let result = rewrite(source);
    assert!(result.imports.is_empty());
}

// --- srcset ---

#[test]
fn test_srcset_calls() {
    let source = r#"
function _createMdxContent(props) {
  return _jsxs(_Fragment, {
    children: [_jsxs("picture", {
      children: [_jsx("source", {
        media: "(min-width:650px)",
        srcset: "image1.jpg"
      }), _jsx("source", {
        media: "(min-width:465px)",
        srcset: "../upper.jpg"
      }), _jsx("img", {
        src: "image.jpg",
        alt: "Flowers"
      })]
    }), _jsx("img", {
      srcset: "image.png#hash 2x, image.png#mash 4x"
    }), _jsx("img", {
      srcset: "image.png 2x, image.png 640w 480h, other.png"
    }), _jsx("img", {
      srcset: "https://example.com/image.png"
    }), _jsx("img", {
      srcset: "/image.png#hash 2x, /other.png?size=32 4x"
    })]
  });
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @r"
    image1jpg$recmamdximport <- ./image1.jpg
    upperjpg$recmamdximport <- ../upper.jpg
    imagejpg$recmamdximport <- ./image.jpg
    imagepng$recmamdximport <- ./image.png
    otherpng$recmamdximport <- ./other.png
    ");

    let code = &result.code;
    assert!(code.contains("srcset: image1jpg$recmamdximport"));
    assert!(code.contains("srcset: upperjpg$recmamdximport"));
    assert!(code.contains(
        "srcset: `${imagepng$recmamdximport}#hash 2x, ${imagepng$recmamdximport}#mash 4x`"
    ));
    assert!(code.contains(
        "srcset: `${imagepng$recmamdximport} 2x, ${imagepng$recmamdximport} 640w 480h, ${otherpng$recmamdximport}`"
    ));
    assert!(code.contains(r#"srcset: "https://example.com/image.png""#));
    assert!(code.contains(r#"srcset: "/image.png#hash 2x, /other.png?size=32 4x""#));
    assert!(!code.contains("data-meta"));
}

#[test]
fn test_srcset_elements() {
    let source = r#"
function _createMdxContent(props) {
  return <><source srcset="image1.jpg" /><img srcSet="image.png?size=16 2x, image.png?size=32 4x" /><img srcset="https://example.com/image.png" /></>;
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @r"
    image1jpg$recmamdximport <- ./image1.jpg
    imagepng$recmamdximport <- ./image.png
    ");

    let code = &result.code;
    assert!(code.contains("srcset={image1jpg$recmamdximport}"));
    assert!(code.contains(
        "srcSet={`${imagepng$recmamdximport}?size=16 2x, ${imagepng$recmamdximport}?size=32 4x`}"
    ));
    assert!(code.contains(r#"srcset="https://example.com/image.png""#));
}

// --- sessions and placement ---

#[test]
fn test_shared_path_across_both_encodings() {
    let source = r#"
function _createMdxContent(props) {
  const a = _jsx("img", { src: "image.png" });
  return <>{a}<img src="./image.png" /><video poster="image.png?v=2" /></>;
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @"imagepng$recmamdximport <- ./image.png");
    assert_eq!(result.code.matches("import imagepng$recmamdximport").count(), 1);
    assert!(result.code.contains(r#"data-meta="?v=2""#));
}

#[test]
fn test_repeated_transforms_are_deterministic() {
    let first = rewrite(README_CALLS);
    let second = rewrite(README_CALLS);
    assert_eq!(imports_of(&first), imports_of(&second));
    assert_eq!(first.code, second.code);
}

#[test]
fn test_registry_reused_across_documents_starts_fresh() {
    let mut registry = IdentifierRegistry::new();
    registry.resolve("./image.png");
    registry.resolve("../../image.png");
    registry.resolve("./a-b.png");
    registry.resolve("./a_b.png");
    assert_eq!(registry.take_bindings().len(), 4);

    // names issued for the previous document are free again
    assert_eq!(registry.resolve("../../image.png"), "imagepng$recmamdximport");
    assert_eq!(registry.resolve("./a_b.png"), "a_bpng$recmamdximport");
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_paths_with_equal_sanitized_names_get_distinct_imports() {
    let source = r#"
function _createMdxContent(props) {
  return <><img src="hero-banner.png" /><img src="hero_banner.png" /><video src="1.mp4" poster="_1.mp4" /></>;
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @r"
    hero_bannerpng$recmamdximport <- ./hero-banner.png
    hero_bannerpng_1$recmamdximport <- ./hero_banner.png
    _1mp4$recmamdximport <- ./1.mp4
    _1mp4_1$recmamdximport <- ./_1.mp4
    ");

    let code = &result.code;
    assert_eq!(code.matches("import hero_bannerpng$recmamdximport ").count(), 1);
    assert!(code.contains("src={hero_bannerpng$recmamdximport}"));
    assert!(code.contains("src={hero_bannerpng_1$recmamdximport}"));
    assert!(code.contains("poster={_1mp4_1$recmamdximport}"));
}

#[test]
fn test_srcset_with_malformed_candidate_is_untouched() {
    let source = r#"
function _createMdxContent(props) {
  return <><img srcset="a.png 2x, b.png 3q" /><img src="a.png" /></>;
}
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @"apng$recmamdximport <- ./a.png");
    assert!(result.code.contains(r#"srcset="a.png 2x, b.png 3q""#));
}

#[test]
fn test_missing_content_function_drops_imports_with_warning() {
    let source = r#"
export default function MDXContent(props) {
  return _jsx("img", { src: "image.png" });
}
"#;
    let result = transform(source, SourceType::jsx(), ImportMediaOptions::new());
    assert!(result.imports.is_empty());
    assert!(!result.code.contains("import imagepng"));
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, media_imports::DiagnosticSeverity::Warning);
    assert!(result.diagnostics[0].text.contains("`_createMdxContent`"));
}

#[test]
fn test_nested_content_function_is_not_an_insertion_point() {
    let source = r#"
function outer() {
  function _createMdxContent(props) {
    return _jsx("img", { src: "image.png" });
  }
}
"#;
    let result = transform(source, SourceType::jsx(), ImportMediaOptions::new());
    assert!(result.imports.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
}

#[test]
fn test_custom_content_function() {
    let source = r#"
function render(props) {
  return _jsx("img", { src: "image.png" });
}
"#;
    let result = rewrite_with_options(source, ImportMediaOptions::new().with_content_function("render"));
    insta::assert_snapshot!(imports_of(&result), @"imagepng$recmamdximport <- ./image.png");
    assert!(position(&result.code, "import imagepng") < position(&result.code, "function render"));
}

#[test]
fn test_function_body_output_format() {
    let source = r#"
"use strict";
const {Fragment: _Fragment, jsx: _jsx} = arguments[0];
function _createMdxContent(props) {
  return _jsx("img", { src: "image.jpg" });
}
return {
  default: _createMdxContent
};
"#;
    let result = rewrite(source);
    insta::assert_snapshot!(imports_of(&result), @"imagejpg$recmamdximport <- ./image.jpg");
    assert!(position(&result.code, "arguments[0]") < position(&result.code, "import imagejpg"));
}

#[test]
fn test_no_media_leaves_program_unchanged_and_silent() {
    let source = r#"
function _createMdxContent(props) {
  return _jsx("p", { children: "hello" });
}
"#;
    let result = rewrite(source);
    assert!(result.imports.is_empty());
    assert!(result.diagnostics.is_empty());
    assert!(!result.code.contains("import"));
}

#[test]
fn test_parse_errors_return_source_unchanged() {
    let source = "function _createMdxContent( { return <img src=\"a.png\" />; }";
    let result = transform(source, SourceType::jsx(), ImportMediaOptions::new());
    assert_eq!(result.code, source);
    assert!(!result.diagnostics.is_empty());
    assert_eq!(result.diagnostics[0].severity, media_imports::DiagnosticSeverity::Error);
}

#[test]
fn test_both_encodings_of_a_document_import_the_same_media() {
    let calls = rewrite(include_str!("../benches/fixtures/gallery.js"));
    let elements = rewrite(include_str!("../benches/fixtures/gallery.jsx"));

    assert_eq!(calls.imports.len(), 12);
    assert_eq!(imports_of(&calls), imports_of(&elements));
    assert!(calls.imports.iter().all(|import| import.specifier.starts_with('.')));
    assert!(calls.code.contains(r#"src: "https://example.com/remote.png""#));
    assert!(elements.code.contains(r#"src="/static/logo.svg""#));
    assert!(elements.code.contains(r#"data-meta="?width=640#preview""#));
}
