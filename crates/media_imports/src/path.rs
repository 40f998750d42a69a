//! Classification and decomposition of attribute paths.
//!
//! A value such as `image.png?size=16` is split into the part a bundler can
//! resolve (`./image.png`) and the trailing query/fragment (`?size=16`) that
//! has to survive the rewrite on its own.

/// A rewritable path split into its resolvable part and trailing metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    /// Explicitly relative path, starting with `.`.
    pub resolved_path: String,
    /// Empty, or the query/fragment starting with `?` or `#`.
    pub suffix: String,
}

impl ResourceReference {
    /// Split `raw` at its first `?` or `#`, making the path explicitly relative.
    ///
    /// `"?size=16"` yields the directory path `"./"` with suffix `"?size=16"`.
    pub fn decompose(raw: &str) -> Self {
        let value = if raw.starts_with('.') { raw.to_string() } else { format!("./{raw}") };

        match value.find(['#', '?']) {
            Some(index) => Self {
                resolved_path: value[..index].to_string(),
                suffix: value[index..].to_string(),
            },
            None => Self { resolved_path: value, suffix: String::new() },
        }
    }

    pub fn has_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }
}

/// Returns true if `value` should become an import.
///
/// Protocol URLs (`https://...`), root-relative URLs (`/image.png`) and
/// percent-encoded placeholders (`%7BimgSrc%7D`) are left alone.
pub fn is_rewritable(value: &str) -> bool {
    !is_protocol_url(value) && !value.starts_with('/') && !has_encoded_placeholder(value)
}

/// `letters://` followed by anything but another slash.
fn is_protocol_url(value: &str) -> bool {
    let scheme_len = value.bytes().take_while(u8::is_ascii_alphabetic).count();
    if scheme_len == 0 {
        return false;
    }
    let Some(rest) = value[scheme_len..].strip_prefix("://") else {
        return false;
    };
    !rest.starts_with('/')
}

/// `%7B`, at least one non-`%` character, then `%7D`.
fn has_encoded_placeholder(value: &str) -> bool {
    let mut haystack = value;
    while let Some(start) = haystack.find("%7B") {
        let rest = &haystack[start + 3..];
        if let Some(end) = rest.find('%')
            && end > 0
            && rest[end..].starts_with("%7D")
        {
            return true;
        }
        haystack = rest;
    }
    false
}
