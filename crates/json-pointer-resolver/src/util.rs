//! Pointer tokenizer and RFC 6901 escape codec.

use crate::types::{Target, TokenKind};

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_pointer_resolver::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, so that "~01" decodes to "~1" and not "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// # Example
///
/// ```
/// use json_pointer_resolver::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Split a pointer on every `/`, keeping empty tokens, and unescape each
/// token.
///
/// The first token is the root slot: it is `""` for every well-formed
/// pointer and is never used as a lookup key.
///
/// # Example
///
/// ```
/// use json_pointer_resolver::split_pointer;
///
/// assert_eq!(split_pointer(""), vec![""]);
/// assert_eq!(split_pointer("/"), vec!["", ""]);
/// assert_eq!(split_pointer("/a~1b/0"), vec!["", "a/b", "0"]);
/// ```
pub fn split_pointer(pointer: &str) -> Vec<String> {
    pointer.split('/').map(unescape_component).collect()
}

/// Parse a JSON Pointer string into its reference tokens (root slot
/// dropped).
///
/// # Example
///
/// ```
/// use json_pointer_resolver::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/foo///"), vec!["foo", "", "", ""]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    let mut tokens = split_pointer(pointer);
    tokens.remove(0);
    tokens
}

/// Format reference tokens into a JSON Pointer string.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Split a pointer at its last `/` into the parent pointer and the
/// unescaped final token.
///
/// Returns `None` when the pointer has no `/` (the root pointer).
///
/// # Example
///
/// ```
/// use json_pointer_resolver::split_last;
///
/// let target = split_last("/a/b~1c").unwrap();
/// assert_eq!(target.parent, "/a");
/// assert_eq!(target.token, "b/c");
/// assert!(split_last("").is_none());
/// ```
pub fn split_last(pointer: &str) -> Option<Target<'_>> {
    let slash = pointer.rfind('/')?;
    Some(Target {
        parent: &pointer[..slash],
        token: unescape_component(&pointer[slash + 1..]),
    })
}

/// Classify an unescaped token.
///
/// Any token that parses as a non-negative integer is an index, including
/// `01` and `+1`. Digit strings too large for `usize` are plain keys.
///
/// # Example
///
/// ```
/// use json_pointer_resolver::{classify, TokenKind};
///
/// assert_eq!(classify("-"), TokenKind::Append);
/// assert_eq!(classify("01"), TokenKind::Index(1));
/// assert_eq!(classify("-1"), TokenKind::Key);
/// ```
pub fn classify(token: &str) -> TokenKind {
    if token == "-" {
        return TokenKind::Append;
    }
    match token.parse::<usize>() {
        Ok(idx) => TokenKind::Index(idx),
        Err(_) => TokenKind::Key,
    }
}
