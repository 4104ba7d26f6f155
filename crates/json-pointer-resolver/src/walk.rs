//! The tokenized walk shared by `dereference` and `set`.
//!
//! Read-only mode stops at the first missing node. Mutative mode never
//! stops early: every missing segment is materialized as a placeholder
//! whose shape is chosen by peeking at the token after it.

use serde_json::{Map, Value};
use tracing::trace;

use crate::resolver::ResolverOptions;
use crate::types::{TokenKind, Trail};
use crate::util::classify;
use crate::PointerError;

/// Build the placeholder container for a missing segment.
///
/// An array when the following token is `-` or an index, otherwise (no
/// following token, or any other key) an object.
pub fn placeholder_for(next: Option<&str>) -> Value {
    match next.map(classify) {
        Some(kind) if kind.wants_array() => Value::Array(Vec::new()),
        _ => Value::Object(Map::new()),
    }
}

/// Walk `tokens` (root slot first) without touching the document.
pub fn walk<'a>(root: &'a Value, tokens: &[String]) -> Trail<'a> {
    if tokens.is_empty() {
        return Trail::new(Vec::new(), 0);
    }
    let mut nodes = Vec::with_capacity(tokens.len());
    let mut current = root;
    nodes.push(current);

    for token in &tokens[1..] {
        let next = match current {
            Value::Object(map) => map.get(token.as_str()),
            Value::Array(arr) => match classify(token) {
                TokenKind::Index(idx) => arr.get(idx),
                // "-" never names an existing element
                TokenKind::Append | TokenKind::Key => None,
            },
            _ => None,
        };
        match next {
            Some(node) => {
                nodes.push(node);
                current = node;
            }
            None => break,
        }
    }
    Trail::new(nodes, tokens.len())
}

/// Walk `tokens` (root slot first), creating every missing container, and
/// return the node the last token lands on.
///
/// # Errors
///
/// `TypeMismatch` when a token has to be applied to a leaf, or a key token
/// to an array. `IndexGapTooLarge` when padding would exceed
/// `options.max_index_gap`. Containers created before the error stay in
/// the document.
pub fn walk_mut<'a>(
    root: &'a mut Value,
    tokens: &[String],
    options: &ResolverOptions,
) -> Result<&'a mut Value, PointerError> {
    let mut current = root;
    for (i, token) in tokens.iter().enumerate().skip(1) {
        let next = tokens.get(i + 1).map(String::as_str);
        current = step_mut(current, token, next, options)?;
    }
    Ok(current)
}

fn step_mut<'a>(
    node: &'a mut Value,
    token: &str,
    next: Option<&str>,
    options: &ResolverOptions,
) -> Result<&'a mut Value, PointerError> {
    match node {
        Value::Object(map) => Ok(map.entry(token).or_insert_with(|| {
            trace!(token, "creating missing member");
            placeholder_for(next)
        })),
        Value::Array(arr) => match classify(token) {
            TokenKind::Append => {
                trace!(len = arr.len(), "appending object to array");
                let idx = arr.len();
                arr.push(Value::Object(Map::new()));
                Ok(&mut arr[idx])
            }
            TokenKind::Index(idx) => {
                if idx >= arr.len() {
                    check_gap(idx, arr.len(), options)?;
                    trace!(from = arr.len(), to = idx, "padding array with placeholders");
                    arr.resize_with(idx + 1, || placeholder_for(next));
                }
                Ok(&mut arr[idx])
            }
            TokenKind::Key => Err(mismatch(token)),
        },
        _ => Err(mismatch(token)),
    }
}

/// Assign `value` at `token` inside `parent`.
///
/// Objects get insert-or-replace (an existing key keeps its position).
/// Arrays take `-` as append and an index as replace, padding with empty
/// objects when the index lies past the end.
pub fn assign(
    parent: &mut Value,
    token: &str,
    value: Value,
    options: &ResolverOptions,
) -> Result<(), PointerError> {
    match parent {
        Value::Object(map) => {
            map.insert(token.to_string(), value);
            Ok(())
        }
        Value::Array(arr) => match classify(token) {
            TokenKind::Append => {
                arr.push(value);
                Ok(())
            }
            TokenKind::Index(idx) if idx < arr.len() => {
                arr[idx] = value;
                Ok(())
            }
            TokenKind::Index(idx) => {
                check_gap(idx, arr.len(), options)?;
                arr.resize_with(idx, || placeholder_for(None));
                arr.push(value);
                Ok(())
            }
            TokenKind::Key => Err(mismatch(token)),
        },
        _ => Err(mismatch(token)),
    }
}

/// Shape of the node a dry run is standing on.
enum Probe<'a> {
    Existing(&'a Value),
    FreshArray,
    FreshObject,
}

impl Probe<'_> {
    fn fresh(next: Option<&str>) -> Self {
        match next.map(classify) {
            Some(kind) if kind.wants_array() => Probe::FreshArray,
            _ => Probe::FreshObject,
        }
    }
}

/// Dry run of [`walk_mut`] followed by [`assign`] of `final_token`.
///
/// Reports the first error the real walk would hit without modifying the
/// document, so a caller can reject a `set` before anything is created.
pub fn probe(
    root: &Value,
    tokens: &[String],
    final_token: &str,
    options: &ResolverOptions,
) -> Result<(), PointerError> {
    let mut current = Probe::Existing(root);
    for (i, token) in tokens.iter().enumerate().skip(1) {
        let next = tokens.get(i + 1).map(String::as_str);
        current = match current {
            Probe::Existing(Value::Object(map)) => match map.get(token.as_str()) {
                Some(node) => Probe::Existing(node),
                None => Probe::fresh(next),
            },
            Probe::Existing(Value::Array(arr)) => match classify(token) {
                TokenKind::Append => Probe::FreshObject,
                TokenKind::Index(idx) => match arr.get(idx) {
                    Some(node) => Probe::Existing(node),
                    None => {
                        check_gap(idx, arr.len(), options)?;
                        Probe::fresh(next)
                    }
                },
                TokenKind::Key => return Err(mismatch(token)),
            },
            Probe::Existing(_) => return Err(mismatch(token)),
            Probe::FreshArray => match classify(token) {
                TokenKind::Append => Probe::FreshObject,
                TokenKind::Index(idx) => {
                    check_gap(idx, 0, options)?;
                    Probe::fresh(next)
                }
                TokenKind::Key => return Err(mismatch(token)),
            },
            Probe::FreshObject => Probe::fresh(next),
        };
    }

    match current {
        Probe::Existing(Value::Object(_)) | Probe::FreshObject => Ok(()),
        Probe::Existing(Value::Array(arr)) => check_final_index(final_token, arr.len(), options),
        Probe::FreshArray => check_final_index(final_token, 0, options),
        Probe::Existing(_) => Err(mismatch(final_token)),
    }
}

fn check_final_index(token: &str, len: usize, options: &ResolverOptions) -> Result<(), PointerError> {
    match classify(token) {
        TokenKind::Append => Ok(()),
        TokenKind::Index(idx) => check_gap(idx, len, options),
        TokenKind::Key => Err(mismatch(token)),
    }
}

fn check_gap(index: usize, len: usize, options: &ResolverOptions) -> Result<(), PointerError> {
    if index.saturating_sub(len) > options.max_index_gap {
        return Err(PointerError::IndexGapTooLarge { index, len });
    }
    Ok(())
}

fn mismatch(token: &str) -> PointerError {
    PointerError::TypeMismatch {
        token: token.to_string(),
    }
}
