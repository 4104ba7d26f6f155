//! JSON Pointer (RFC 6901) resolution and auto-vivifying assignment.
//!
//! A [`Resolver`] wraps one [`serde_json::Value`] document and offers two
//! operations built on a shared tokenized walk:
//!
//! - `dereference`: read-only lookup, `None` when any segment is missing;
//!   optionally returns an ancestor of the target (`dereference_generation`).
//! - `set`: assigns a value, creating missing containers along the way. A
//!   missing segment becomes an array when the token after it is `-` or an
//!   index, and an object otherwise.
//!
//! # Example
//!
//! ```
//! use json_pointer_resolver::ValueExt;
//! use serde_json::json;
//!
//! let mut doc = json!([]);
//! let pointer = "/4/this/is/a/0/new/thing";
//!
//! doc.resolver_mut().set(pointer, json!("hello earth")).unwrap();
//! assert_eq!(doc.resolver().dereference(pointer), Some(&json!("hello earth")));
//! assert_eq!(doc.as_array().map(Vec::len), Some(5));
//! assert_eq!(doc[4]["this"]["is"]["a"][0]["new"]["thing"], json!("hello earth"));
//! ```

use thiserror::Error;

pub mod cli;
pub mod resolver;
pub mod types;
pub mod util;
pub mod validate;
pub mod walk;

pub use resolver::{Resolver, ResolverOptions, ValueExt};
pub use types::{Target, TokenKind, Trail};
pub use util::{
    classify, escape_component, format_json_pointer, parse_json_pointer,
    split_last, split_pointer, unescape_component,
};
pub use validate::{is_well_formed, validate_set_pointer};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("ROOT_NOT_SETTABLE")]
    RootNotSettable,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("PATH_TOO_LONG")]
    PathTooLong,
    #[error("TYPE_MISMATCH at {token:?}")]
    TypeMismatch { token: String },
    #[error("INDEX_GAP_TOO_LARGE: index {index} past length {len}")]
    IndexGapTooLarge { index: usize, len: usize },
}
