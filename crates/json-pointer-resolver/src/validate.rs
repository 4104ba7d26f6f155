//! Validation of pointers handed to `set`.

use crate::resolver::ResolverOptions;
use crate::PointerError;

/// Validate a JSON Pointer string against the syntax rules and the limits
/// in `options`.
///
/// # Errors
///
/// - `RootNotSettable` for `""`
/// - `PointerInvalid` if the pointer doesn't start with `/`
/// - `PointerTooLong` / `PathTooLong` when a limit is exceeded
///
/// # Example
///
/// ```
/// use json_pointer_resolver::{validate_set_pointer, PointerError, ResolverOptions};
///
/// let options = ResolverOptions::default();
/// validate_set_pointer("/foo/bar", &options).unwrap();
/// assert_eq!(validate_set_pointer("", &options), Err(PointerError::RootNotSettable));
/// assert_eq!(validate_set_pointer("foo", &options), Err(PointerError::PointerInvalid));
/// ```
pub fn validate_set_pointer(pointer: &str, options: &ResolverOptions) -> Result<(), PointerError> {
    if pointer.is_empty() {
        return Err(PointerError::RootNotSettable);
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::PointerInvalid);
    }
    if let Some(max) = options.max_pointer_length {
        if pointer.len() > max {
            return Err(PointerError::PointerTooLong);
        }
    }
    if let Some(max) = options.max_depth {
        let depth = pointer.bytes().filter(|&b| b == b'/').count();
        if depth > max {
            return Err(PointerError::PathTooLong);
        }
    }
    Ok(())
}

/// Whether a pointer is syntactically usable for lookup: empty, or
/// starting with `/`.
pub fn is_well_formed(pointer: &str) -> bool {
    pointer.is_empty() || pointer.starts_with('/')
}
