//! The public resolver: `dereference` and `set` over a wrapped document.

use std::borrow::{Borrow, BorrowMut};

use serde_json::Value;
use tracing::debug;

use crate::types::Trail;
use crate::util::{split_last, split_pointer};
use crate::validate::{is_well_formed, validate_set_pointer};
use crate::walk::{assign, probe, walk, walk_mut};
use crate::PointerError;

/// Default cap on placeholders a single index may pad an array with.
pub const DEFAULT_MAX_INDEX_GAP: usize = 1 << 16;

/// Options for [`Resolver::set`].
///
/// Length and depth are unlimited unless set. `max_index_gap` is the one
/// limit on by default: without it `/18446744073709551615` would try to
/// allocate the whole array. Raise it to `usize::MAX` to pad without bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Dry-run every `set` first so that a failing call leaves the document
    /// untouched. When off, containers created before a failure remain.
    pub transactional: bool,
    /// Maximum pointer length in bytes; `None` means unlimited.
    pub max_pointer_length: Option<usize>,
    /// Maximum number of reference tokens; `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Maximum distance between an array's length and an index past its end.
    pub max_index_gap: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            transactional: true,
            max_pointer_length: None,
            max_depth: None,
            max_index_gap: DEFAULT_MAX_INDEX_GAP,
        }
    }
}

/// JSON Pointer resolver over a single document.
///
/// `T` is anything that borrows a [`Value`]: `&Value` for read-only use,
/// `&mut Value` or an owned `Value` to also allow [`Resolver::set`].
/// Nothing is cached; every call walks from the root.
///
/// # Example
///
/// ```
/// use json_pointer_resolver::Resolver;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// let mut pointer = Resolver::new(&mut doc);
///
/// assert_eq!(pointer.dereference("/foo/bar"), None);
/// pointer.set("/foo/bar", json!("baz")).unwrap();
/// assert_eq!(pointer.dereference("/foo/bar"), Some(&json!("baz")));
/// assert_eq!(doc, json!({"foo": {"bar": "baz"}}));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<T> {
    root: T,
    options: ResolverOptions,
}

impl<T: Borrow<Value>> Resolver<T> {
    pub fn new(root: T) -> Self {
        Self::with_options(root, ResolverOptions::default())
    }

    pub fn with_options(root: T, options: ResolverOptions) -> Self {
        Self { root, options }
    }

    /// The wrapped document.
    pub fn root(&self) -> &Value {
        self.root.borrow()
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn into_inner(self) -> T {
        self.root
    }

    /// Walk `pointer` read-only and return every node reached, root first.
    ///
    /// `None` when the pointer is neither empty nor `/`-prefixed.
    pub fn trail(&self, pointer: &str) -> Option<Trail<'_>> {
        if !is_well_formed(pointer) {
            return None;
        }
        Some(walk(self.root(), &split_pointer(pointer)))
    }

    /// The element at `pointer`, or `None` if any segment is missing.
    pub fn dereference(&self, pointer: &str) -> Option<&Value> {
        self.dereference_generation(pointer, 0)
    }

    /// The ancestor `generation` levels above the element at `pointer`
    /// (0 is the element itself, 1 its parent, and so on).
    ///
    /// Returns `None` when the walk did not reach that depth, when
    /// `generation` reaches above the root, or for a malformed pointer.
    ///
    /// Type mismatches are not reported separately: indexing into a leaf
    /// (`/name/0` where `name` is a string) or using a non-index key on an
    /// array stops the walk exactly like a missing key does.
    ///
    /// ```
    /// use json_pointer_resolver::Resolver;
    /// use serde_json::json;
    ///
    /// let doc = json!({"a": {"b": 1}});
    /// let pointer = Resolver::new(&doc);
    /// assert_eq!(pointer.dereference_generation("/a/b", 1), Some(&json!({"b": 1})));
    /// assert_eq!(pointer.dereference_generation("/a/b", 3), None);
    /// // `b` is a number, so this is a mismatch, reported as absent
    /// assert_eq!(pointer.dereference_generation("/a/b/0", 0), None);
    /// ```
    pub fn dereference_generation(&self, pointer: &str, generation: usize) -> Option<&Value> {
        self.trail(pointer)?.ancestor(generation)
    }
}

impl<T: BorrowMut<Value>> Resolver<T> {
    /// Assign `value` at `pointer`, creating missing intermediate
    /// containers.
    ///
    /// A missing segment becomes an array when the segment after it is `-`
    /// or an index, otherwise an object. `-` on an existing array appends a
    /// new object; an index past the end pads the array with placeholders.
    ///
    /// # Errors
    ///
    /// See [`PointerError`]. The root itself cannot be set.
    pub fn set(&mut self, pointer: &str, value: Value) -> Result<(), PointerError> {
        let result = self.try_set(pointer, value);
        match &result {
            Ok(()) => debug!(pointer, "value set"),
            Err(error) => debug!(pointer, %error, "set rejected"),
        }
        result
    }

    fn try_set(&mut self, pointer: &str, value: Value) -> Result<(), PointerError> {
        validate_set_pointer(pointer, &self.options)?;
        let target = split_last(pointer).ok_or(PointerError::RootNotSettable)?;
        let tokens = split_pointer(target.parent);

        let root: &mut Value = self.root.borrow_mut();
        if self.options.transactional {
            probe(root, &tokens, &target.token, &self.options)?;
        }
        let parent = walk_mut(root, &tokens, &self.options)?;
        assign(parent, &target.token, value, &self.options)
    }
}

/// Resolver constructors on [`Value`].
pub trait ValueExt {
    fn resolver(&self) -> Resolver<&Value>;
    fn resolver_mut(&mut self) -> Resolver<&mut Value>;
}

impl ValueExt for Value {
    fn resolver(&self) -> Resolver<&Value> {
        Resolver::new(self)
    }

    fn resolver_mut(&mut self) -> Resolver<&mut Value> {
        Resolver::new(self)
    }
}
