//! Type definitions shared by the tokenizer, the walk and the resolver.

use serde_json::Value;

/// How a single unescaped pointer token addresses a container.
///
/// Every token is usable as an object key; the kind only matters when the
/// current node is an array, or when choosing the shape of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A canonical non-negative array index.
    Index(usize),
    /// `-`: the slot after the last array element.
    Append,
    /// Anything else.
    Key,
}

impl TokenKind {
    /// Whether a placeholder preceding this token should be an array.
    pub fn wants_array(self) -> bool {
        matches!(self, TokenKind::Index(_) | TokenKind::Append)
    }
}

/// Nodes visited by a read-only walk, root first.
///
/// One entry per consumed token; a walk that failed part way holds only the
/// nodes that exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail<'a> {
    nodes: Vec<&'a Value>,
    tokens: usize,
}

impl<'a> Trail<'a> {
    pub(crate) fn new(nodes: Vec<&'a Value>, tokens: usize) -> Self {
        Self { nodes, tokens }
    }

    /// Number of tokens in the walked pointer, root slot included.
    pub fn token_count(&self) -> usize {
        self.tokens
    }

    /// Whether every token resolved to an existing node.
    pub fn is_complete(&self) -> bool {
        self.nodes.len() == self.tokens
    }

    /// The visited nodes, root first.
    pub fn nodes(&self) -> &[&'a Value] {
        &self.nodes
    }

    /// The node `generation` steps above the pointer's target.
    ///
    /// Depth is counted against the full pointer, so an ancestor is only
    /// returned when the walk actually reached it.
    pub fn ancestor(&self, generation: usize) -> Option<&'a Value> {
        let depth = self.tokens.checked_sub(generation)?.checked_sub(1)?;
        self.nodes.get(depth).copied()
    }

    /// The pointer's target, if it exists.
    pub fn leaf(&self) -> Option<&'a Value> {
        self.ancestor(0)
    }
}

/// The container-relative address of a pointer's final segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target<'p> {
    /// Pointer to the parent container (may be `""`, the root).
    pub parent: &'p str,
    /// Unescaped final token.
    pub token: String,
}
