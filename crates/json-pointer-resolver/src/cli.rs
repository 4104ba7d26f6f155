//! Library side of the `json-pointer` binary.
//!
//! - `json-pointer <pointer> [generation]` prints the value at the pointer
//! - `json-pointer set <pointer> <json>` prints the document after `set`
//!
//! The document is always read from stdin.

use serde_json::Value;

use crate::{PointerError, Resolver};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Pointer(PointerError),
    NotFound,
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)    => write!(f, "{e}"),
            CliError::Pointer(e) => write!(f, "{e}"),
            CliError::NotFound   => write!(f, "NOT_FOUND"),
            CliError::Usage(e)   => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

impl From<PointerError> for CliError {
    fn from(e: PointerError) -> Self { CliError::Pointer(e) }
}

// ── Commands ──────────────────────────────────────────────────────────────

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get { pointer: String, generation: usize },
    Set { pointer: String, value: String },
}

impl Command {
    /// Parse arguments (program name excluded).
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        match args {
            [cmd, pointer, value] if cmd == "set" => Ok(Command::Set {
                pointer: pointer.clone(),
                value: value.clone(),
            }),
            [cmd, ..] if cmd == "set" => Err(usage()),
            [pointer] => Ok(Command::Get {
                pointer: pointer.clone(),
                generation: 0,
            }),
            [pointer, generation] => {
                let generation = generation.parse().map_err(|_| {
                    CliError::Usage(format!("Generation must be a non-negative integer, got {generation:?}."))
                })?;
                Ok(Command::Get {
                    pointer: pointer.clone(),
                    generation,
                })
            }
            _ => Err(usage()),
        }
    }

    /// Run against a document given as JSON text.
    pub fn run(&self, doc_json: &str) -> Result<String, CliError> {
        match self {
            Command::Get { pointer, generation } => lookup_pointer(doc_json, pointer, *generation),
            Command::Set { pointer, value } => assign_pointer(doc_json, pointer, value),
        }
    }
}

fn usage() -> CliError {
    CliError::Usage(
        "Usage: json-pointer <pointer> [generation] | json-pointer set <pointer> <json>".to_string(),
    )
}

/// Look up `pointer` (or its ancestor `generation` levels up) in a document.
///
/// Returns the found value as a pretty-printed JSON string.
pub fn lookup_pointer(doc_json: &str, pointer: &str, generation: usize) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let resolver = Resolver::new(&doc);
    let found = resolver
        .dereference_generation(pointer, generation)
        .ok_or(CliError::NotFound)?;
    Ok(serde_json::to_string_pretty(found)?)
}

/// Set `pointer` to the JSON value `value_json` and return the whole
/// document, pretty-printed.
pub fn assign_pointer(doc_json: &str, pointer: &str, value_json: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let value: Value = serde_json::from_str(value_json)?;
    let mut resolver = Resolver::new(doc);
    resolver.set(pointer, value)?;
    Ok(serde_json::to_string_pretty(resolver.root())?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
