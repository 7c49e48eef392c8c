//! Calcpad Error Types
//!
//! Centralized error handling using thiserror for type-safe errors.
//!
//! Invalid arithmetic (division by zero, overflow) is deliberately absent
//! here: it is a modeled value, the `"NaN"` display sentinel, not an error.

use std::path::PathBuf;
use thiserror::Error;

use crate::keymap::KeyClass;
use crate::session::State;

/// Top-level error type for calcpad
///
/// Every variant is fatal to the key press that triggered it and indicates
/// an integration or configuration bug, never ordinary user input.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("key '{key}' matches none of the configured key classes")]
    UnrecognizedKey { key: String },

    #[error("sign toggle on malformed operand '{operand}': minus sign not leading")]
    InvalidSignState { operand: String },

    #[error("unknown operator '{op}'")]
    UnknownOperator { op: String },

    #[error("no handler for key class {class} in state {state}")]
    BadKeyClass { class: KeyClass, state: State },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("key '{key}' appears in more than one key class")]
    OverlappingKeys { key: String },

    #[error("'{key}' is not a valid edit key (expected a digit, '.' or '\u{b1}')")]
    InvalidEditKey { key: String },
}
