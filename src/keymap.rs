//! Key classification
//!
//! Maps raw key identifiers (whatever the input wiring produces) to one of
//! four key classes before state dispatch. The identifier sets come from
//! configuration and are immutable for the process lifetime.

use std::collections::HashSet;
use std::fmt;

use crate::config::KeysConfig;
use crate::editor::{is_digit_key, DECIMAL_KEY, SIGN_KEY};
use crate::error::{CalcError, ConfigError};

/// The class a raw key identifier belongs to.
///
/// Derived fresh on every press; classification has no memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Clear,
    Edit,
    Operator,
    Evaluate,
}

impl fmt::Display for KeyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyClass::Clear => "clear",
            KeyClass::Edit => "edit",
            KeyClass::Operator => "operator",
            KeyClass::Evaluate => "evaluate",
        };
        f.write_str(name)
    }
}

/// Immutable key classification table built from configuration.
#[derive(Debug, Clone)]
pub struct Keymap {
    clear: String,
    edit: HashSet<String>,
    operator: HashSet<String>,
    evaluate: HashSet<String>,
}

impl Keymap {
    /// Build a keymap, validating the configured sets up front.
    ///
    /// The four sets must be disjoint, and every edit key must be a single
    /// digit, the decimal point, or the sign toggle; anything else would
    /// leave the numeric editor with no applicable rule.
    pub fn new(keys: &KeysConfig) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        seen.insert(keys.clear.clone());
        for key in keys
            .edit
            .iter()
            .chain(&keys.operator)
            .chain(&keys.evaluate)
        {
            if !seen.insert(key.clone()) {
                return Err(ConfigError::OverlappingKeys { key: key.clone() });
            }
        }

        for key in &keys.edit {
            let valid = key == SIGN_KEY || key == DECIMAL_KEY || is_digit_key(key);
            if !valid {
                return Err(ConfigError::InvalidEditKey { key: key.clone() });
            }
        }

        Ok(Self {
            clear: keys.clear.clone(),
            edit: keys.edit.iter().cloned().collect(),
            operator: keys.operator.iter().cloned().collect(),
            evaluate: keys.evaluate.iter().cloned().collect(),
        })
    }

    /// Classify a raw key identifier.
    ///
    /// An identifier outside all four sets is a configuration or integration
    /// bug and fails loudly; it is never silently ignored.
    pub fn classify(&self, key: &str) -> Result<KeyClass, CalcError> {
        if key == self.clear {
            Ok(KeyClass::Clear)
        } else if self.edit.contains(key) {
            Ok(KeyClass::Edit)
        } else if self.operator.contains(key) {
            Ok(KeyClass::Operator)
        } else if self.evaluate.contains(key) {
            Ok(KeyClass::Evaluate)
        } else {
            Err(CalcError::UnrecognizedKey {
                key: key.to_string(),
            })
        }
    }
}
