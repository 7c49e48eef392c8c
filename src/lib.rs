//! Calcpad Library
//!
//! Input-handling core of a four-function calculator:
//! - Key classification over configured identifier sets
//! - Numeric string editing with width and decimal-point rules
//! - Arithmetic evaluation with overflow handling
//! - A four-state expression controller tying it together

pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod eval;
pub mod keymap;
pub mod logging;
pub mod session;

pub use controller::Controller;
pub use error::{CalcError, ConfigError};
pub use keymap::{KeyClass, Keymap};
pub use session::{DisplayState, Session, State};
