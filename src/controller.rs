//! Expression controller
//!
//! The finite state machine at the heart of the calculator. Each key press
//! is classified, then routed through the per-state transition table:
//!
//! | state       | edit              | operator                          | evaluate     |
//! |-------------|-------------------|-----------------------------------|--------------|
//! | AWAIT-LEFT  | start lhs entry   | set op, await rhs                 | no-op        |
//! | ENTER-LEFT  | edit lhs          | set op, await rhs                 | no-op        |
//! | AWAIT-RIGHT | start rhs entry   | rhs <- lhs, evaluate, set new op  | no-op        |
//! | ENTER-RIGHT | edit rhs          | evaluate, set new op              | evaluate     |
//!
//! A clear key resets the session from any state, before dispatch.

use tracing::debug;

use crate::editor::update_string;
use crate::error::CalcError;
use crate::eval::operate;
use crate::keymap::{KeyClass, Keymap};
use crate::session::{DisplayState, Session, State};

/// Owns the session and routes every key press through the transition table.
///
/// Single writer: no other component holds mutable access to the session.
#[derive(Debug)]
pub struct Controller {
    keymap: Keymap,
    session: Session,
}

impl Controller {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            session: Session::new(),
        }
    }

    /// Handle one logical key press to completion.
    ///
    /// The sole mutating entry point. Errors indicate configuration or
    /// integration bugs and leave the triggering press unapplied; invalid
    /// arithmetic is not an error and surfaces as the `"NaN"` display value.
    pub fn handle_key(&mut self, key: &str) -> Result<(), CalcError> {
        let class = self.keymap.classify(key)?;
        if class == KeyClass::Clear {
            self.session.reset();
        } else {
            match self.session.state {
                State::AwaitLeft => self.on_await_left(key, class)?,
                State::EnterLeft => self.on_enter_left(key, class)?,
                State::AwaitRight => self.on_await_right(key, class)?,
                State::EnterRight => self.on_enter_right(key, class)?,
            }
        }
        debug!(
            state = %self.session.state,
            lhs = %self.session.lhs,
            op = %self.session.op,
            rhs = %self.session.rhs,
            "handled key {:?}",
            key
        );
        Ok(())
    }

    /// Projection for the rendering collaborator: the current state and the
    /// value the display should show.
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            state: self.session.state,
            value: self.session.display_value().to_string(),
        }
    }

    /// Read access to the raw session fields.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn on_await_left(&mut self, key: &str, class: KeyClass) -> Result<(), CalcError> {
        match class {
            KeyClass::Edit => {
                self.session.lhs = update_string("", key)?;
                self.session.state = State::EnterLeft;
                Ok(())
            }
            KeyClass::Operator => {
                self.session.op = key.to_string();
                self.session.state = State::AwaitRight;
                Ok(())
            }
            // nothing pending, nothing to evaluate
            KeyClass::Evaluate => Ok(()),
            KeyClass::Clear => self.bad_key_class(class),
        }
    }

    fn on_enter_left(&mut self, key: &str, class: KeyClass) -> Result<(), CalcError> {
        match class {
            KeyClass::Edit => {
                self.session.lhs = update_string(&self.session.lhs, key)?;
                Ok(())
            }
            KeyClass::Operator => {
                self.session.op = key.to_string();
                self.session.state = State::AwaitRight;
                Ok(())
            }
            KeyClass::Evaluate => Ok(()),
            KeyClass::Clear => self.bad_key_class(class),
        }
    }

    fn on_await_right(&mut self, key: &str, class: KeyClass) -> Result<(), CalcError> {
        match class {
            KeyClass::Edit => {
                self.session.rhs = update_string("", key)?;
                self.session.state = State::EnterRight;
                Ok(())
            }
            KeyClass::Operator => {
                // Operator overrides operator: the pending operator applies
                // the left operand to itself, then the new one takes over.
                self.session.rhs = self.session.lhs.clone();
                self.evaluate()?;
                self.session.op = key.to_string();
                self.session.state = State::AwaitRight;
                Ok(())
            }
            KeyClass::Evaluate => Ok(()),
            KeyClass::Clear => self.bad_key_class(class),
        }
    }

    fn on_enter_right(&mut self, key: &str, class: KeyClass) -> Result<(), CalcError> {
        match class {
            KeyClass::Edit => {
                self.session.rhs = update_string(&self.session.rhs, key)?;
                Ok(())
            }
            KeyClass::Operator => {
                self.evaluate()?;
                self.session.op = key.to_string();
                self.session.state = State::AwaitRight;
                Ok(())
            }
            KeyClass::Evaluate => self.evaluate(),
            KeyClass::Clear => self.bad_key_class(class),
        }
    }

    /// Fold the pending operation into the left operand and start over.
    fn evaluate(&mut self) -> Result<(), CalcError> {
        let result = operate(&self.session.op, &self.session.lhs, &self.session.rhs)?;
        self.session.lhs = result;
        self.session.op.clear();
        self.session.rhs.clear();
        self.session.state = State::AwaitLeft;
        Ok(())
    }

    /// Dispatch-gap guard: clear is consumed before dispatch, so no state
    /// handler has a row for it.
    fn bad_key_class(&self, class: KeyClass) -> Result<(), CalcError> {
        Err(CalcError::BadKeyClass {
            class,
            state: self.session.state,
        })
    }
}
