//! Calculator session state
//!
//! At most one binary operation is in flight at any time, so the whole
//! session is a state tag plus three strings: left operand, operator symbol,
//! right operand. Only the controller mutates it.

use std::fmt;

/// Controller state: which operand is being entered or awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Displaying the left operand, waiting for digits or an operator.
    AwaitLeft,
    /// Editing the left operand.
    EnterLeft,
    /// Operator chosen, waiting for right-hand entry to start.
    AwaitRight,
    /// Editing the right operand.
    EnterRight,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::AwaitLeft => "AWAIT-LEFT",
            State::EnterLeft => "ENTER-LEFT",
            State::AwaitRight => "AWAIT-RIGHT",
            State::EnterRight => "ENTER-RIGHT",
        };
        f.write_str(name)
    }
}

/// The expression in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Current controller state.
    pub state: State,
    /// Left operand, or the last result.
    pub lhs: String,
    /// Pending operator symbol; empty when none is pending.
    pub op: String,
    /// Right operand; empty until right-hand entry starts.
    pub rhs: String,
}

impl Session {
    /// The power-on configuration.
    pub fn new() -> Self {
        Self {
            state: State::AwaitLeft,
            lhs: "0".to_string(),
            op: String::new(),
            rhs: String::new(),
        }
    }

    /// Return to the power-on configuration.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    /// The value the display should show in the current state.
    pub fn display_value(&self) -> &str {
        match self.state {
            State::AwaitLeft | State::EnterLeft | State::AwaitRight => &self.lhs,
            State::EnterRight => &self.rhs,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only projection handed to the rendering collaborator after each
/// key press. Computed from session state alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub state: State,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn power_on_configuration() {
        let session = Session::new();
        assert_eq!(session.state, State::AwaitLeft);
        assert_eq!(session.lhs, "0");
        assert_eq!(session.op, "");
        assert_eq!(session.rhs, "");
    }

    #[test]
    fn reset_restores_power_on_exactly() {
        let mut session = Session {
            state: State::EnterRight,
            lhs: "42".to_string(),
            op: "*".to_string(),
            rhs: "7".to_string(),
        };
        session.reset();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn display_shows_rhs_only_while_entering_it() {
        let mut session = Session {
            state: State::AwaitLeft,
            lhs: "8".to_string(),
            op: "+".to_string(),
            rhs: "3".to_string(),
        };
        for state in [State::AwaitLeft, State::EnterLeft, State::AwaitRight] {
            session.state = state;
            assert_eq!(session.display_value(), "8");
        }
        session.state = State::EnterRight;
        assert_eq!(session.display_value(), "3");
    }
}
