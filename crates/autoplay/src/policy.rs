use serde::{Deserialize, Serialize};
use struggle_core::{Answer, DecisionProvider, MenuChoice, TurnView};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfrontPolicy {
    Always,
    Never,
    /// Accept only with a strictly higher net than the opponent.
    WhenAhead,
}

impl ConfrontPolicy {
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            "ahead" | "when_ahead" => Some(Self::WhenAhead),
            _ => None,
        }
    }
}

/// Non-interactive provider: always plays on, confronts by policy.
#[derive(Debug, Clone, Copy)]
pub struct PolicyDecisions {
    pub confront: ConfrontPolicy,
}

impl PolicyDecisions {
    pub fn new(confront: ConfrontPolicy) -> Self {
        Self { confront }
    }
}

impl DecisionProvider for PolicyDecisions {
    fn turn_menu(&mut self, _view: &TurnView<'_>) -> MenuChoice {
        MenuChoice::Continue
    }

    fn confront(&mut self, view: &TurnView<'_>) -> Answer {
        let accept = match self.confront {
            ConfrontPolicy::Always => true,
            ConfrontPolicy::Never => false,
            ConfrontPolicy::WhenAhead => view.player.net() > view.opponent.net(),
        };
        if accept {
            Answer::Accept
        } else {
            Answer::Decline
        }
    }
}
