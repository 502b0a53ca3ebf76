use crate::{EventBus, Player, Role};
use std::collections::VecDeque;

/// Yes/no answer to a confrontation prompt. `Invalid` asks for a re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Accept,
    Decline,
    Invalid,
}

impl Answer {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Self::Accept,
            "no" | "n" => Self::Decline,
            _ => Self::Invalid,
        }
    }
}

/// Choice offered at the start of every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Stats,
    Continue,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "stats" | "s" => Self::Stats,
            "play" | "continue" | "p" | "c" => Self::Continue,
            "exit" | "quit" | "x" | "q" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Read-only view handed to a decision provider.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub role: Role,
    pub player: &'a Player,
    pub opponent: &'a Player,
    pub board_end: i64,
    pub round: u32,
}

/// External source of answers. Calls block the turn loop until they return.
pub trait DecisionProvider {
    fn turn_menu(&mut self, view: &TurnView<'_>) -> MenuChoice;
    fn confront(&mut self, view: &TurnView<'_>) -> Answer;

    /// Called before every prompt with the events pushed so far, so an
    /// interactive provider can show them in order. Draining is allowed.
    fn observe(&mut self, _events: &mut EventBus) {}
}

impl<D: DecisionProvider + ?Sized> DecisionProvider for &mut D {
    fn turn_menu(&mut self, view: &TurnView<'_>) -> MenuChoice {
        (**self).turn_menu(view)
    }

    fn confront(&mut self, view: &TurnView<'_>) -> Answer {
        (**self).confront(view)
    }

    fn observe(&mut self, events: &mut EventBus) {
        (**self).observe(events)
    }
}

/// Replays queued answers, then falls back to `Continue` and `Decline`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDecisions {
    pub menu: VecDeque<MenuChoice>,
    pub answers: VecDeque<Answer>,
}

impl ScriptedDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(mut self, choices: impl IntoIterator<Item = MenuChoice>) -> Self {
        self.menu.extend(choices);
        self
    }

    pub fn with_answers(mut self, answers: impl IntoIterator<Item = Answer>) -> Self {
        self.answers.extend(answers);
        self
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn turn_menu(&mut self, _view: &TurnView<'_>) -> MenuChoice {
        self.menu.pop_front().unwrap_or(MenuChoice::Continue)
    }

    fn confront(&mut self, _view: &TurnView<'_>) -> Answer {
        self.answers.pop_front().unwrap_or(Answer::Decline)
    }
}
