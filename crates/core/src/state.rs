use crate::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    GameOver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Winner(Role),
    /// Ended by an exit decision; nobody won.
    Exited,
}

/// Game-wide status. Once over it stays over, and a winner is only ever
/// recorded together with the transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    phase: Phase,
    winner: Option<Role>,
    pub round: u32,
    pub turns_played: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::InProgress,
            winner: None,
            round: 0,
            turns_played: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn winner(&self) -> Option<Role> {
        self.winner
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match (self.phase, self.winner) {
            (Phase::InProgress, _) => None,
            (Phase::GameOver, Some(role)) => Some(Outcome::Winner(role)),
            (Phase::GameOver, None) => Some(Outcome::Exited),
        }
    }

    /// Returns false if the game had already ended.
    pub(crate) fn declare_winner(&mut self, role: Role) -> bool {
        if self.is_over() {
            return false;
        }
        self.phase = Phase::GameOver;
        self.winner = Some(role);
        true
    }

    pub(crate) fn force_exit(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.phase = Phase::GameOver;
        true
    }
}
