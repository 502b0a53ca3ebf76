use crate::{CardAction, ChanceDecks, GameConfig, GameState, Player, RngState, Role};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

mod effects;
mod setup;
mod summary;
mod turn;

pub use summary::{GameSummary, PlayerSummary};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("unsupported player count {0}: the game is played by exactly two players")]
    UnsupportedPlayerCount(usize),
    #[error("role {0:?} assigned to more than one player")]
    DuplicateRole(Role),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("{0:?} deck is empty")]
    EmptyDeck(Role),
    #[error("deck for {found:?} supplied where {expected:?} was expected")]
    DeckRoleMismatch { expected: Role, found: Role },
    #[error("{role:?} deck exhausted: draw {draw_index} of {size} cards")]
    DeckExhausted {
        role: Role,
        draw_index: usize,
        size: usize,
    },
    #[error("{role:?} card {draw_index} ({action:?}) has no magnitude")]
    MissingMagnitude {
        role: Role,
        draw_index: usize,
        action: CardAction,
    },
    #[error("game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnKind {
    Normal,
    Extra,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnEntry {
    pub role: Role,
    pub kind: TurnKind,
}

/// What a single turn did. A card drawn after a move may still end the game,
/// so check [`GameState::outcome`] after `Moved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Skipped { remaining: i32 },
    Overshoot { roll: u8 },
    Moved { roll: u8, drawn: CardAction },
    Won { roll: u8 },
    Exited,
}

#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    decks: ChanceDecks,
    players: [Player; 2],
    turn_order: [Role; 2],
    state: GameState,
    rng: RngState,
    queue: VecDeque<TurnEntry>,
}
