use crate::GameError;
use serde::{Deserialize, Serialize};

/// Upper bound on how many times a card table is repeated in a deck.
pub const MAX_DECK_COPIES: usize = 64;

/// What happens when a player's draw index runs past the end of their deck.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeckExhaustion {
    #[default]
    Fail,
    Cycle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub board_end: i64,
    pub die_sides: u8,
    pub deck_copies: usize,
    pub confrontation_bonus: i32,
    pub deck_exhaustion: DeckExhaustion,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_end: 15,
            die_sides: 6,
            deck_copies: 2,
            confrontation_bonus: 2,
            deck_exhaustion: DeckExhaustion::Fail,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_end <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "board_end must be positive, got {}",
                self.board_end
            )));
        }
        if self.die_sides == 0 {
            return Err(GameError::InvalidConfig("die_sides must be non-zero".to_string()));
        }
        if self.deck_copies == 0 || self.deck_copies > MAX_DECK_COPIES {
            return Err(GameError::InvalidConfig(format!(
                "deck_copies must be between 1 and {MAX_DECK_COPIES}, got {}",
                self.deck_copies
            )));
        }
        if self.confrontation_bonus < 0 {
            return Err(GameError::InvalidConfig(format!(
                "confrontation_bonus must not be negative, got {}",
                self.confrontation_bonus
            )));
        }
        Ok(())
    }
}
