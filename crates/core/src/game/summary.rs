use super::*;
use crate::Outcome;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSummary {
    pub role: Role,
    pub position: i64,
    pub assets: i64,
    pub debits: i64,
    pub cards_drawn: usize,
    pub turns_taken: u32,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            role: player.role,
            position: player.position,
            assets: player.assets,
            debits: player.debits,
            cards_drawn: player.cards_drawn(),
            turns_taken: player.turns_taken,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    /// `None` while the game is still running.
    pub outcome: Option<Outcome>,
    pub rounds: u32,
    pub turns_played: u32,
    pub players: Vec<PlayerSummary>,
}

impl Game {
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            outcome: self.state.outcome(),
            rounds: self.state.round,
            turns_played: self.state.turns_played,
            players: self
                .turn_order
                .iter()
                .map(|role| PlayerSummary::from(self.player(*role)))
                .collect(),
        }
    }
}

impl GameSummary {
    pub fn player(&self, role: Role) -> Option<&PlayerSummary> {
        self.players.iter().find(|player| player.role == role)
    }
}
