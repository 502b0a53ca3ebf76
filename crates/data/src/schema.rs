use serde::{Deserialize, Serialize};

pub use struggle_core::{Card, CardAction, DeckTables, GameConfig, Role};

/// One row of a chance card table.
///
/// Each action kind reads its magnitude from the column of the same name;
/// confrontation rows leave every magnitude empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRecord {
    pub action: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub asset: Option<i64>,
    #[serde(default)]
    pub debit: Option<i64>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub turn: Option<i64>,
}

impl CardRecord {
    pub fn magnitude_for(&self, action: CardAction) -> Option<i64> {
        match action {
            CardAction::Asset => self.asset,
            CardAction::Debit => self.debit,
            CardAction::Position => self.position,
            CardAction::Turn => self.turn,
            CardAction::Confrontation => None,
        }
    }
}
