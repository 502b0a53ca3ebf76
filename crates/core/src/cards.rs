use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardAction {
    Asset,
    Debit,
    Position,
    Turn,
    Confrontation,
}

impl CardAction {
    pub const ALL: [CardAction; 5] = [
        CardAction::Asset,
        CardAction::Debit,
        CardAction::Position,
        CardAction::Turn,
        CardAction::Confrontation,
    ];

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asset" | "assets" => Some(Self::Asset),
            "debit" | "debits" => Some(Self::Debit),
            "position" => Some(Self::Position),
            "turn" | "turns" => Some(Self::Turn),
            "confrontation" => Some(Self::Confrontation),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Debit => "debit",
            Self::Position => "position",
            Self::Turn => "turn",
            Self::Confrontation => "confrontation",
        }
    }

    /// Confrontations are the only cards drawn without a magnitude.
    pub fn carries_magnitude(self) -> bool {
        !matches!(self, Self::Confrontation)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub action: CardAction,
    pub prompt: String,
    #[serde(default)]
    pub magnitude: Option<i64>,
}

impl Card {
    pub fn new(action: CardAction, prompt: impl Into<String>, magnitude: i64) -> Self {
        Self {
            action,
            prompt: prompt.into(),
            magnitude: Some(magnitude),
        }
    }

    pub fn confrontation(prompt: impl Into<String>) -> Self {
        Self {
            action: CardAction::Confrontation,
            prompt: prompt.into(),
            magnitude: None,
        }
    }
}
