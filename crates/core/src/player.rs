use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Capitalist,
    Worker,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Capitalist, Role::Worker];

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "capitalist" => Some(Self::Capitalist),
            "worker" => Some(Self::Worker),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Capitalist => "capitalist",
            Self::Worker => "worker",
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::Capitalist => Self::Worker,
            Self::Worker => Self::Capitalist,
        }
    }

    pub(crate) fn seat(self) -> usize {
        match self {
            Self::Capitalist => 0,
            Self::Worker => 1,
        }
    }
}

/// Mutable per-participant state.
///
/// `draw_index` is 1-based and names the next card this player will draw.
/// `pending_turns` is positive for owed extra turns and negative for turns
/// that will be skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub role: Role,
    pub position: i64,
    pub assets: i64,
    pub debits: i64,
    pub draw_index: usize,
    pub pending_turns: i32,
    #[serde(default)]
    pub turns_taken: u32,
}

impl Player {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            position: 0,
            assets: 0,
            debits: 0,
            draw_index: 1,
            pending_turns: 0,
            turns_taken: 0,
        }
    }

    /// Assets minus debits. May be negative.
    pub fn net(&self) -> i64 {
        self.assets - self.debits
    }

    pub fn cards_drawn(&self) -> usize {
        self.draw_index.saturating_sub(1)
    }
}
