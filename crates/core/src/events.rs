use crate::{CardAction, ConfrontationOutcome, Player, Role, TurnKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Prompt {
    TurnMenu,
    Confrontation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted { round: u32 },
    TurnStarted {
        role: Role,
        kind: TurnKind,
        position: i64,
    },
    StatsShown { player: Player },
    InvalidAnswer { role: Role, prompt: Prompt },
    TurnSkipped { role: Role, remaining: i32 },
    ExtraTurnsScheduled { role: Role, count: i32 },
    DiceRolled { role: Role, roll: u8 },
    MoveBlocked { role: Role, position: i64, roll: u8 },
    Moved { role: Role, from: i64, to: i64 },
    CardDrawn {
        role: Role,
        draw_index: usize,
        action: CardAction,
        prompt: String,
    },
    AssetsChanged { role: Role, delta: i64, assets: i64 },
    DebitsChanged { role: Role, delta: i64, debits: i64 },
    PositionChanged { role: Role, delta: i64, position: i64 },
    PositionClamped { role: Role, delta: i64 },
    PositionBlocked { role: Role, delta: i64, position: i64 },
    PendingTurnsChanged { role: Role, delta: i64, pending: i32 },
    ConfrontationResolved {
        challenger: Role,
        outcome: ConfrontationOutcome,
        challenger_net: i64,
        defender_net: i64,
    },
    GameWon { role: Role, position: i64 },
    GameExited { role: Role },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn events(&self) -> &[Event] {
        &self.queue
    }
}
