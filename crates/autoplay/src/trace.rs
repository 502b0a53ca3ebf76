use crate::AutoplayError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use struggle_core::{GameSummary, Outcome, Role};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    Won(Role),
    Exited,
    MaxTurns,
}

impl From<Option<Outcome>> for RunStatus {
    fn from(value: Option<Outcome>) -> Self {
        match value {
            Some(Outcome::Winner(role)) => Self::Won(role),
            Some(Outcome::Exited) => Self::Exited,
            None => Self::MaxTurns,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub seed: u64,
    pub status: RunStatus,
    pub summary: GameSummary,
    pub event_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchReport {
    pub games: Vec<GameRecord>,
    pub capitalist_wins: u32,
    pub worker_wins: u32,
    pub unfinished: u32,
    pub mean_turns: f64,
}

impl BatchReport {
    pub fn from_records(games: Vec<GameRecord>) -> Self {
        let mut report = Self::default();
        let mut total_turns = 0u64;
        for record in &games {
            match record.status {
                RunStatus::Won(Role::Capitalist) => report.capitalist_wins += 1,
                RunStatus::Won(Role::Worker) => report.worker_wins += 1,
                RunStatus::Exited | RunStatus::MaxTurns => report.unfinished += 1,
            }
            total_turns += u64::from(record.summary.turns_played);
        }
        if !games.is_empty() {
            report.mean_turns = total_turns as f64 / games.len() as f64;
        }
        report.games = games;
        report
    }

    pub fn wins(&self, role: Role) -> u32 {
        match role {
            Role::Capitalist => self.capitalist_wins,
            Role::Worker => self.worker_wins,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), AutoplayError> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}
