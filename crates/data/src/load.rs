use crate::schema::{Card, CardAction, CardRecord, DeckTables, GameConfig, Role};
use anyhow::{bail, Context};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const GAME_CONFIG_FILE: &str = "game.json";

/// File stem of a role's card table, e.g. `worker_cards`.
pub fn deck_file_stem(role: Role) -> String {
    format!("{}_cards", role.keyword())
}

pub fn card_from_record(record: &CardRecord) -> anyhow::Result<Card> {
    let Some(action) = CardAction::from_keyword(&record.action) else {
        bail!("unknown card action '{}'", record.action);
    };
    let magnitude = record.magnitude_for(action);
    if action.carries_magnitude() && magnitude.is_none() {
        bail!(
            "{} card '{}' has no {} value",
            action.keyword(),
            record.prompt,
            action.keyword()
        );
    }
    Ok(Card {
        action,
        prompt: record.prompt.trim().to_string(),
        magnitude,
    })
}

/// Reads a headed CSV table: `action,prompt,asset,debit,position,turn`.
pub fn parse_cards_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Card>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut cards = Vec::new();
    for (idx, row) in csv.deserialize::<CardRecord>().enumerate() {
        // Row 1 is the header.
        let line = idx + 2;
        let record = row.with_context(|| format!("row {line}"))?;
        cards.push(card_from_record(&record).with_context(|| format!("row {line}"))?);
    }
    Ok(cards)
}

/// Reads a JSON array of card records.
pub fn parse_cards_json(raw: &str) -> anyhow::Result<Vec<Card>> {
    let records: Vec<CardRecord> = serde_json::from_str(raw)?;
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| card_from_record(record).with_context(|| format!("record {idx}")))
        .collect()
}

/// Loads a card table, choosing the format by file extension.
pub fn load_cards(path: &Path) -> anyhow::Result<Vec<Card>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        parse_cards_json(&raw)
    } else {
        let file = fs::File::open(path).with_context(|| format!("read {}", path.display()))?;
        parse_cards_csv(file)
    };
    let cards = parsed.with_context(|| format!("parse {}", path.display()))?;
    if cards.is_empty() {
        bail!("{} contains no cards", path.display());
    }
    log::debug!("loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

fn deck_path(dir: &Path, role: Role) -> anyhow::Result<PathBuf> {
    let stem = deck_file_stem(role);
    for ext in ["csv", "json"] {
        let path = dir.join(format!("{stem}.{ext}"));
        if path.exists() {
            return Ok(path);
        }
    }
    bail!("no {} deck ({stem}.csv or {stem}.json) in {}", role.keyword(), dir.display())
}

/// Loads both roles' tables from `dir`. Duplication and shuffling happen when
/// the game is built.
pub fn load_deck_tables(dir: &Path) -> anyhow::Result<DeckTables> {
    let capitalist = load_cards(&deck_path(dir, Role::Capitalist)?)?;
    let worker = load_cards(&deck_path(dir, Role::Worker)?)?;
    Ok(DeckTables { capitalist, worker })
}

/// Reads `game.json` from `dir` when present, otherwise the defaults.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(GAME_CONFIG_FILE);
    let config: GameConfig = if path.exists() {
        let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?
    } else {
        GameConfig::default()
    };
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}
