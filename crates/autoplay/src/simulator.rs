use crate::{AutoplayConfig, AutoplayError, BatchReport, GameRecord, PolicyDecisions, RunStatus};
use struggle_core::{DeckTables, EventBus, Game, GameConfig};

/// Plays one seeded game to completion or to the turn cap.
pub fn play_game(
    config: &GameConfig,
    tables: &DeckTables,
    seed: u64,
    auto: &AutoplayConfig,
) -> Result<GameRecord, AutoplayError> {
    let mut game = Game::from_tables(config.clone(), tables, seed)?;
    let mut decisions = PolicyDecisions::new(auto.confront);
    let mut events = EventBus::default();
    let mut event_count = 0usize;
    for _ in 0..auto.max_turns {
        if game.state().is_over() {
            break;
        }
        game.next_turn(&mut decisions, &mut events)?;
        event_count += events.drain().count();
    }
    let status = RunStatus::from(game.state().outcome());
    log::debug!("seed {seed}: {status:?} after {} turns", game.state().turns_played);
    Ok(GameRecord {
        seed,
        status,
        summary: game.summary(),
        event_count,
    })
}

/// Plays `auto.games` games with consecutive seeds starting at `auto.seed`.
pub fn simulate(
    config: &GameConfig,
    tables: &DeckTables,
    auto: &AutoplayConfig,
) -> Result<BatchReport, AutoplayError> {
    let mut records = Vec::with_capacity(auto.games as usize);
    for offset in 0..u64::from(auto.games) {
        let seed = auto.seed.wrapping_add(offset);
        records.push(play_game(config, tables, seed, auto)?);
    }
    let report = BatchReport::from_records(records);
    log::info!(
        "{} games: capitalist {} / worker {} / unfinished {}",
        report.games.len(),
        report.capitalist_wins,
        report.worker_wins,
        report.unfinished
    );
    Ok(report)
}
