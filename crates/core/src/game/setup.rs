use super::*;
use crate::{DeckTables, TurnView};

impl Game {
    /// Capitalist moves first, then worker.
    pub fn new(config: GameConfig, decks: ChanceDecks, seed: u64) -> Result<Self, GameError> {
        Self::with_roles(config, decks, &Role::ALL, seed)
    }

    /// Duplicates and shuffles both tables with the game's own RNG.
    pub fn from_tables(
        config: GameConfig,
        tables: &DeckTables,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::from_tables_with_roles(config, tables, &Role::ALL, seed)
    }

    pub fn from_tables_with_roles(
        config: GameConfig,
        tables: &DeckTables,
        roles: &[Role],
        seed: u64,
    ) -> Result<Self, GameError> {
        let turn_order = checked_turn_order(roles)?;
        config.validate()?;
        let mut rng = RngState::from_seed(seed);
        let decks = ChanceDecks::shuffled(tables, config.deck_copies, &mut rng)?;
        Ok(Self::assemble(config, decks, turn_order, rng))
    }

    /// `roles` gives the turn order and must name each role exactly once.
    pub fn with_roles(
        config: GameConfig,
        decks: ChanceDecks,
        roles: &[Role],
        seed: u64,
    ) -> Result<Self, GameError> {
        let turn_order = checked_turn_order(roles)?;
        config.validate()?;
        Ok(Self::assemble(
            config,
            decks,
            turn_order,
            RngState::from_seed(seed),
        ))
    }

    fn assemble(
        config: GameConfig,
        decks: ChanceDecks,
        turn_order: [Role; 2],
        rng: RngState,
    ) -> Self {
        log::debug!(
            "new game: board end {}, turn order {:?}, seed {}",
            config.board_end,
            turn_order,
            rng.seed()
        );
        Self {
            config,
            decks,
            players: [Player::new(Role::Capitalist), Player::new(Role::Worker)],
            turn_order,
            state: GameState::new(),
            rng,
            queue: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn decks(&self) -> &ChanceDecks {
        &self.decks
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn_order(&self) -> [Role; 2] {
        self.turn_order
    }

    pub fn player(&self, role: Role) -> &Player {
        &self.players[role.seat()]
    }

    /// Direct access for setting up positions and counters.
    pub fn player_mut(&mut self, role: Role) -> &mut Player {
        &mut self.players[role.seat()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Turns still queued in the current round, in the order they will be taken.
    pub fn queued_turns(&self) -> impl Iterator<Item = &TurnEntry> + '_ {
        self.queue.iter()
    }

    pub fn view(&self, role: Role) -> TurnView<'_> {
        TurnView {
            role,
            player: self.player(role),
            opponent: self.player(role.opponent()),
            board_end: self.config.board_end,
            round: self.state.round,
        }
    }

    pub(super) fn pair_mut(&mut self, role: Role) -> (&mut Player, &mut Player) {
        let [capitalist, worker] = &mut self.players;
        match role {
            Role::Capitalist => (capitalist, worker),
            Role::Worker => (worker, capitalist),
        }
    }
}

fn checked_turn_order(roles: &[Role]) -> Result<[Role; 2], GameError> {
    match roles {
        [first, second] if first == second => Err(GameError::DuplicateRole(*first)),
        [first, second] => Ok([*first, *second]),
        _ => Err(GameError::UnsupportedPlayerCount(roles.len())),
    }
}
