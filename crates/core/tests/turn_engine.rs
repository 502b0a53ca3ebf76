use struggle_core::{
    Card, CardAction, ChanceDecks, Deck, DeckExhaustion, DeckTables, Event, EventBus, Game,
    GameConfig, GameError, MenuChoice, Outcome, Prompt, RngState, Role, ScriptedDecisions,
    TurnEntry, TurnKind, TurnOutcome, MAX_DECK_COPIES,
};

fn asset_deck(role: Role) -> Deck {
    Deck::new(
        role,
        (0..32)
            .map(|idx| Card::new(CardAction::Asset, format!("asset {idx}"), 1))
            .collect(),
    )
}

fn game_with_config(config: GameConfig) -> Game {
    let decks = ChanceDecks::new(asset_deck(Role::Capitalist), asset_deck(Role::Worker))
        .expect("decks");
    Game::new(config, decks, 11).expect("game")
}

fn new_game() -> Game {
    game_with_config(GameConfig::default())
}

fn game_with_capitalist_cards(cards: Vec<Card>) -> Game {
    let decks = ChanceDecks::new(Deck::new(Role::Capitalist, cards), asset_deck(Role::Worker))
        .expect("decks");
    Game::new(GameConfig::default(), decks, 11).expect("game")
}

fn roll(game: &mut Game, role: Role, value: u8) -> (TurnOutcome, Vec<Event>) {
    let mut events = EventBus::default();
    let outcome = game
        .run_turn_with_roll(role, value, &mut ScriptedDecisions::new(), &mut events)
        .expect("turn");
    (outcome, events.drain().collect())
}

#[test]
fn exact_landing_wins_without_drawing() {
    let mut game = new_game();
    game.player_mut(Role::Capitalist).position = 12;
    let (outcome, events) = roll(&mut game, Role::Capitalist, 3);
    assert_eq!(outcome, TurnOutcome::Won { roll: 3 });
    assert_eq!(game.player(Role::Capitalist).position, 15);
    assert_eq!(game.state().winner(), Some(Role::Capitalist));
    assert_eq!(game.state().outcome(), Some(Outcome::Winner(Role::Capitalist)));
    assert_eq!(game.player(Role::Capitalist).draw_index, 1);
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::CardDrawn { .. })));
}

#[test]
fn overshoot_leaves_state_unchanged() {
    let mut game = new_game();
    game.player_mut(Role::Capitalist).position = 12;
    let before = game.player(Role::Capitalist).clone();
    let (outcome, events) = roll(&mut game, Role::Capitalist, 5);
    assert_eq!(outcome, TurnOutcome::Overshoot { roll: 5 });
    let after = game.player(Role::Capitalist);
    assert_eq!(after.position, before.position);
    assert_eq!(after.draw_index, before.draw_index);
    assert_eq!(after.assets, before.assets);
    assert!(!game.state().is_over());
    assert!(events.iter().any(|event| matches!(
        event,
        Event::MoveBlocked {
            position: 12,
            roll: 5,
            ..
        }
    )));
}

#[test]
fn short_move_draws_a_card() {
    let mut game = new_game();
    let (outcome, _) = roll(&mut game, Role::Worker, 4);
    assert_eq!(
        outcome,
        TurnOutcome::Moved {
            roll: 4,
            drawn: CardAction::Asset
        }
    );
    let worker = game.player(Role::Worker);
    assert_eq!(worker.position, 4);
    assert_eq!(worker.assets, 1);
    assert_eq!(worker.draw_index, 2);
    assert_eq!(worker.turns_taken, 1);
}

#[test]
fn skip_card_costs_the_next_turn() {
    let mut game = game_with_capitalist_cards(vec![
        Card::new(CardAction::Turn, "Lockout", -1),
        Card::new(CardAction::Asset, "", 1),
    ]);
    roll(&mut game, Role::Capitalist, 2);
    assert_eq!(game.player(Role::Capitalist).pending_turns, -1);

    let (outcome, events) = roll(&mut game, Role::Capitalist, 2);
    assert_eq!(outcome, TurnOutcome::Skipped { remaining: 0 });
    let capitalist = game.player(Role::Capitalist);
    assert_eq!(capitalist.pending_turns, 0);
    assert_eq!(capitalist.position, 2);
    assert_eq!(capitalist.draw_index, 2);
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::DiceRolled { .. })));

    let (outcome, _) = roll(&mut game, Role::Capitalist, 2);
    assert!(matches!(outcome, TurnOutcome::Moved { .. }));
}

#[test]
fn multiple_skips_are_consumed_one_per_turn() {
    let mut game = new_game();
    game.player_mut(Role::Worker).pending_turns = -2;
    assert_eq!(
        roll(&mut game, Role::Worker, 1).0,
        TurnOutcome::Skipped { remaining: -1 }
    );
    assert_eq!(
        roll(&mut game, Role::Worker, 1).0,
        TurnOutcome::Skipped { remaining: 0 }
    );
    assert!(matches!(
        roll(&mut game, Role::Worker, 1).0,
        TurnOutcome::Moved { .. }
    ));
}

#[test]
fn exact_landing_ends_game_before_extra_turns() {
    let mut game = new_game();
    game.player_mut(Role::Capitalist).position = 10;
    game.player_mut(Role::Capitalist).pending_turns = 2;
    let (outcome, _) = roll(&mut game, Role::Capitalist, 5);
    assert_eq!(outcome, TurnOutcome::Won { roll: 5 });
    let mut events = EventBus::default();
    let err = game
        .next_turn(&mut ScriptedDecisions::new(), &mut events)
        .expect_err("game over");
    assert_eq!(err, GameError::GameOver);
}

#[test]
fn extra_turns_follow_the_current_turn() {
    let config = GameConfig {
        board_end: 1_000,
        ..GameConfig::default()
    };
    let mut game = game_with_config(config);
    game.player_mut(Role::Capitalist).pending_turns = 2;
    let mut decisions = ScriptedDecisions::new();
    let mut events = EventBus::default();

    game.next_turn(&mut decisions, &mut events).expect("turn");
    let queued: Vec<TurnEntry> = game.queued_turns().copied().collect();
    assert_eq!(
        queued,
        vec![
            TurnEntry {
                role: Role::Capitalist,
                kind: TurnKind::Extra
            },
            TurnEntry {
                role: Role::Capitalist,
                kind: TurnKind::Extra
            },
            TurnEntry {
                role: Role::Worker,
                kind: TurnKind::Normal
            },
        ]
    );
    assert_eq!(game.player(Role::Capitalist).pending_turns, 0);

    for _ in 0..3 {
        game.next_turn(&mut decisions, &mut events).expect("turn");
    }
    let started: Vec<(Role, TurnKind)> = events
        .drain()
        .filter_map(|event| match event {
            Event::TurnStarted { role, kind, .. } => Some((role, kind)),
            _ => None,
        })
        .collect();
    assert_eq!(
        started,
        vec![
            (Role::Capitalist, TurnKind::Normal),
            (Role::Capitalist, TurnKind::Extra),
            (Role::Capitalist, TurnKind::Extra),
            (Role::Worker, TurnKind::Normal),
        ]
    );
    assert_eq!(game.player(Role::Capitalist).turns_taken, 3);
    assert_eq!(game.state().round, 1);

    game.next_turn(&mut decisions, &mut events).expect("turn");
    assert_eq!(game.state().round, 2);
}

#[test]
fn turn_order_follows_roles() {
    let decks = ChanceDecks::new(asset_deck(Role::Capitalist), asset_deck(Role::Worker))
        .expect("decks");
    let mut game =
        Game::with_roles(GameConfig::default(), decks, &[Role::Worker, Role::Capitalist], 3)
            .expect("game");
    let mut events = EventBus::default();
    game.next_turn(&mut ScriptedDecisions::new(), &mut events)
        .expect("turn");
    assert!(events.events().iter().any(|event| matches!(
        event,
        Event::TurnStarted {
            role: Role::Worker,
            kind: TurnKind::Normal,
            ..
        }
    )));
}

#[test]
fn exit_ends_game_without_winner() {
    let mut game = new_game();
    let mut decisions = ScriptedDecisions::new().with_menu([MenuChoice::Exit]);
    let mut events = EventBus::default();
    let outcome = game.next_turn(&mut decisions, &mut events).expect("turn");
    assert_eq!(outcome, TurnOutcome::Exited);
    assert!(game.state().is_over());
    assert_eq!(game.state().winner(), None);
    assert_eq!(game.state().outcome(), Some(Outcome::Exited));
    assert_eq!(game.player(Role::Capitalist).position, 0);
    assert_eq!(
        game.play(&mut decisions, &mut events).expect("play"),
        Outcome::Exited
    );
}

#[test]
fn stats_and_invalid_menu_answers_do_not_consume_the_turn() {
    let mut game = new_game();
    let mut decisions = ScriptedDecisions::new().with_menu([
        MenuChoice::Stats,
        MenuChoice::Invalid,
        MenuChoice::Continue,
    ]);
    let mut events = EventBus::default();
    game.next_turn(&mut decisions, &mut events).expect("turn");
    let events: Vec<Event> = events.drain().collect();
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::StatsShown { player } if player.role == Role::Capitalist)));
    assert!(events.iter().any(|event| matches!(
        event,
        Event::InvalidAnswer {
            prompt: Prompt::TurnMenu,
            ..
        }
    )));
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::DiceRolled { role: Role::Capitalist, .. })));
    assert_eq!(game.player(Role::Capitalist).turns_taken, 1);
}

#[test]
fn rejects_unsupported_player_counts() {
    for roles in [
        vec![Role::Capitalist],
        vec![Role::Capitalist, Role::Worker, Role::Worker],
        vec![],
    ] {
        let decks = ChanceDecks::new(asset_deck(Role::Capitalist), asset_deck(Role::Worker))
            .expect("decks");
        let err = Game::with_roles(GameConfig::default(), decks, &roles, 1).expect_err("count");
        assert_eq!(err, GameError::UnsupportedPlayerCount(roles.len()));
    }
}

#[test]
fn rejects_duplicate_roles() {
    let decks = ChanceDecks::new(asset_deck(Role::Capitalist), asset_deck(Role::Worker))
        .expect("decks");
    let err = Game::with_roles(GameConfig::default(), decks, &[Role::Worker, Role::Worker], 1)
        .expect_err("duplicate");
    assert_eq!(err, GameError::DuplicateRole(Role::Worker));
}

#[test]
fn rejects_invalid_config() {
    let config = GameConfig {
        board_end: 0,
        ..GameConfig::default()
    };
    let decks = ChanceDecks::new(asset_deck(Role::Capitalist), asset_deck(Role::Worker))
        .expect("decks");
    assert!(matches!(
        Game::new(config, decks, 1),
        Err(GameError::InvalidConfig(_))
    ));
}

#[test]
fn rejects_oversized_decks_and_negative_bonus() {
    for config in [
        GameConfig {
            deck_copies: usize::MAX,
            ..GameConfig::default()
        },
        GameConfig {
            deck_copies: MAX_DECK_COPIES + 1,
            ..GameConfig::default()
        },
        GameConfig {
            confrontation_bonus: -1,
            ..GameConfig::default()
        },
    ] {
        assert!(matches!(
            Game::from_tables(config, &mixed_tables(), 1),
            Err(GameError::InvalidConfig(_))
        ));
    }
}

#[test]
fn shuffled_deck_size_overflow_is_an_error() {
    let table = mixed_tables().worker;
    let mut rng = RngState::from_seed(1);
    assert!(matches!(
        Deck::shuffled(Role::Worker, &table, usize::MAX, &mut rng),
        Err(GameError::InvalidConfig(_))
    ));
}

#[test]
fn table_setup_checks_roles_before_shuffling() {
    let err = Game::from_tables_with_roles(
        GameConfig::default(),
        &mixed_tables(),
        &[Role::Worker],
        1,
    )
    .expect_err("count");
    assert_eq!(err, GameError::UnsupportedPlayerCount(1));

    let config = GameConfig {
        deck_copies: usize::MAX,
        ..GameConfig::default()
    };
    let err = Game::from_tables_with_roles(
        config,
        &mixed_tables(),
        &[Role::Capitalist, Role::Capitalist],
        1,
    )
    .expect_err("duplicate");
    assert_eq!(err, GameError::DuplicateRole(Role::Capitalist));
}

#[test]
fn rejects_empty_and_mismatched_decks() {
    assert_eq!(
        ChanceDecks::new(asset_deck(Role::Capitalist), Deck::new(Role::Worker, Vec::new()))
            .expect_err("empty"),
        GameError::EmptyDeck(Role::Worker)
    );
    assert_eq!(
        ChanceDecks::new(asset_deck(Role::Worker), asset_deck(Role::Worker)).expect_err("role"),
        GameError::DeckRoleMismatch {
            expected: Role::Capitalist,
            found: Role::Worker
        }
    );
}

fn mixed_tables() -> DeckTables {
    let table = vec![
        Card::new(CardAction::Asset, "Dividends", 3),
        Card::new(CardAction::Debit, "Strike", 2),
        Card::new(CardAction::Position, "Boom", 4),
        Card::new(CardAction::Position, "Crash", -20),
        Card::new(CardAction::Turn, "Lockout", -1),
        Card::new(CardAction::Turn, "Momentum", 1),
        Card::confrontation("Confront"),
    ];
    DeckTables {
        capitalist: table.clone(),
        worker: table,
    }
}

#[test]
fn decks_from_tables_are_doubled() {
    let tables = mixed_tables();
    let game = Game::from_tables(GameConfig::default(), &tables, 5).expect("game");
    for role in Role::ALL {
        let deck = game.decks().for_role(role);
        assert_eq!(deck.len(), tables.for_role(role).len() * 2);
        for card in tables.for_role(role) {
            let copies = deck.cards().iter().filter(|item| *item == card).count();
            assert_eq!(copies, 2);
        }
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let config = GameConfig {
        deck_exhaustion: DeckExhaustion::Cycle,
        ..GameConfig::default()
    };
    let play = || {
        let mut game = Game::from_tables(config.clone(), &mixed_tables(), 42).expect("game");
        let mut events = EventBus::default();
        game.play(&mut ScriptedDecisions::new(), &mut events)
            .expect("play");
        game.summary()
    };
    assert_eq!(play(), play());
}

#[test]
fn full_game_keeps_positions_on_the_board() {
    let config = GameConfig {
        deck_exhaustion: DeckExhaustion::Cycle,
        ..GameConfig::default()
    };
    for seed in 0..20 {
        let mut game = Game::from_tables(config.clone(), &mixed_tables(), seed).expect("game");
        let mut decisions = ScriptedDecisions::new();
        let mut events = EventBus::default();
        let mut turns = 0;
        while !game.state().is_over() {
            game.next_turn(&mut decisions, &mut events).expect("turn");
            for player in game.players() {
                assert!(player.position >= 0 && player.position <= config.board_end);
            }
            turns += 1;
            assert!(turns < 100_000, "seed {seed} did not finish");
        }
        let winner = game.state().winner().expect("winner");
        assert_eq!(game.player(winner).position, config.board_end);
        assert!(game.player(winner.opponent()).position < config.board_end);
        let summary = game.summary();
        assert_eq!(summary.outcome, Some(Outcome::Winner(winner)));
        for player in game.players() {
            let drawn = events
                .events()
                .iter()
                .filter(|event| matches!(event, Event::CardDrawn { role, .. } if *role == player.role))
                .count();
            assert_eq!(drawn, player.cards_drawn());
        }
    }
}
