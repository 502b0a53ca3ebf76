use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use struggle_autoplay::{simulate, AutoplayConfig, ConfrontPolicy, RunStatus};
use struggle_core::{
    Answer, CardAction, ConfrontationOutcome, DecisionProvider, Event, EventBus, Game, MenuChoice,
    Outcome, Player, Prompt, Role, TurnKind, TurnView,
};
use struggle_data::{load_deck_tables, load_game_config};

const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_AUTO_SEED: u64 = 0xC0FFEE;
const CARD_TEXT_WIDTH: usize = 30;

#[derive(Debug, Clone)]
struct CliOptions {
    auto: bool,
    seed: Option<u64>,
    assets: PathBuf,
    games: u32,
    max_turns: u32,
    trace: Option<PathBuf>,
    confront: ConfrontPolicy,
    first: Role,
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let defaults = AutoplayConfig::default();
    let mut options = CliOptions {
        auto: false,
        seed: None,
        assets: std::env::var("STRUGGLE_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ASSETS_DIR)),
        games: defaults.games,
        max_turns: defaults.max_turns,
        trace: None,
        confront: defaults.confront,
        first: Role::Capitalist,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let flag = args[idx].as_str();
        let mut value = || {
            idx += 1;
            args.get(idx)
                .cloned()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag {
            "--auto" => options.auto = true,
            "--seed" => {
                let raw = value()?;
                options.seed = Some(raw.parse().map_err(|_| format!("invalid seed '{raw}'"))?);
            }
            "--assets" => options.assets = PathBuf::from(value()?),
            "--games" => {
                let raw = value()?;
                options.games = raw.parse().map_err(|_| format!("invalid game count '{raw}'"))?;
            }
            "--max-turns" => {
                let raw = value()?;
                options.max_turns = raw
                    .parse()
                    .map_err(|_| format!("invalid turn limit '{raw}'"))?;
            }
            "--trace" => options.trace = Some(PathBuf::from(value()?)),
            "--confront" => {
                let raw = value()?;
                options.confront = ConfrontPolicy::from_keyword(&raw)
                    .ok_or_else(|| format!("unknown confront policy '{raw}'"))?;
            }
            "--first" => {
                let raw = value()?;
                options.first =
                    Role::from_keyword(&raw).ok_or_else(|| format!("unknown role '{raw}'"))?;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("unknown option '{other}'")),
        }
        idx += 1;
    }
    Ok(options)
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            print_help();
            std::process::exit(2);
        }
    };
    let result = if options.auto {
        run_auto(&options)
    } else {
        run_interactive(&options)
    };
    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn print_help() {
    println!("usage: struggle [--auto] [--seed N] [--assets DIR] [--first capitalist|worker]");
    println!("                [--games N] [--max-turns N] [--confront always|never|ahead]");
    println!("                [--trace FILE]");
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(DEFAULT_AUTO_SEED)
}

fn build_game(options: &CliOptions, seed: u64) -> anyhow::Result<Game> {
    let config = load_game_config(&options.assets)?;
    let tables = load_deck_tables(&options.assets)?;
    let turn_order = [options.first, options.first.opponent()];
    Ok(Game::from_tables_with_roles(config, &tables, &turn_order, seed)?)
}

fn run_interactive(options: &CliOptions) -> anyhow::Result<()> {
    let seed = options.seed.unwrap_or_else(clock_seed);
    log::debug!("assets {}, seed {seed}", options.assets.display());
    let mut game = build_game(options, seed)?;
    let board_end = game.config().board_end;
    println!("{}", "-".repeat(50));
    println!("Game initialized! The last space is at position {board_end}.");
    println!("Whoever gets to that space first wins!");
    println!("{}", "-".repeat(50));

    let stdin = io::stdin();
    let mut decisions = ConsoleDecisions::new(stdin.lock());
    let mut events = EventBus::default();
    let outcome = game.play(&mut decisions, &mut events);
    decisions.observe(&mut events);
    let outcome = outcome?;

    match outcome {
        Outcome::Winner(role) => println!("\nTHE {} WINS!", role.keyword().to_uppercase()),
        Outcome::Exited => println!("\nGAME CLOSING DOWN!"),
    }
    let summary = game.summary();
    for player in &summary.players {
        println!(
            "{:<11} cards drawn: {:<3} turns: {}",
            title(player.role),
            player.cards_drawn,
            player.turns_taken
        );
    }
    Ok(())
}

fn run_auto(options: &CliOptions) -> anyhow::Result<()> {
    let config = load_game_config(&options.assets)?;
    let tables = load_deck_tables(&options.assets)?;
    let auto = AutoplayConfig {
        seed: options.seed.unwrap_or(DEFAULT_AUTO_SEED),
        games: options.games,
        max_turns: options.max_turns,
        confront: options.confront,
    };
    let report = simulate(&config, &tables, &auto)?;
    for record in &report.games {
        let status = match record.status {
            RunStatus::Won(role) => format!("{} wins", role.keyword()),
            RunStatus::Exited => "exited".to_string(),
            RunStatus::MaxTurns => "turn limit".to_string(),
        };
        let cards: Vec<String> = record
            .summary
            .players
            .iter()
            .map(|player| format!("{} {}", player.role.keyword(), player.cards_drawn))
            .collect();
        println!(
            "seed {}: {} in {} turns ({} rounds), cards drawn: {}",
            record.seed,
            status,
            record.summary.turns_played,
            record.summary.rounds,
            cards.join(", ")
        );
    }
    println!(
        "capitalist wins: {} | worker wins: {} | unfinished: {} | mean turns: {:.1}",
        report.capitalist_wins, report.worker_wins, report.unfinished, report.mean_turns
    );
    if let Some(path) = &options.trace {
        report.write_json(path)?;
        println!("trace written to {}", path.display());
    }
    Ok(())
}

/// Reads decisions from a line source and prints events as they arrive.
struct ConsoleDecisions<R> {
    input: R,
}

impl<R: BufRead> ConsoleDecisions<R> {
    fn new(input: R) -> Self {
        Self { input }
    }

    fn read_answer(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl<R: BufRead> DecisionProvider for ConsoleDecisions<R> {
    fn turn_menu(&mut self, view: &TurnView<'_>) -> MenuChoice {
        let prompt = format!(
            "{} - what would you like to do? [stats / play / exit]\n> ",
            title(view.role)
        );
        match self.read_answer(&prompt) {
            Some(line) => MenuChoice::parse(&line),
            None => MenuChoice::Exit,
        }
    }

    fn confront(&mut self, view: &TurnView<'_>) -> Answer {
        let prompt = format!(
            "{}, do you want to confront the {}? You need a higher net (assets minus debits). [yes / no]\n> ",
            title(view.role),
            view.role.opponent().keyword()
        );
        match self.read_answer(&prompt) {
            Some(line) => Answer::parse(&line),
            None => Answer::Decline,
        }
    }

    fn observe(&mut self, events: &mut EventBus) {
        for event in events.drain() {
            print_event(&event);
        }
    }
}

fn title(role: Role) -> &'static str {
    match role {
        Role::Capitalist => "Capitalist",
        Role::Worker => "Worker",
    }
}

fn print_stats(player: &Player) {
    println!("{:<10} {:<10} {:<10}", "Assets", "Debits", "Position");
    println!(
        "{:<10} {:<10} {:<10}",
        player.assets, player.debits, player.position
    );
}

fn print_event(event: &Event) {
    match event {
        Event::RoundStarted { round } => println!("\n== Round {round} =="),
        Event::TurnStarted {
            role,
            kind,
            position,
        } => {
            println!("\n{}", "-".repeat(50));
            let extra = if *kind == TurnKind::Extra { "extra " } else { "" };
            println!("{}'s {extra}turn! Starting at position {position}.", title(*role));
            println!("{}", "-".repeat(50));
        }
        Event::StatsShown { player } => print_stats(player),
        Event::InvalidAnswer { prompt, .. } => match prompt {
            Prompt::TurnMenu => println!("That's not one of the menu choices. Try again."),
            Prompt::Confrontation => println!("Please answer 'yes' or 'no'. Try again."),
        },
        Event::TurnSkipped { role, .. } => {
            println!("{}", "~*".repeat(25));
            println!("THE {} SKIPS A TURN!", role.keyword().to_uppercase());
            println!("{}", "~*".repeat(25));
        }
        Event::ExtraTurnsScheduled { count, .. } => {
            println!("{count} extra turn(s) will follow this one.")
        }
        Event::DiceRolled { roll, .. } => {
            println!("{}", bordered(&dice_face(*roll)));
            println!("A {roll} was rolled!");
        }
        Event::MoveBlocked { .. } => {
            println!("You can't move past the last space on the board. Nothing happens.")
        }
        Event::Moved { from, to, .. } => println!("Position {from} -> {to}."),
        Event::CardDrawn { prompt, action, .. } => {
            println!("Draw a card!");
            println!("{}", bordered(&wrap_text(prompt, CARD_TEXT_WIDTH)));
            if let Some(banner) = card_banner(*action) {
                println!("{banner}");
            }
        }
        Event::AssetsChanged { delta, assets, .. } => {
            println!("Your assets change by {delta} (now {assets}).")
        }
        Event::DebitsChanged { delta, debits, .. } => {
            println!("Your debits change by {delta} (now {debits}).")
        }
        Event::PositionChanged {
            delta, position, ..
        } => println!("Your position changes by {delta} (now {position})."),
        Event::PositionClamped { .. } => println!("Your position is back to 0."),
        Event::PositionBlocked { .. } => {
            println!("You can't go beyond the last space on the board. Do nothing.")
        }
        Event::PendingTurnsChanged { delta, .. } => println!("{}", pending_turns_notice(*delta)),
        Event::ConfrontationResolved {
            outcome,
            challenger_net,
            defender_net,
            ..
        } => match outcome {
            ConfrontationOutcome::ChallengerWins => println!(
                "You win this confrontation ({challenger_net} vs {defender_net}) and earn extra turns."
            ),
            ConfrontationOutcome::DefenderWins => println!(
                "You lose this confrontation ({challenger_net} vs {defender_net}). The other class earns extra turns."
            ),
            ConfrontationOutcome::Stalemate => {
                println!("This confrontation is at a stalemate! Nothing happens.")
            }
            ConfrontationOutcome::Declined => println!("Better to sit this one out."),
        },
        Event::GameWon { role, position } => println!(
            "{} reached position {position}.",
            title(*role)
        ),
        Event::GameExited { role } => println!("{} left the game.", title(*role)),
    }
}

/// Printed under the card text only for confrontation cards.
fn card_banner(action: CardAction) -> Option<&'static str> {
    match action {
        CardAction::Confrontation => Some(
            "YOU HAVE DRAWN A CONFRONTATION!\n\
             WINNING THE CONFRONTATION SECURES THE VICTORIOUS CLASS EXTRA THROWS OF THE DICE!",
        ),
        _ => None,
    }
}

fn pending_turns_notice(delta: i64) -> String {
    match delta {
        d if d < 0 => format!("You will have to skip {} turn(s).", d.unsigned_abs()),
        0 => "Your turn count is unchanged.".to_string(),
        d => format!("You gain {d} extra turn(s)."),
    }
}

/// Frames text in a box, padding each line to the widest one.
fn bordered(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("┌{}┐", "─".repeat(width)));
    for line in lines {
        let pad = width - line.chars().count();
        out.push(format!("│{line}{}│", " ".repeat(pad)));
    }
    out.push(format!("└{}┘", "─".repeat(width)));
    out.join("\n")
}

/// Greedy word wrap; single words longer than `width` keep their own line.
fn wrap_text(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

/// Three-row pip layout for a six-sided die face.
fn dice_face(roll: u8) -> String {
    let pip = |on: bool| if on { 'o' } else { ' ' };
    let n = roll;
    let corner = pip(n > 1);
    let other_corner = pip(n > 3);
    let middle = pip(n > 5);
    let center = pip(n % 2 == 1);
    format!(
        " {corner} {other_corner} \n {middle}{center}{middle} \n {other_corner} {corner} "
    )
}
