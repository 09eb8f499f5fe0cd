use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use triadgraph::cards::rank_glyph;
use triadgraph::rng::fresh_seed;
use triadgraph::{rng_for_game, GameConfig, GameState, Owner, PlayerId, Selection, Standing};

#[derive(Debug, Parser)]
#[command(name = "triad", about = "Play Triple Triad on a text board, reading selections from stdin")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Board width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Cards dealt to each player
    #[arg(long)]
    hand_size: Option<usize>,

    /// Seed for the first-turn choice and the generated pool (deterministic)
    #[arg(long)]
    seed: Option<u64>,

    /// Cards JSON to deal from instead of a generated pool
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Log verbosity: -v info, -vv debug
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(n) = self.hand_size {
            config.hand_size = n;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.cards.is_some() {
            config.cards = self.cards.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

fn owner_tag(owner: Owner) -> char {
    match owner.player() {
        Some(PlayerId::One) => '1',
        Some(PlayerId::Two) => '2',
        None => '-',
    }
}

fn render(state: &GameState) -> String {
    let board = state.board();
    let mut out = String::new();
    for row in board.nodes().chunks(board.width()) {
        let cells: Vec<String> = row
            .iter()
            .map(|node| match node.occupant() {
                Some(card) => {
                    let glyphs: String = card.ranks().iter().map(|&r| rank_glyph(r)).collect();
                    format!("{}:{:<4}", owner_tag(card.owner()), glyphs)
                }
                None => format!("  {:<4}", node.index()),
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }
    for player in state.players() {
        let cards: Vec<String> = player
            .hand()
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{i}={c}"))
            .collect();
        let marker = if player.is_active_turn() { '*' } else { ' ' };
        out.push_str(&format!(
            "{marker}{} ({}): {}\n",
            player.label(),
            player.score(),
            cards.join(", ")
        ));
    }
    out
}

fn parse_selection(line: &str, active: PlayerId) -> Option<Selection> {
    let mut parts = line.split_whitespace();
    let kind = parts.next()?.to_ascii_lowercase();
    let index: usize = parts.next()?.parse().ok()?;
    match kind.as_str() {
        "h" | "hand" => Some(Selection::hand(active, index)),
        "b" | "board" => Some(Selection::board(index)),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = args.game_config()?;
    let seed = config.seed.unwrap_or_else(fresh_seed);
    let mut rng = rng_for_game(seed, 0);
    let mut state = GameState::new(&config, &mut rng)?;

    println!("[triad] seed {seed}, {}x{} board", config.height, config.width);
    println!("[triad] {} moves first", state.active_player().label());
    print!("{}", render(&state));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }
        match cmd {
            "q" | "quit" => break,
            "r" | "reset" => {
                state.reset_selection();
                println!("[triad] selection cleared");
                continue;
            }
            _ => {}
        }
        let Some(selection) = parse_selection(cmd, state.active_player()) else {
            println!("[triad] unrecognised input '{cmd}' (use: hand N | board N | reset | quit)");
            continue;
        };
        match state.handle_selection(selection) {
            Ok(Some(report)) => {
                println!(
                    "[triad] {} played {} at cell {}, captured {:?}",
                    report.player.label(),
                    report.card,
                    report.cell,
                    report.captured
                );
                print!("{}", render(&state));
            }
            Ok(None) => {}
            Err(e) => println!("[triad] rejected: {e}"),
        }
        stdout.flush()?;
        if state.is_finished() {
            break;
        }
    }

    let [one, two] = state.scores();
    if state.is_finished() {
        match state.standing() {
            Standing::Leader(p) => println!("[triad] game finished: {} wins {one}-{two}", p.label()),
            Standing::Draw => println!("[triad] game finished: draw {one}-{two}"),
        }
    } else {
        println!("[triad] game abandoned at {one}-{two}");
    }
    Ok(())
}
