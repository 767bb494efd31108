use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use sweeper_core::{CellCount, Coord, Difficulty, GameConfig, GameEvent, GameSession, Turn};
use web_time::{Duration, Instant};

use command::{Command, HELP};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Clear the minefield without hitting a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Preset board size and mine count
    #[arg(short, long, default_value_t = Difficulty::Easy, conflicts_with = "rows")]
    difficulty: Difficulty,

    /// Custom board height, needs --columns and --mines
    #[arg(long, requires_all = ["columns", "mines"])]
    rows: Option<Coord>,

    /// Custom board width
    #[arg(long, requires = "rows")]
    columns: Option<Coord>,

    /// Custom mine count
    #[arg(long, requires = "rows")]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every turn as JSON instead of drawing the board
    #[arg(long)]
    json: bool,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        match (self.rows, self.columns, self.mines) {
            (Some(rows), Some(columns), Some(mines)) => {
                GameConfig::new(rows, columns, mines).context("invalid custom board")
            }
            _ => Ok(self.difficulty.config()),
        }
    }
}

/// Turns wall-clock time into whole-second ticks for the session.
struct Clock {
    last_tick: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    fn catch_up(&mut self, game: &mut GameSession) {
        while self.last_tick.elapsed() >= Duration::from_secs(1) {
            self.last_tick += Duration::from_secs(1);
            game.tick();
        }
    }

    fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

struct Frontend<W> {
    out: W,
    json: bool,
}

impl<W: Write> Frontend<W> {
    fn board(&mut self, game: &GameSession) -> io::Result<()> {
        if !self.json {
            write!(self.out, "{}", render::render(game))?;
        }
        Ok(())
    }

    fn turn(&mut self, game: &GameSession, turn: &Turn) -> anyhow::Result<()> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(turn)?)?;
            return Ok(());
        }
        if turn.has_update() {
            self.board(game)?;
        }
        if let Some(event) = &turn.event {
            self.event(event)?;
        }
        Ok(())
    }

    fn event(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(event)?)?;
            return Ok(());
        }
        match event {
            GameEvent::GameOver { .. } => writeln!(self.out, "Game over !")?,
            GameEvent::GameWon { elapsed_seconds } => {
                writeln!(self.out, "You win in {elapsed_seconds}s !")?
            }
        }
        Ok(())
    }

    fn message(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        if !self.json {
            writeln!(self.out, "{message}")?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = args.game_config()?;
    let mut game = GameSession::new(config, seed)?;
    let mut clock = Clock::new();
    let mut frontend = Frontend {
        out: io::stdout().lock(),
        json: args.json,
    };

    frontend.board(&game)?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        clock.catch_up(&mut game);

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                frontend.message(format_args!("{err:#}"))?;
                continue;
            }
        };

        let result = match command {
            Command::Reveal(coords) => game.reveal(coords),
            Command::Flag(coords) => game.toggle_flag(coords),
            Command::Click(coords) => game.click(coords),
            Command::FlagMode => {
                let on = game.toggle_flag_mode();
                frontend.message(format_args!("flag mode {}", if on { "on" } else { "off" }))?;
                continue;
            }
            Command::Restart(difficulty) => {
                let config = difficulty.map_or(game.config(), Difficulty::config);
                game.restart(config)?;
                clock.reset();
                frontend.board(&game)?;
                continue;
            }
            Command::Show => {
                frontend.board(&game)?;
                continue;
            }
            Command::Help => {
                frontend.message(HELP)?;
                continue;
            }
            Command::Quit => break,
        };

        match result {
            Ok(turn) => frontend.turn(&game, &turn)?,
            Err(err) => frontend.message(err)?,
        }

        // polled win check
        if let Some(event) = game.check_win() {
            frontend.event(&event)?;
        }
        frontend.out.flush()?;
    }

    Ok(())
}
