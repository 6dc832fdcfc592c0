use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::BoardConfig;
use grid_snake::driver::Session;
use grid_snake::engine::GameEngine;
use grid_snake::error::AppError;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::logging::{self, default_log_path, parse_level};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, info};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with board settings; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Board height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Edge length of one grid cell in pixels.
    #[arg(long = "cell-size")]
    cell_size: Option<u32>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long = "log-level", default_value = "info", value_parser = parse_level)]
    log_level: LevelFilter,
}

impl Cli {
    fn board_config(&self) -> Result<BoardConfig, AppError> {
        let mut board = match &self.config {
            Some(path) => BoardConfig::load(path)?,
            None => BoardConfig::default(),
        };

        if let Some(width) = self.width {
            board.width = width;
        }
        if let Some(height) = self.height {
            board.height = height;
        }
        if let Some(cell_size) = self.cell_size {
            board.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            board.tick_interval_ms = tick_ms;
        }

        board.validate()?;
        Ok(board)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), AppError> {
    let board = cli.board_config()?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    logging::init(&log_path, cli.log_level)?;
    info!(
        "starting {}x{} board, cell {}, tick {} ms",
        board.width, board.height, board.cell_size, board.tick_interval_ms
    );

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(board, seed)?,
        None => GameEngine::new(board)?,
    };

    install_panic_hook();
    let mut terminal = TerminalSession::enter()?;
    run(&mut terminal, Session::start(engine, Instant::now()))?;

    info!("quit");
    Ok(())
}

fn run(terminal: &mut TerminalSession, mut session: Session) -> Result<(), AppError> {
    let mut input = InputHandler::new(INPUT_POLL_INTERVAL);
    let board = *session.engine().board();

    loop {
        terminal.draw(session.state(), &board)?;

        let until_tick = session.time_to_next_tick(Instant::now());
        if let Some(game_input) = input.poll_input(until_tick)? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            session.handle_input(game_input, Instant::now());
        }

        session.update(Instant::now());
    }

    Ok(())
}
