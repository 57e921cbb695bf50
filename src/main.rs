use std::path::PathBuf;

use clap::Parser;
use grid_snake::config::{CELL_SIZE, GameConfig, THEME_DEFAULT};
use grid_snake::error::GameError;
use grid_snake::game::GameState;
use grid_snake::game_loop::{FramePacer, GameLoop};
use grid_snake::input::InputHandler;
use grid_snake::logging::{self, LogLevel};
use grid_snake::renderer::TerminalRenderer;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a wraparound grid")]
struct Cli {
    /// Seed the random generator for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path (defaults to the system temp directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.log_level)?;

    install_panic_hook();

    let result = run(&cli);
    if let Err(error) = &result {
        error!("session ended with error: {error}");
    }
    result
}

fn run(cli: &Cli) -> Result<(), GameError> {
    let config = GameConfig::default();
    let rng = match cli.seed {
        Some(seed) => {
            info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let state = GameState::new(config, rng)?;

    let mut session = TerminalSession::enter()?;
    let outcome = {
        let renderer = TerminalRenderer::new(session.terminal_mut(), THEME_DEFAULT, CELL_SIZE);
        GameLoop::new(state, InputHandler::new(), renderer, FramePacer::new()).run()
    };
    session.leave()?;

    outcome
}
