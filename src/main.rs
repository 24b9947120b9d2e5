//! Connections - CLI
//!
//! Word grouping puzzle with TUI and line modes, plus statistics and
//! simulation tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use connections::{
    commands::{StatsRequest, load_summary, run_simple, run_simulation},
    config::Settings,
    core::Puzzle,
    engine::{Engine, FileStore},
    logging::{self, LogFormat, LoggingConfig},
    output::{print_simulation_result, print_summary},
    puzzles::{default_puzzle, loader::load_from_file},
    stats::JsonlStats,
};
use std::fs::OpenOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "connections",
    about = "Create four groups of four!",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom puzzle file (TOML); the built-in puzzle is used otherwise
    #[arg(short, long, global = true)]
    puzzle: Option<PathBuf>,

    /// Directory for saved round state, stats and logs
    #[arg(long, global = true, env = "CONNECTIONS_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Log format: text, json, pretty
    #[arg(long, global = true, env = "CONNECTIONS_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "CONNECTIONS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show aggregate statistics of finished rounds
    Stats {
        /// Shared secret (must match CONNECTIONS_ADMIN_SECRET)
        #[arg(short, long)]
        secret: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Play many rounds with a random guesser
    Simulate {
        /// Number of rounds
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Base RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let settings = Settings::resolve(cli.state_dir.clone())?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(&cli, &settings, matches!(command, Commands::Play))?;

    let puzzle = load_puzzle(cli.puzzle.as_ref())?;

    match command {
        Commands::Play => run_play_command(puzzle, &settings),
        Commands::Simple => run_simple_command(puzzle, &settings),
        Commands::Stats { secret, json } => run_stats_command(&settings, secret.as_deref(), json),
        Commands::Simulate { count, seed } => {
            println!("Simulating {count} rounds...");
            let result = run_simulation(&puzzle, count, seed, true);
            print_simulation_result(&result);
            Ok(())
        }
    }
}

/// Log to stderr, or to a file while the TUI owns the terminal
fn init_logging(cli: &Cli, settings: &Settings, tui: bool) -> Result<()> {
    let (env_format, env_level) = logging::from_env();
    let config = LoggingConfig::new(
        cli.log_format.unwrap_or(env_format),
        cli.log_level.clone().unwrap_or(env_level),
        cli.verbose,
    );

    if tui {
        std::fs::create_dir_all(settings.state_dir())
            .with_context(|| format!("creating {}", settings.state_dir().display()))?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(settings.log_path())
            .with_context(|| format!("opening {}", settings.log_path().display()))?;
        config.init_with_file(file);
    } else {
        config.init();
    }
    Ok(())
}

fn load_puzzle(path: Option<&PathBuf>) -> Result<Puzzle> {
    match path {
        Some(path) => load_from_file(path).with_context(|| format!("loading {}", path.display())),
        None => Ok(default_puzzle()),
    }
}

fn run_play_command(puzzle: Puzzle, settings: &Settings) -> Result<()> {
    use connections::interactive::{App, run_tui};

    let engine = Engine::start(puzzle, FileStore::new(settings.state_dir()));
    let stats = JsonlStats::new(settings.stats_path(), settings.client_id.as_deref());
    let app = App::new(engine, Box::new(stats));
    run_tui(app)
}

fn run_simple_command(puzzle: Puzzle, settings: &Settings) -> Result<()> {
    let mut engine = Engine::start(puzzle, FileStore::new(settings.state_dir()));
    let mut stats = JsonlStats::new(settings.stats_path(), settings.client_id.as_deref());
    run_simple(&mut engine, &mut stats)
}

fn run_stats_command(settings: &Settings, secret: Option<&str>, json: bool) -> Result<()> {
    let stats_path = settings.stats_path();
    let request = StatsRequest {
        path: &stats_path,
        secret,
        expected: settings.admin_secret.as_deref(),
    };
    let summary = load_summary(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}
