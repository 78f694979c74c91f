//! Simon - Terminal Frontend
//!
//! Plays the sequence-memory game on stdin/stdout. Each new step is flashed
//! as a colored line after a short delay; type the colors back one per line.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use simon::core::config::GameConfig;
use simon::core::error::Result;
use simon::core::types::Symbol;
use simon::game::RngSource;
use simon::presentation::{OutputFormat, TerminalObserver};
use simon::session::{GameObserver, GameSession};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;

/// Simon - repeat the growing sequence of colors
#[derive(Parser, Debug)]
#[command(name = "simon")]
struct Args {
    /// TOML file with alphabet_size / reveal_delay_ms / reveal_duration_ms
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Print events as JSON lines instead of colored text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("simon=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rt = Runtime::new()?;
    rt.block_on(run(args))
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load_from_toml(path)?,
        None => GameConfig::default(),
    };
    tracing::info!(?config, "Loaded config");

    let source = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let observer: Arc<dyn GameObserver> = Arc::new(TerminalObserver::new(format));
    let mut session = GameSession::new(config, source, observer)?;

    if !args.json {
        print_help(session.game().alphabet());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "new" || input == "n" {
            session.start_new_game();
            continue;
        }

        match input.parse::<Symbol>() {
            Ok(symbol) => {
                if let Err(e) = session.submit_input(symbol) {
                    println!("{}", e);
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

fn print_help(alphabet: &[Symbol]) {
    println!("\n=== SIMON ===");
    println!("Repeat the sequence of colors.");
    println!();
    println!("Commands:");
    println!("  new / n         - Start a new game");
    for symbol in alphabet {
        println!(
            "  {:<15} - Press {}",
            format!("{} / {}", symbol.name(), &symbol.name()[..1]),
            symbol.name()
        );
    }
    println!("  quit / q        - Exit");
    println!();
}
