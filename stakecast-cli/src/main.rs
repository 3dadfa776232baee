mod commands;
mod history;

use clap::{Parser, Subcommand};
use commands::SeedArgs;
use history::HistoryStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stakecast")]
#[command(about = "Seeded prediction toolkit for gambling-style mini games")]
#[command(version)]
struct Cli {
    /// Data directory for the prediction history
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict safe cells on the 5x5 Mines board
    Mines {
        /// Number of mines on the board (1-24)
        #[arg(long, default_value_t = 3)]
        mine_count: u8,
        #[command(flatten)]
        seeds: SeedArgs,
    },
    /// Predict ten Keno lucky numbers out of 1-40
    Keno {
        #[command(flatten)]
        seeds: SeedArgs,
    },
    /// Predict a Dice roll with an over/under call
    Dice {
        #[command(flatten)]
        seeds: SeedArgs,
    },
    /// Predict a Limbo long-tail multiplier
    Limbo {
        #[command(flatten)]
        seeds: SeedArgs,
    },
    /// Predict a coin flip
    Flip {
        #[command(flatten)]
        seeds: SeedArgs,
    },
    /// Predict the winning segment of a wheel
    Wheel {
        /// Risk setting (low, medium, high)
        #[arg(long, default_value = "medium")]
        risk: String,
        /// Segment count (10, 20, 30, 40, 50)
        #[arg(long, default_value_t = 20)]
        segments: u32,
        #[command(flatten)]
        seeds: SeedArgs,
    },
    /// Predict a Crash multiplier and a safe exit point
    Crash {
        #[command(flatten)]
        seeds: SeedArgs,
    },
    /// Predict safe cells on the Chicken board
    Chicken {
        /// Difficulty (easy, medium, hard, expert)
        #[arg(long, default_value = "medium")]
        difficulty: String,
        #[command(flatten)]
        seeds: SeedArgs,
    },
    /// Publish a SHA-256 commitment for a server seed
    Commit {
        /// Server seed to commit to; generated when omitted
        server_seed: Option<String>,
    },
    /// Verify a revealed server seed against a published digest
    Verify {
        /// Published commitment digest (64 hex characters)
        digest: String,
        /// Revealed server seed
        server_seed: String,
    },
    /// Show recorded predictions
    History {
        /// Only show one game
        #[arg(long)]
        game: Option<String>,
        /// Maximum rows to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "stakecast={},stakecast_games={},stakecast_core={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stakecast")
    });
    tokio::fs::create_dir_all(&data_dir).await?;

    let store = HistoryStore::new(&data_dir.join("history.db")).await?;

    let result = match cli.command {
        Commands::Mines { mine_count, seeds } => {
            commands::predict::mines(&store, seeds.resolve()?, mine_count).await
        }
        Commands::Keno { seeds } => commands::predict::keno(&store, seeds.resolve()?).await,
        Commands::Dice { seeds } => commands::predict::dice(&store, seeds.resolve()?).await,
        Commands::Limbo { seeds } => commands::predict::limbo(&store, seeds.resolve()?).await,
        Commands::Flip { seeds } => commands::predict::flip(&store, seeds.resolve()?).await,
        Commands::Wheel {
            risk,
            segments,
            seeds,
        } => commands::predict::wheel(&store, seeds.resolve()?, &risk, segments).await,
        Commands::Crash { seeds } => commands::predict::crash(&store, seeds.resolve()?).await,
        Commands::Chicken { difficulty, seeds } => {
            commands::predict::chicken(&store, seeds.resolve()?, &difficulty).await
        }
        Commands::Commit { server_seed } => commands::commit::commit(server_seed).await,
        Commands::Verify {
            digest,
            server_seed,
        } => commands::commit::verify(&digest, &server_seed).await,
        Commands::History { game, limit } => {
            commands::history::show_history(&store, game, limit).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
