//! mealclash CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use mealclash_core::meal::{Difficulty, LeaderboardSort};

mod commands;

#[derive(Parser)]
#[command(name = "mealclash", version, about = "Meal battle arena over a SQLite kitchen")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and database
    Init,

    /// Add a meal to the kitchen
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        cuisine: String,

        #[arg(long)]
        price: f64,

        /// HIGH, MED, or LOW
        #[arg(long)]
        difficulty: Difficulty,
    },

    /// Soft-delete a meal
    Delete {
        #[arg(long)]
        id: i64,
    },

    /// Show one meal
    Show {
        #[arg(long, conflicts_with = "name")]
        id: Option<i64>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Battle two meals and record the outcome
    Battle {
        /// First combatant id
        #[arg(long)]
        a: i64,

        /// Second combatant id
        #[arg(long)]
        b: i64,
    },

    /// Rank meals by battle record
    Leaderboard {
        #[arg(long, value_enum, default_value = "wins")]
        sort: SortArg,
    },

    /// Remove every meal from the kitchen
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Wins,
    WinPct,
}

impl From<SortArg> for LeaderboardSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Wins => LeaderboardSort::Wins,
            SortArg::WinPct => LeaderboardSort::WinPct,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mealclash=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Add {
            name,
            cuisine,
            price,
            difficulty,
        } => commands::add::execute(config, name, cuisine, price, difficulty),
        Commands::Delete { id } => commands::delete::execute(config, id),
        Commands::Show { id, name } => commands::show::execute(config, id, name),
        Commands::Battle { a, b } => commands::battle::execute(config, a, b),
        Commands::Leaderboard { sort } => commands::leaderboard::execute(config, sort.into()),
        Commands::Clear { yes } => commands::clear::execute(config, yes),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
