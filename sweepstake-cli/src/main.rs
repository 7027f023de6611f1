mod api;
mod config;
mod output;
mod session;

use clap::Parser;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::{ApiConfig, DEFAULT_BASE_URL};
use crate::session::Session;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "sweepstake", version, about = "Draw sweepstake picks from live F1 standings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch standings and the next race, then draw picks for the roster
    Draw(DrawArgs),
    /// Create a default config file at ~/.config/sweepstake/config.toml
    Init,
}

#[derive(Parser)]
struct DrawArgs {
    /// Jolpica/Ergast base URL for the current season
    #[arg(long)]
    base_url: Option<String>,

    /// Participant name (repeatable; replaces the configured roster)
    #[arg(long = "participant")]
    participants: Vec<String>,

    /// Family name to drop from the standings (repeatable; replaces the
    /// configured denylist)
    #[arg(long = "exclude")]
    excluded: Vec<String>,

    /// Override the shuffle seed instead of using the next race's round
    /// number (for reproducing a past draw)
    #[arg(long)]
    seed: Option<u32>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Output tab-separated columns for a spreadsheet paste
    #[arg(long)]
    tsv: bool,

    /// HTTP request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Retries per fetch on network failures
    #[arg(long)]
    retries: Option<usize>,

    /// Path to config file (default: ~/.config/sweepstake/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Draw(args) => run_draw(args).await,
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your roster, denylist, etc.");
        }
    }
}

async fn run_draw(args: DrawArgs) {
    if args.json && args.tsv {
        bail("--json and --tsv are mutually exclusive");
    }

    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let base_url = args
        .base_url
        .or(cfg.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let roster: Vec<String> = if !args.participants.is_empty() {
        args.participants.clone()
    } else {
        cfg.roster
            .unwrap_or_else(|| config::DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect())
    };
    if roster.is_empty() {
        bail("Roster is empty. Pass --participant or set roster in the config.");
    }

    let excluded: Vec<String> = if !args.excluded.is_empty() {
        args.excluded.clone()
    } else {
        cfg.excluded
            .unwrap_or_else(|| config::DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect())
    };

    let timeout = args.timeout.or(cfg.timeout_secs).unwrap_or(10);
    let max_retries = args.retries.or(cfg.retries).unwrap_or(3);

    let client = Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()
        .unwrap_or_else(|e| bail(format!("Failed to build HTTP client: {e}")));

    let api_config = ApiConfig {
        base_url,
        max_retries,
        verbose: args.verbose,
    };

    if args.verbose {
        eprintln!("Fetching driver standings and next race data from {}", api_config.base_url);
    }

    let mut session = Session::new();
    let data = session
        .load(&client, &api_config)
        .await
        .unwrap_or_else(|e| bail(e));

    let mut race = data.race.clone();
    if let Some(seed) = args.seed {
        if args.verbose {
            eprintln!("Seed override: using {seed} instead of round {}", race.round);
        }
        race.round = seed;
    }

    if args.verbose {
        eprintln!(
            "Fetched {} standings entries; next race: {} (round {})",
            data.standings.len(),
            data.race.name,
            data.race.round,
        );
    }

    let draw = sweepstake_core::draw(data.standings, race, &roster, &excluded)
        .unwrap_or_else(|e| bail(e));

    if args.json {
        output::print_json(&draw);
    } else if args.tsv {
        output::print_tsv(&draw);
    } else {
        output::print_table(&draw);
    }
}
