//! Company scoring CLI.
//!
//! Scores companies against their sector peers and prints the results as
//! JSON on stdout. Logs go to stderr.
//!
//! Usage: `peerscore [--config FILE] <COMMAND>`
//! Example: `peerscore score MSFT AAPL`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use peerscore::api::{EngineConfig, ScoringApi};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn,peerscore=info";

#[derive(Parser, Debug)]
#[command(name = "peerscore", version)]
#[command(about = "Sector-relative company scoring", long_about = None)]
struct Args {
    /// TOML engine configuration. Defaults apply when omitted.
    #[arg(short, long, global = true, env = "PEERSCORE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one or more companies.
    Score {
        /// Company symbols, case-insensitive.
        #[arg(required = true)]
        symbols: Vec<String>,
    },
    /// Score every company of the source.
    All,
    /// Overview of one sector.
    Sector {
        /// Sector name, e.g. "Technology" or "consumer staples".
        name: String,
    },
    /// Score, interpretations and sector comparison of one company.
    Detail {
        /// Company symbol.
        symbol: String,
    },
    /// List known symbols.
    Symbols,
    /// List sectors with at least one company.
    Sectors,
    /// Print the disclaimer.
    Disclaimer,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if matches!(args.command, Command::Disclaimer) {
        println!("{}", ScoringApi::disclaimer());
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => {
            tracing::debug!("no config file given, using defaults");
            EngineConfig::default()
        }
    };
    let api = ScoringApi::from_config(&config).context("failed to build scoring engine")?;

    let found = run(&api, args.command)?;
    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Execute a command. Returns `false` if a requested symbol was not found.
fn run(api: &ScoringApi, command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Score { symbols } => {
            let mut missing = 0;
            for symbol in &symbols {
                match api.get_company_score(symbol) {
                    Some(score) => println!("{}", serde_json::to_string_pretty(&score)?),
                    None => {
                        eprintln!("Symbol '{symbol}' not found.");
                        missing += 1;
                    }
                }
            }
            Ok(missing == 0)
        }
        Command::All => {
            let scores = api.batch_score(&api.available_symbols());
            println!("{}", serde_json::to_string_pretty(&scores)?);
            Ok(true)
        }
        Command::Sector { name } => {
            let overview = api.get_sector_overview(&name);
            if overview.company_count == 0 {
                eprintln!("No companies found in sector '{name}'.");
            }
            println!("{}", serde_json::to_string_pretty(&overview)?);
            Ok(true)
        }
        Command::Detail { symbol } => match api.get_company_detail(&symbol) {
            Some(detail) => {
                println!("{}", serde_json::to_string_pretty(&detail)?);
                Ok(true)
            }
            None => {
                eprintln!("Symbol '{symbol}' not found.");
                Ok(false)
            }
        },
        Command::Symbols => {
            for symbol in api.available_symbols() {
                println!("{symbol}");
            }
            Ok(true)
        }
        Command::Sectors => {
            for sector in api.available_sectors() {
                println!("{sector}");
            }
            Ok(true)
        }
        Command::Disclaimer => {
            println!("{}", ScoringApi::disclaimer());
            Ok(true)
        }
    }
}
