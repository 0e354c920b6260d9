//! Auction season operator tool
//!
//! Entry point for running a franchise auction from the terminal:
//! initialize a season from a seed file, inspect budgets and the player
//! pool, print standings, and export rosters.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use league_model::FranchiseId;
use roster_service::{PlayerSortKey, SortOrder};
use scoring_engine::RowFilter;
use tracing::info;

use auction_service::{default_seed, initialize_logging, load_seed, AuctionService};

#[derive(Parser)]
#[command(name = "auction", about = "Franchise auction season operator tool", version)]
struct Cli {
    /// Data directory holding the season snapshot
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a fresh season from a seed file (built-in seed if omitted)
    Init {
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Overwrite an existing season
        #[arg(long)]
        force: bool,
    },
    /// Franchise budgets, slot fill, and reserve floors
    Summary,
    /// Season leaderboard
    Standings,
    /// Resolved performance log rows
    Log {
        #[arg(long)]
        match_number: Option<u32>,
        /// Numeric franchise id
        #[arg(long)]
        franchise: Option<u32>,
    },
    /// Unsold player pool with category stats
    Pool,
    /// Export franchise portfolios as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    initialize_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Init { seed, force } => {
            let seed = match seed {
                Some(path) => load_seed(&path)
                    .with_context(|| format!("loading seed {}", path.display()))?,
                None => default_seed(),
            };
            let service = AuctionService::init(&cli.data_dir, &seed, force)?;
            info!(dir = %cli.data_dir.display(), "season ready");
            print_summary(&service);
        }
        Command::Summary => {
            let service = AuctionService::load(&cli.data_dir)?;
            print_summary(&service);
        }
        Command::Standings => {
            let service = AuctionService::load(&cli.data_dir)?;
            println!("{:<4} {:<16} {:>8} {:>10}", "#", "Franchise", "Matches", "Points");
            for (pos, row) in service.standings().iter().enumerate() {
                println!("{:<4} {:<16} {:>8} {:>10}", pos + 1, row.name, row.matches, row.total);
            }
            let free = service.free_agent_points();
            if free != 0 {
                println!("{:<4} {:<16} {:>8} {:>10}", "-", "Free Agent", "-", free);
            }
        }
        Command::Log { match_number, franchise } => {
            let service = AuctionService::load(&cli.data_dir)?;
            let filter = RowFilter { match_number, franchise: franchise.map(FranchiseId) };
            for row in service.performance_rows(filter) {
                println!(
                    "M{:<3} {:<10} {:<16} {:<14} {:>5} x{:<4} = {:>6}{}",
                    row.match_number,
                    row.date,
                    row.player_name,
                    row.franchise_label,
                    row.points,
                    row.multiplier,
                    row.weighted,
                    if row.is_potm { "  POTM" } else { "" },
                );
            }
        }
        Command::Pool => {
            let service = AuctionService::load(&cli.data_dir)?;
            let ledger = service.ledger();
            for stats in service.pool_stats() {
                let avg = if stats.sold > 0 {
                    stats.average_sold_price.to_string()
                } else {
                    "-".to_string()
                };
                println!(
                    "{:<10} unsold {:>3}  sold {:>3}  avg price {}",
                    stats.category.label(),
                    stats.unsold,
                    stats.sold,
                    avg,
                );
            }
            println!();
            for id in service.unsold(PlayerSortKey::Category, SortOrder::Asc) {
                let player = ledger.player(id)?;
                println!(
                    "{:<16} {:<10} {:<14} base {}",
                    player.name,
                    player.category.label(),
                    player.role.label(),
                    player.base_price,
                );
            }
        }
        Command::Export { output } => {
            let service = AuctionService::load(&cli.data_dir)?;
            let csv = service.export_csv();
            match output {
                Some(path) => {
                    std::fs::write(&path, csv)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), "portfolios exported");
                }
                None => print!("{csv}"),
            }
        }
    }

    Ok(())
}

fn print_summary(service: &AuctionService) {
    println!(
        "{:<16} {:>10} {:>10} {:<24} {}",
        "Franchise", "Budget", "Reserve", "Slots", "Status"
    );
    for summary in service.summaries() {
        let slots: Vec<String> = summary
            .slots
            .iter()
            .map(|s| format!("{}:{}/{}", s.category.code(), s.owned, s.quota))
            .collect();
        println!(
            "{:<16} {:>10} {:>10} {:<24} {}",
            summary.name,
            summary.budget.to_string(),
            service.reserve(summary.id).to_string(),
            slots.join(" "),
            if summary.qualified { "qualified".to_string() } else { format!("needs {}", summary.needs_count) },
        );
    }
}
