//! Season seed files.
//!
//! A seed file is a single JSON document naming the franchises and the
//! player pool for a fresh season, with optional rule overrides and a
//! marquee order for the lot draw. The built-in default seed mirrors a
//! typical eight-team league and is what `init` uses when no file is
//! given.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use league_model::{Category, LeagueRules, PlayerRole};
use roster_service::{FranchiseSeed, PlayerSeed};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub rules: LeagueRules,
    pub franchises: Vec<FranchiseSeed>,
    pub players: Vec<PlayerSeed>,
    /// Player names auctioned first, in order, before random draws begin.
    #[serde(default)]
    pub marquee: Vec<String>,
}

pub fn load_seed(path: &Path) -> Result<SeedFile, SeedError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn franchise(name: &str, color: &str, icon: &str) -> FranchiseSeed {
    FranchiseSeed { name: name.to_string(), color: color.to_string(), icon: icon.to_string() }
}

fn player(name: &str, category: Category, role: PlayerRole) -> PlayerSeed {
    PlayerSeed { name: name.to_string(), category, role }
}

/// Built-in league: four owner franchises, each named after its owner
/// player so auto-retention picks them up, plus an open pool sized to
/// the default quotas.
pub fn default_seed() -> SeedFile {
    use Category::{APlus, A, B, C};
    use PlayerRole::{AllRounder, Batter, Bowler, WicketKeeper};

    SeedFile {
        rules: LeagueRules::default(),
        franchises: vec![
            franchise("Sagar", "#f59e0b", "lion"),
            franchise("Harsh", "#3b82f6", "shark"),
            franchise("Khush", "#10b981", "falcon"),
            franchise("Jimit", "#ef4444", "tiger"),
        ],
        players: vec![
            player("Sagar", APlus, AllRounder),
            player("Harsh", APlus, Batter),
            player("Khush", APlus, Bowler),
            player("Jimit", APlus, AllRounder),
            player("Deep", APlus, Batter),
            player("Parth", A, Batter),
            player("Ravi", A, Bowler),
            player("Mihir", A, AllRounder),
            player("Kunal", A, WicketKeeper),
            player("Yash", A, Bowler),
            player("Nirav", A, Batter),
            player("Rohan", B, Batter),
            player("Smit", B, Bowler),
            player("Ankit", B, AllRounder),
            player("Jainam", B, WicketKeeper),
            player("Chirag", B, Bowler),
            player("Dhruv", C, Batter),
            player("Malav", C, Bowler),
            player("Tirth", C, AllRounder),
            player("Neel", C, Batter),
            player("Om", C, Bowler),
            player("Kavan", C, WicketKeeper),
            player("Priyank", C, Batter),
            player("Vatsal", C, AllRounder),
        ],
        marquee: vec!["Deep".to_string(), "Parth".to_string()],
    }
}
