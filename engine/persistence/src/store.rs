//! File-backed snapshot store for league state.
//!
//! State is kept as three JSON documents in a single data directory:
//! the league document (rules and franchises), the player pool, and the
//! match log. Every save rewrites the whole document through a temp file
//! and an atomic rename, so a crash mid-write leaves the previous
//! snapshot intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use league_model::{Franchise, LeagueRules, Player};
use roster_service::LeagueLedger;
use scoring_engine::MatchLog;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PersistenceError, Result};

const LEAGUE_FILE: &str = "league.json";
const PLAYERS_FILE: &str = "players.json";
const MATCHES_FILE: &str = "matches.json";

/// Rules and franchises live together; a franchise is meaningless
/// without the rules that sized its budget and quotas.
#[derive(Debug, Serialize, Deserialize)]
struct LeagueDocument {
    rules: LeagueRules,
    franchises: Vec<Franchise>,
}

pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// True once a season has been saved to this directory.
    pub fn has_snapshot(&self) -> bool {
        self.dir.join(LEAGUE_FILE).exists() && self.dir.join(PLAYERS_FILE).exists()
    }

    /// Persists the full ledger. Both documents are rewritten even when
    /// only one changed; the documents are small and a partial pair is
    /// worse than a redundant write.
    pub fn save_ledger(&self, ledger: &LeagueLedger) -> Result<()> {
        let league = LeagueDocument {
            rules: ledger.rules().clone(),
            franchises: ledger.franchises().to_vec(),
        };
        self.write_document(LEAGUE_FILE, &league)?;
        self.write_document(PLAYERS_FILE, &ledger.players().to_vec())?;
        debug!(dir = %self.dir.display(), "ledger snapshot written");
        Ok(())
    }

    /// Loads the ledger, or `None` when the directory holds no season
    /// yet. Cross-document references are checked: a sold player must
    /// name a franchise present in the league document.
    pub fn load_ledger(&self) -> Result<Option<LeagueLedger>> {
        if !self.has_snapshot() {
            return Ok(None);
        }
        let league: LeagueDocument = self.read_document(LEAGUE_FILE)?;
        let players: Vec<Player> = self.read_document(PLAYERS_FILE)?;

        for player in &players {
            if let Some(owner) = player.owner() {
                if !league.franchises.iter().any(|f| f.id == owner) {
                    return Err(PersistenceError::corruption(format!(
                        "player {} sold to unknown franchise {}",
                        player.name, owner
                    )));
                }
            }
        }

        info!(
            players = players.len(),
            franchises = league.franchises.len(),
            "league snapshot loaded"
        );
        Ok(Some(LeagueLedger::new(league.rules, players, league.franchises)))
    }

    pub fn save_matches(&self, log: &MatchLog) -> Result<()> {
        self.write_document(MATCHES_FILE, log)?;
        debug!(matches = log.len(), "match log written");
        Ok(())
    }

    /// Loads the match log; a missing file is an empty log, not an error.
    pub fn load_matches(&self) -> Result<MatchLog> {
        if !self.dir.join(MATCHES_FILE).exists() {
            return Ok(MatchLog::new());
        }
        self.read_document(MATCHES_FILE)
    }

    /// Drops every stored document. Used by season reset.
    pub fn clear(&self) -> Result<()> {
        for name in [LEAGUE_FILE, PLAYERS_FILE, MATCHES_FILE] {
            let path = self.dir.join(name);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        info!(dir = %self.dir.display(), "snapshot directory cleared");
        Ok(())
    }

    fn write_document<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!("{name}.tmp"));
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn read_document<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let reader = BufReader::new(File::open(self.dir.join(name))?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use league_model::{Amount, Category, PlayerRole};
    use roster_service::{initialize_season, FranchiseSeed, PlayerSeed};
    use scoring_engine::{MatchRecord, PlayerPerformance};
    use tempfile::TempDir;

    fn sample_ledger() -> LeagueLedger {
        let franchises = [
            FranchiseSeed {
                name: "Lions".to_string(),
                color: "#d97706".to_string(),
                icon: String::new(),
            },
            FranchiseSeed {
                name: "Tigers".to_string(),
                color: String::new(),
                icon: String::new(),
            },
        ];
        let players = [
            PlayerSeed {
                name: "Sagar".to_string(),
                category: Category::APlus,
                role: PlayerRole::Batter,
            },
            PlayerSeed {
                name: "Harsh".to_string(),
                category: Category::A,
                role: PlayerRole::Bowler,
            },
        ];
        initialize_season(league_model::LeagueRules::default(), &franchises, &players).unwrap()
    }

    #[test]
    fn empty_directory_loads_as_no_season() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();
        assert!(!store.has_snapshot());
        assert!(store.load_ledger().unwrap().is_none());
        assert!(store.load_matches().unwrap().is_empty());
    }

    #[test]
    fn ledger_round_trips_with_sales_intact() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();

        let mut ledger = sample_ledger();
        let sagar = ledger.players()[0].id;
        let lions = ledger.franchises()[0].id;
        ledger.sell(sagar, lions, Amount::from_lakhs(7)).unwrap();
        store.save_ledger(&ledger).unwrap();

        let loaded = store.load_ledger().unwrap().unwrap();
        assert_eq!(loaded.players().len(), 2);
        assert_eq!(loaded.player(sagar).unwrap().owner(), Some(lions));
        assert_eq!(
            loaded.franchise(lions).unwrap().budget,
            ledger.franchise(lions).unwrap().budget
        );
        assert_eq!(loaded.rules().starting_budget, ledger.rules().starting_budget);
    }

    #[test]
    fn match_log_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();

        let mut log = MatchLog::new();
        log.append(MatchRecord {
            match_number: 4,
            date: NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
            phase_fixed: true,
            performances: vec![PlayerPerformance {
                player_name: "Sagar".to_string(),
                points: 142,
                is_potm: true,
                breakdown: "Runs: 61, POTM".to_string(),
                franchise_snapshot: None,
                multiplier: Some(2.0),
            }],
        })
        .unwrap();
        store.save_matches(&log).unwrap();

        let loaded = store.load_matches().unwrap();
        assert_eq!(loaded, log);
    }

    #[test]
    fn sold_player_must_reference_a_stored_franchise() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();

        let mut ledger = sample_ledger();
        let sagar = ledger.players()[0].id;
        let lions = ledger.franchises()[0].id;
        ledger.sell(sagar, lions, Amount::from_lakhs(7)).unwrap();
        store.save_ledger(&ledger).unwrap();

        // Rewrite the league document without the owning franchise.
        let league = LeagueDocument {
            rules: ledger.rules().clone(),
            franchises: ledger.franchises()[1..].to_vec(),
        };
        store.write_document(LEAGUE_FILE, &league).unwrap();

        assert!(matches!(
            store.load_ledger(),
            Err(PersistenceError::Corruption(_))
        ));
    }

    #[test]
    fn clear_removes_every_document() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();
        store.save_ledger(&sample_ledger()).unwrap();
        store.save_matches(&MatchLog::new()).unwrap();
        assert!(store.has_snapshot());

        store.clear().unwrap();
        assert!(!store.has_snapshot());
        assert!(store.load_matches().unwrap().is_empty());
    }

    #[test]
    fn saves_replace_rather_than_append() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();

        let mut ledger = sample_ledger();
        store.save_ledger(&ledger).unwrap();
        let sagar = ledger.players()[0].id;
        let lions = ledger.franchises()[0].id;
        ledger.sell(sagar, lions, Amount::from_lakhs(7)).unwrap();
        store.save_ledger(&ledger).unwrap();

        let loaded = store.load_ledger().unwrap().unwrap();
        assert!(loaded.player(sagar).unwrap().is_sold());
    }
}
