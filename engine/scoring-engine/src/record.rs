//! Append-only log of recorded matches.
//!
//! Each match carries the raw per-player performance rows as they were
//! scored at entry time. Rows are never rewritten after the fact; the
//! aggregation layer re-resolves franchise attribution on every read so
//! that roster moves show up without touching history.

use chrono::NaiveDate;
use league_model::FranchiseId;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ScoringError};

/// Franchise attribution captured when the match was scored.
///
/// A row scored while the player sat on a roster records the owning
/// franchise; a row scored for an unowned player records `FreeAgent`.
/// Rows from older imports may carry no snapshot at all, in which case
/// attribution falls through to the current roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FranchiseSnapshot {
    Franchise(FranchiseId),
    FreeAgent,
}

/// One player's scored line in a single match.
///
/// `points` is the final raw total for the row, with any player-of-the-match
/// bonus already included. `multiplier` is only honored verbatim when the
/// owning match is phase-fixed; otherwise the aggregator derives the
/// multiplier from current captaincy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub player_name: String,
    pub points: i64,
    #[serde(default)]
    pub is_potm: bool,
    #[serde(default)]
    pub breakdown: String,
    #[serde(default)]
    pub franchise_snapshot: Option<FranchiseSnapshot>,
    #[serde(default)]
    pub multiplier: Option<f64>,
}

/// A single recorded match.
///
/// `phase_fixed` freezes the multipliers stored on the rows, used for
/// matches imported from a phase whose captaincy no longer matches the
/// current rosters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_number: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub phase_fixed: bool,
    pub performances: Vec<PlayerPerformance>,
}

/// The season's match log. Records are kept sorted by match number
/// descending so the most recent match lists first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchLog {
    records: Vec<MatchRecord>,
}

impl MatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records sorted by match number descending.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn record(&self, match_number: u32) -> Option<&MatchRecord> {
        self.records.iter().find(|r| r.match_number == match_number)
    }

    /// Appends a match to the log. Match numbers are unique; re-recording
    /// an existing number is rejected rather than merged.
    pub fn append(&mut self, record: MatchRecord) -> Result<()> {
        if record.performances.is_empty() {
            return Err(ScoringError::EmptyMatch);
        }
        if self.record(record.match_number).is_some() {
            return Err(ScoringError::DuplicateMatch(record.match_number));
        }
        info!(
            match_number = record.match_number,
            rows = record.performances.len(),
            "match recorded"
        );
        self.records.push(record);
        self.records.sort_by(|a, b| b.match_number.cmp(&a.match_number));
        Ok(())
    }

    /// Removes a recorded match, returning it. Used to back out a
    /// mis-entered scorecard.
    pub fn remove(&mut self, match_number: u32) -> Result<MatchRecord> {
        let pos = self
            .records
            .iter()
            .position(|r| r.match_number == match_number)
            .ok_or(ScoringError::MatchNotFound(match_number))?;
        Ok(self.records.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perf(name: &str, points: i64) -> PlayerPerformance {
        PlayerPerformance {
            player_name: name.to_string(),
            points,
            is_potm: false,
            breakdown: String::new(),
            franchise_snapshot: None,
            multiplier: None,
        }
    }

    fn rec(number: u32) -> MatchRecord {
        MatchRecord {
            match_number: number,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            phase_fixed: false,
            performances: vec![perf("Sagar", 120)],
        }
    }

    #[test]
    fn append_keeps_most_recent_first() {
        let mut log = MatchLog::new();
        log.append(rec(1)).unwrap();
        log.append(rec(3)).unwrap();
        log.append(rec(2)).unwrap();

        let numbers: Vec<u32> = log.records().iter().map(|r| r.match_number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[test]
    fn duplicate_match_number_rejected() {
        let mut log = MatchLog::new();
        log.append(rec(7)).unwrap();
        assert_eq!(log.append(rec(7)), Err(ScoringError::DuplicateMatch(7)));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn empty_scorecard_rejected() {
        let mut log = MatchLog::new();
        let mut record = rec(1);
        record.performances.clear();
        assert_eq!(log.append(record), Err(ScoringError::EmptyMatch));
    }

    #[test]
    fn remove_backs_out_a_match() {
        let mut log = MatchLog::new();
        log.append(rec(1)).unwrap();
        log.append(rec(2)).unwrap();

        let removed = log.remove(1).unwrap();
        assert_eq!(removed.match_number, 1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.remove(1), Err(ScoringError::MatchNotFound(1)));
    }
}
