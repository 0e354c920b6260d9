//! Performance log rows and the season leaderboard.

use std::collections::HashMap;

use chrono::NaiveDate;
use league_model::FranchiseId;
use roster_service::LeagueLedger;

use crate::record::MatchLog;
use crate::resolve::{
    resolve_attribution, resolve_multiplier, weighted_points, Attribution, NameIndex,
};

/// A fully resolved performance row, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    pub match_number: u32,
    pub date: NaiveDate,
    pub player_name: String,
    pub attribution: Attribution,
    /// Display name of the attributed franchise, or "Free Agent".
    pub franchise_label: String,
    pub points: i64,
    pub multiplier: f64,
    pub weighted: i64,
    pub is_potm: bool,
    pub breakdown: String,
}

/// Optional narrowing of the performance log.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowFilter {
    pub match_number: Option<u32>,
    pub franchise: Option<FranchiseId>,
}

/// One franchise's line on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FranchiseStanding {
    pub franchise: FranchiseId,
    pub name: String,
    pub matches: u32,
    pub total: i64,
}

/// Resolves every log row against the current ledger. Rows come back in
/// log order, most recent match first, preserving scorecard order within
/// a match.
pub fn scored_rows(ledger: &LeagueLedger, log: &MatchLog, filter: RowFilter) -> Vec<ScoredRow> {
    let index = NameIndex::build(ledger);
    let mut rows = Vec::new();
    for record in log.records() {
        if let Some(wanted) = filter.match_number {
            if record.match_number != wanted {
                continue;
            }
        }
        for perf in &record.performances {
            let attribution = resolve_attribution(ledger, &index, perf);
            if let Some(wanted) = filter.franchise {
                if attribution != Attribution::Franchise(wanted) {
                    continue;
                }
            }
            let multiplier = resolve_multiplier(ledger, &index, record, perf, attribution);
            let franchise_label = match attribution {
                Attribution::Franchise(id) => ledger
                    .franchise(id)
                    .map(|f| f.name.clone())
                    .unwrap_or_else(|_| id.to_string()),
                Attribution::FreeAgent => "Free Agent".to_string(),
            };
            rows.push(ScoredRow {
                match_number: record.match_number,
                date: record.date,
                player_name: perf.player_name.clone(),
                attribution,
                franchise_label,
                points: perf.points,
                multiplier,
                weighted: weighted_points(perf.points, multiplier),
                is_potm: perf.is_potm,
                breakdown: perf.breakdown.clone(),
            });
        }
    }
    rows
}

/// Season leaderboard: every franchise's weighted total, highest first,
/// ties broken by franchise id so the ordering is stable across runs.
/// Free-agent points are excluded here; `free_agent_total` reports them.
pub fn leaderboard(ledger: &LeagueLedger, log: &MatchLog) -> Vec<FranchiseStanding> {
    let rows = scored_rows(ledger, log, RowFilter::default());

    let mut totals: HashMap<FranchiseId, i64> = HashMap::new();
    let mut match_counts: HashMap<FranchiseId, std::collections::HashSet<u32>> = HashMap::new();
    for row in &rows {
        if let Attribution::Franchise(id) = row.attribution {
            *totals.entry(id).or_insert(0) += row.weighted;
            match_counts.entry(id).or_default().insert(row.match_number);
        }
    }

    let mut standings: Vec<FranchiseStanding> = ledger
        .franchises()
        .iter()
        .map(|f| FranchiseStanding {
            franchise: f.id,
            name: f.name.clone(),
            matches: match_counts.get(&f.id).map_or(0, |m| m.len() as u32),
            total: totals.get(&f.id).copied().unwrap_or(0),
        })
        .collect();
    standings.sort_by(|a, b| b.total.cmp(&a.total).then(a.franchise.cmp(&b.franchise)));
    standings
}

/// Weighted points scored by players nobody owned at resolution time.
pub fn free_agent_total(ledger: &LeagueLedger, log: &MatchLog) -> i64 {
    scored_rows(ledger, log, RowFilter::default())
        .iter()
        .filter(|r| r.attribution == Attribution::FreeAgent)
        .map(|r| r.weighted)
        .sum()
}
