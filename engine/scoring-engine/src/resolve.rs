//! Franchise attribution and multiplier resolution for performance rows.

use std::collections::HashMap;

use league_model::{Franchise, FranchiseId, PlayerId};
use roster_service::LeagueLedger;
use tracing::warn;

use crate::record::{FranchiseSnapshot, MatchRecord, PlayerPerformance};

/// Where a performance row's points land in the standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribution {
    Franchise(FranchiseId),
    /// Points scored while the player was owned by nobody. Kept as an
    /// explicit bucket so free-agent totals stay visible instead of
    /// silently dropping rows.
    FreeAgent,
}

/// Case-insensitive lookup from player name to id, built once per
/// aggregation pass. Duplicate names keep the first registered player;
/// the collision is logged so bad seed data gets noticed.
pub struct NameIndex {
    by_name: HashMap<String, PlayerId>,
}

impl NameIndex {
    pub fn build(ledger: &LeagueLedger) -> Self {
        let mut by_name = HashMap::new();
        for player in ledger.players() {
            let key = normalize(&player.name);
            if let Some(existing) = by_name.get(&key) {
                warn!(name = %player.name, kept = %existing, "duplicate player name in pool");
                continue;
            }
            by_name.insert(key, player.id);
        }
        Self { by_name }
    }

    pub fn lookup(&self, name: &str) -> Option<PlayerId> {
        self.by_name.get(&normalize(name)).copied()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Resolves which franchise a row's points belong to.
///
/// The snapshot taken at scoring time wins when it names a franchise that
/// still exists. A `FreeAgent` snapshot, or no snapshot at all, falls
/// through to the player's current roster; a player who matches nothing
/// lands in the free-agent bucket.
pub fn resolve_attribution(
    ledger: &LeagueLedger,
    index: &NameIndex,
    perf: &PlayerPerformance,
) -> Attribution {
    if let Some(FranchiseSnapshot::Franchise(id)) = perf.franchise_snapshot {
        if ledger.franchise(id).is_ok() {
            return Attribution::Franchise(id);
        }
        warn!(franchise = %id, player = %perf.player_name, "snapshot names unknown franchise");
    }
    let owner = index
        .lookup(&perf.player_name)
        .and_then(|pid| ledger.player(pid).ok())
        .and_then(|p| p.owner());
    match owner {
        Some(id) => Attribution::Franchise(id),
        None => Attribution::FreeAgent,
    }
}

/// Resolves the multiplier for a row.
///
/// Phase-fixed matches carry their multipliers verbatim, defaulting to 1.
/// Otherwise captaincy on the resolved franchise decides: the captain
/// scores double, the vice-captain one and a half times.
pub fn resolve_multiplier(
    ledger: &LeagueLedger,
    index: &NameIndex,
    record: &MatchRecord,
    perf: &PlayerPerformance,
    attribution: Attribution,
) -> f64 {
    if record.phase_fixed {
        return perf.multiplier.unwrap_or(1.0);
    }
    let Attribution::Franchise(franchise_id) = attribution else {
        return 1.0;
    };
    let Ok(franchise) = ledger.franchise(franchise_id) else {
        return 1.0;
    };
    let Some(player_id) = index.lookup(&perf.player_name) else {
        return 1.0;
    };
    captaincy_multiplier(franchise, player_id)
}

fn captaincy_multiplier(franchise: &Franchise, player_id: PlayerId) -> f64 {
    if franchise.captain == Some(player_id) {
        2.0
    } else if franchise.vice_captain == Some(player_id) {
        1.5
    } else {
        1.0
    }
}

/// Weighted points for a row. Rounds half away from zero, so 7.5 becomes
/// 8 and -7.5 becomes -8.
pub fn weighted_points(points: i64, multiplier: f64) -> i64 {
    (points as f64 * multiplier).round() as i64
}
