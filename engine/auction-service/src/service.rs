//! The operator-facing service facade.
//!
//! Wraps the ledger, the gavel, the draw machinery, and the match log
//! behind one API, and persists state after every committed mutation.
//! In-flight lot state (an open auction with live bids) is memory-only;
//! a restart abandons the lot without touching budgets.

use std::path::Path;

use gavel::{DrawOrder, Gavel, LotOutcome, OpenLot};
use league_model::{Amount, Category, FranchiseId, PlayerId};
use persistence::SnapshotStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use roster_service::{
    category_pool_stats, franchise_summaries, initialize_season, max_spendable, portfolio_csv,
    reserve_floor, unsold_players_sorted, CategoryPoolStats, FranchiseSummary, LeagueLedger,
    PlayerSortKey, SortOrder,
};
use scoring_engine::{
    free_agent_total, leaderboard, scored_rows, FranchiseStanding, MatchLog, MatchRecord,
    RowFilter, ScoredRow,
};
use tracing::{info, warn};

use crate::error::{Result, ServiceError};
use crate::seed::SeedFile;

pub struct AuctionService {
    store: SnapshotStore,
    ledger: LeagueLedger,
    matches: MatchLog,
    gavel: Gavel,
    draw_order: DrawOrder,
    rng: StdRng,
}

impl AuctionService {
    /// Start a fresh season in `data_dir` from a seed. Refuses to clobber
    /// an existing season unless `force` is set.
    pub fn init(data_dir: &Path, seed: &SeedFile, force: bool) -> Result<Self> {
        let store = SnapshotStore::new(data_dir)?;
        if store.has_snapshot() && !force {
            return Err(ServiceError::SeasonExists);
        }
        let ledger = initialize_season(seed.rules.clone(), &seed.franchises, &seed.players)?;
        store.clear()?;
        store.save_ledger(&ledger)?;
        let matches = MatchLog::new();
        store.save_matches(&matches)?;
        info!(
            franchises = ledger.franchises().len(),
            players = ledger.players().len(),
            "season initialized"
        );
        Ok(Self {
            store,
            ledger,
            matches,
            gavel: Gavel::new(),
            draw_order: DrawOrder::new(seed.marquee.clone()),
            rng: StdRng::from_entropy(),
        })
    }

    /// Resume the season saved in `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let store = SnapshotStore::new(data_dir)?;
        let ledger = store.load_ledger()?.ok_or(ServiceError::NoSeason)?;
        let matches = store.load_matches()?;
        info!(matches = matches.len(), "season resumed");
        Ok(Self {
            store,
            ledger,
            matches,
            gavel: Gavel::new(),
            draw_order: DrawOrder::new(Vec::new()),
            rng: StdRng::from_entropy(),
        })
    }

    /// Replace the marquee order for this session. The order is operator
    /// configuration, not league state, so it is never persisted.
    pub fn set_marquee(&mut self, marquee: Vec<String>) {
        self.draw_order = DrawOrder::new(marquee);
    }

    pub fn ledger(&self) -> &LeagueLedger {
        &self.ledger
    }

    pub fn matches(&self) -> &MatchLog {
        &self.matches
    }

    // ---- live auction ----

    pub fn open_lot(&self) -> Option<&OpenLot> {
        self.gavel.open_lot_view()
    }

    /// Pick the next unsold player, marquee order first.
    pub fn next_lot(&mut self) -> Option<PlayerId> {
        self.draw_order.next_player(&self.ledger, &mut self.rng)
    }

    pub fn open_auction(&mut self, player: PlayerId) -> Result<()> {
        self.gavel.open_auction(&self.ledger, player)?;
        Ok(())
    }

    /// Returns the new leading bid amount.
    pub fn place_bid(&mut self, franchise: FranchiseId) -> Result<Amount> {
        Ok(self.gavel.place_bid(&self.ledger, franchise)?)
    }

    pub fn finalize_sale(&mut self, override_price: Option<Amount>) -> Result<LotOutcome> {
        let outcome = self.gavel.finalize_sale(&mut self.ledger, override_price)?;
        self.store.save_ledger(&self.ledger)?;
        Ok(outcome)
    }

    pub fn skip_lot(&mut self) -> Result<LotOutcome> {
        Ok(self.gavel.skip()?)
    }

    // ---- roster management ----

    /// Direct assignment outside open bidding, for operator corrections
    /// and pre-agreed sales. Runs the same validation a finalized lot
    /// would: unsold player, quota room, price at or above base, and the
    /// buyer's reservation ceiling.
    pub fn sell_direct(
        &mut self,
        player: PlayerId,
        franchise: FranchiseId,
        price: Amount,
    ) -> Result<()> {
        let p = self.ledger.player(player)?;
        if p.is_sold() {
            return Err(ServiceError::AlreadySold(player));
        }
        let category = p.category;
        let base = p.base_price;
        if price < base {
            return Err(roster_service::RosterError::BelowBasePrice { price, base }.into());
        }
        if !self.ledger.has_quota_room(franchise, category) {
            let name = self.ledger.franchise(franchise)?.name.clone();
            return Err(
                roster_service::RosterError::QuotaExceeded { franchise: name, category }.into()
            );
        }
        let ceiling = max_spendable(&self.ledger, franchise, category);
        if price > ceiling {
            return Err(roster_service::RosterError::InsufficientBudget {
                required: price,
                available: ceiling,
            }
            .into());
        }
        self.ledger.sell(player, franchise, price)?;
        self.store.save_ledger(&self.ledger)?;
        Ok(())
    }

    pub fn release(&mut self, player: PlayerId) -> Result<()> {
        self.ledger.release(player)?;
        self.store.save_ledger(&self.ledger)?;
        Ok(())
    }

    pub fn move_player(&mut self, player: PlayerId, to: FranchiseId) -> Result<()> {
        self.ledger.move_player(player, to)?;
        self.store.save_ledger(&self.ledger)?;
        Ok(())
    }

    pub fn reprice(&mut self, player: PlayerId, new_price: Amount) -> Result<()> {
        self.ledger.reprice(player, new_price)?;
        self.store.save_ledger(&self.ledger)?;
        Ok(())
    }

    /// Assign captain and vice-captain. Both must be on the franchise
    /// roster; passing `None` clears the slot.
    pub fn set_captaincy(
        &mut self,
        franchise: FranchiseId,
        captain: Option<PlayerId>,
        vice_captain: Option<PlayerId>,
    ) -> Result<()> {
        for player in [captain, vice_captain].into_iter().flatten() {
            if self.ledger.player(player)?.owner() != Some(franchise) {
                return Err(ServiceError::CaptainNotOnRoster);
            }
        }
        let f = self.ledger.franchise_mut(franchise)?;
        f.captain = captain;
        f.vice_captain = vice_captain;
        self.store.save_ledger(&self.ledger)?;
        Ok(())
    }

    // ---- retention draw ----

    pub fn eligible_for_draw(&self, category: Category) -> Vec<FranchiseId> {
        retention_draw::eligible_franchises(&self.ledger, category)
            .into_iter()
            .map(|f| f.id)
            .collect()
    }

    /// Run the draw among the interested franchises. Resolution only;
    /// nothing is committed until [`commit_retention`](Self::commit_retention).
    pub fn run_draw(&mut self, category: Category, interested: &[FranchiseId]) -> Result<FranchiseId> {
        Ok(retention_draw::run_draw(&self.ledger, category, interested, &mut self.rng)?)
    }

    pub fn commit_retention(&mut self, player: PlayerId, franchise: FranchiseId) -> Result<()> {
        retention_draw::commit_retention(&mut self.ledger, player, franchise)?;
        self.store.save_ledger(&self.ledger)?;
        Ok(())
    }

    // ---- scoring ----

    pub fn record_match(&mut self, record: MatchRecord) -> Result<()> {
        self.matches.append(record)?;
        self.store.save_matches(&self.matches)?;
        Ok(())
    }

    pub fn remove_match(&mut self, match_number: u32) -> Result<MatchRecord> {
        let removed = self.matches.remove(match_number)?;
        self.store.save_matches(&self.matches)?;
        Ok(removed)
    }

    pub fn standings(&self) -> Vec<FranchiseStanding> {
        leaderboard(&self.ledger, &self.matches)
    }

    pub fn free_agent_points(&self) -> i64 {
        free_agent_total(&self.ledger, &self.matches)
    }

    pub fn performance_rows(&self, filter: RowFilter) -> Vec<ScoredRow> {
        scored_rows(&self.ledger, &self.matches, filter)
    }

    // ---- queries ----

    pub fn summaries(&self) -> Vec<FranchiseSummary> {
        franchise_summaries(&self.ledger)
    }

    pub fn pool_stats(&self) -> Vec<CategoryPoolStats> {
        category_pool_stats(&self.ledger)
    }

    pub fn unsold(&self, key: PlayerSortKey, order: SortOrder) -> Vec<PlayerId> {
        unsold_players_sorted(&self.ledger, key, order)
            .into_iter()
            .map(|p| p.id)
            .collect()
    }

    pub fn export_csv(&self) -> String {
        portfolio_csv(&self.ledger)
    }

    pub fn reserve(&self, franchise: FranchiseId) -> Amount {
        reserve_floor(&self.ledger, franchise, None)
    }

    pub fn bid_ceiling(&self, franchise: FranchiseId, category: Category) -> Amount {
        max_spendable(&self.ledger, franchise, category)
    }

    // ---- season lifecycle ----

    /// Rebuild the ledger from a seed for a new auction. The match log
    /// survives a reset so historical standings stay queryable; scores
    /// recorded against the old rosters re-resolve under the new ones.
    pub fn reset_season(&mut self, seed: &SeedFile) -> Result<()> {
        if !self.matches.is_empty() {
            warn!(
                matches = self.matches.len(),
                "season reset with recorded matches; match log is retained"
            );
        }
        self.ledger = initialize_season(seed.rules.clone(), &seed.franchises, &seed.players)?;
        self.gavel = Gavel::new();
        self.draw_order = DrawOrder::new(seed.marquee.clone());
        self.store.save_ledger(&self.ledger)?;
        self.store.save_matches(&self.matches)?;
        info!("season reset");
        Ok(())
    }
}
