//! Gavel - per-lot bidding state machine
//!
//! One player is under the hammer at a time: `IDLE -> OPEN -> SOLD /
//! SKIPPED -> IDLE`. All validation reads the live ledger; nothing is
//! cached between bids, because budgets and occupancy change under the
//! machine's feet with every commit elsewhere.

mod draw;
mod error;

pub use draw::DrawOrder;
pub use error::{AuctionError, Result};

use league_model::{Amount, Category, FranchiseId, PlayerId};
use roster_service::{max_spendable, LeagueLedger, RosterError};
use tracing::info;

/// One accepted bid, kept for the lot's audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bid {
    pub franchise: FranchiseId,
    pub amount: Amount,
}

/// Read-only view of the lot currently under the hammer
#[derive(Debug, Clone)]
pub struct OpenLot {
    pub player: PlayerId,
    pub category: Category,
    pub base_price: Amount,
    pub current_bid: Amount,
    pub leader: Option<FranchiseId>,
    pub history: Vec<Bid>,
}

enum LotState {
    Idle,
    Open(OpenLot),
}

/// Outcome of a closed lot, surfaced to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotOutcome {
    Sold { player: PlayerId, franchise: FranchiseId, price: Amount },
    Skipped { player: PlayerId },
}

pub struct Gavel {
    state: LotState,
}

impl Default for Gavel {
    fn default() -> Self {
        Self::new()
    }
}

impl Gavel {
    pub fn new() -> Self {
        Self { state: LotState::Idle }
    }

    pub fn open_lot_view(&self) -> Option<&OpenLot> {
        match &self.state {
            LotState::Idle => None,
            LotState::Open(lot) => Some(lot),
        }
    }

    /// Put a player under the hammer. Only legal from idle; the opening
    /// bid starts at the category base price with no leader.
    pub fn open_auction(&mut self, ledger: &LeagueLedger, player_id: PlayerId) -> Result<&OpenLot> {
        if let LotState::Open(lot) = &self.state {
            return Err(AuctionError::LotAlreadyOpen(lot.player));
        }
        let player = ledger.player(player_id)?;
        if player.is_sold() {
            return Err(AuctionError::AlreadySold(player_id));
        }

        let base_price = ledger.rules().base_price(player.category);
        self.state = LotState::Open(OpenLot {
            player: player_id,
            category: player.category,
            base_price,
            current_bid: base_price,
            leader: None,
            history: Vec::new(),
        });
        info!(player = %player_id, %base_price, "auction opened");
        Ok(self.open_lot_view().expect("lot just opened"))
    }

    /// Register a bid by a franchise. The candidate amount is the base
    /// price for the first bid, then current plus the category step.
    /// Returns the new standing bid on acceptance.
    pub fn place_bid(&mut self, ledger: &LeagueLedger, franchise_id: FranchiseId) -> Result<Amount> {
        let lot = match &mut self.state {
            LotState::Idle => return Err(AuctionError::NoOpenLot),
            LotState::Open(lot) => lot,
        };
        let franchise = ledger.franchise(franchise_id)?;

        if lot.leader == Some(franchise_id) {
            return Err(AuctionError::AlreadyLeading(franchise.name.clone()));
        }
        if !ledger.has_quota_room(franchise_id, lot.category) {
            return Err(RosterError::QuotaExceeded {
                franchise: franchise.name.clone(),
                category: lot.category,
            }
            .into());
        }

        let candidate = match lot.leader {
            None => lot.base_price,
            Some(_) => lot.current_bid + ledger.rules().bid_increment(lot.category),
        };
        // Recomputed fresh on every attempt; never cached.
        let ceiling = max_spendable(ledger, franchise_id, lot.category);
        if candidate > ceiling {
            return Err(RosterError::InsufficientBudget {
                required: candidate,
                available: ceiling,
            }
            .into());
        }

        lot.current_bid = candidate;
        lot.leader = Some(franchise_id);
        lot.history.push(Bid { franchise: franchise_id, amount: candidate });
        info!(player = %lot.player, franchise = %franchise_id, amount = %candidate, "bid accepted");
        Ok(candidate)
    }

    /// Close the lot as sold. The committed price may be manually
    /// overridden, but must sit on the increment ladder: at or above
    /// base, an exact whole number of steps up, and within the leading
    /// bidder's reservation ceiling. On any violation the lot stays
    /// open with a specific reason.
    pub fn finalize_sale(
        &mut self,
        ledger: &mut LeagueLedger,
        override_price: Option<Amount>,
    ) -> Result<LotOutcome> {
        let lot = match &self.state {
            LotState::Idle => return Err(AuctionError::NoOpenLot),
            LotState::Open(lot) => lot,
        };
        let leader = lot.leader.ok_or(AuctionError::NoLeadingBidder)?;
        let price = override_price.unwrap_or(lot.current_bid);

        // The ledger legally mutates between bid and finalize (direct
        // sells, retentions, releases), so the bid-time checks are stale
        // by now: the player may have sold elsewhere and the leader's
        // quota may have filled.
        if ledger.player(lot.player)?.is_sold() {
            return Err(AuctionError::AlreadySold(lot.player));
        }
        if !ledger.has_quota_room(leader, lot.category) {
            return Err(RosterError::QuotaExceeded {
                franchise: ledger.franchise(leader)?.name.clone(),
                category: lot.category,
            }
            .into());
        }
        if price < lot.base_price {
            return Err(RosterError::BelowBasePrice { price, base: lot.base_price }.into());
        }
        let increment = ledger.rules().bid_increment(lot.category);
        // Integer-cent arithmetic: no float drift in the alignment check.
        if (price - lot.base_price).to_cents() % increment.to_cents() != 0 {
            return Err(AuctionError::InvalidIncrement { category: lot.category, increment });
        }
        let ceiling = max_spendable(ledger, leader, lot.category);
        if price > ceiling {
            return Err(RosterError::InsufficientBudget { required: price, available: ceiling }
                .into());
        }

        let player = lot.player;
        ledger.sell(player, leader, price)?;
        self.state = LotState::Idle;
        info!(%player, franchise = %leader, %price, "lot sold");
        Ok(LotOutcome::Sold { player, franchise: leader, price })
    }

    /// Close the lot with no sale, discarding the in-progress bid.
    pub fn skip(&mut self) -> Result<LotOutcome> {
        match std::mem::replace(&mut self.state, LotState::Idle) {
            LotState::Idle => Err(AuctionError::NoOpenLot),
            LotState::Open(lot) => {
                info!(player = %lot.player, "lot skipped");
                Ok(LotOutcome::Skipped { player: lot.player })
            }
        }
    }
}
