//! Budget reservation calculator
//!
//! Answers "how much can this franchise commit right now" without
//! starving its remaining mandatory category slots at minimum price.
//! Greedy floor-price reservation: it guarantees the roster can always
//! be completed under worst-case (base-price) future sales, and is
//! intentionally conservative about any best-case surplus.
//!
//! Results are never cached. Budget and occupancy both change between
//! calls, so every bid attempt and every finalize recomputes from the
//! live ledger.

use crate::ledger::LeagueLedger;
use league_model::{Amount, Category, FranchiseId, ALL_CATEGORIES};

/// Total base-price cost of every still-open mandatory slot.
///
/// When `bidding_category` is set, one slot of that category is
/// excluded: the slot the current bid would fill does not reserve
/// against itself.
pub fn reserve_floor(
    ledger: &LeagueLedger,
    franchise: FranchiseId,
    bidding_category: Option<Category>,
) -> Amount {
    let rules = ledger.rules();
    let mut reserve = Amount::ZERO;
    for &cat in &ALL_CATEGORIES {
        let owned = ledger.occupancy(franchise, cat) as i64;
        let mut remaining = rules.quota(cat) as i64 - owned;
        if bidding_category == Some(cat) && remaining > 0 {
            remaining -= 1;
        }
        if remaining > 0 {
            reserve = reserve + rules.base_price(cat) * remaining;
        }
    }
    reserve
}

/// Reservation ceiling: the most a franchise may commit to a player of
/// `category` right now. May be below the category base price (or even
/// negative), in which case the franchise cannot bid at all.
pub fn max_spendable(ledger: &LeagueLedger, franchise: FranchiseId, category: Category) -> Amount {
    let budget = ledger
        .franchise(franchise)
        .map(|f| f.budget)
        .unwrap_or(Amount::ZERO);
    budget - reserve_floor(ledger, franchise, Some(category))
}
