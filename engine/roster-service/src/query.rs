//! Pool queries: sorted unsold listings and per-category market stats

use crate::ledger::LeagueLedger;
use league_model::{Amount, Category, Player, ALL_CATEGORIES};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSortKey {
    Name,
    Category,
    Role,
    Valuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Unsold players sorted for display. Category sorts by scarcity rank;
/// ties fall back to case-insensitive name order so listings are stable.
pub fn unsold_players_sorted(
    ledger: &LeagueLedger,
    key: PlayerSortKey,
    order: SortOrder,
) -> Vec<&Player> {
    let mut pool = ledger.unsold_players();
    pool.sort_by(|a, b| {
        let cmp = match key {
            PlayerSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            PlayerSortKey::Category => a.category.rank().cmp(&b.category.rank()),
            PlayerSortKey::Role => a.role.label().cmp(b.role.label()),
            PlayerSortKey::Valuation => a.valuation().cmp(&b.valuation()),
        };
        let cmp = match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        };
        if cmp == Ordering::Equal {
            a.name.to_lowercase().cmp(&b.name.to_lowercase())
        } else {
            cmp
        }
    });
    pool
}

/// Auction-room header stats for one category
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryPoolStats {
    pub category: Category,
    pub unsold: u32,
    pub sold: u32,
    /// Mean sold price, zero when nothing has sold yet
    pub average_sold_price: Amount,
}

pub fn category_pool_stats(ledger: &LeagueLedger) -> Vec<CategoryPoolStats> {
    ALL_CATEGORIES
        .iter()
        .map(|&category| {
            let mut unsold = 0u32;
            let mut sold = 0u32;
            let mut total = Amount::ZERO;
            for player in ledger.players().iter().filter(|p| p.category == category) {
                match player.sale {
                    Some(sale) => {
                        sold += 1;
                        total = total + sale.price;
                    }
                    None => unsold += 1,
                }
            }
            let average_sold_price =
                if sold > 0 { total / sold as i64 } else { Amount::ZERO };
            CategoryPoolStats { category, unsold, sold, average_sold_price }
        })
        .collect()
}
