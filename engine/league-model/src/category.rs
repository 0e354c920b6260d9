//! Scarcity categories and the static league rule set

use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// Scarcity tier of a player, most scarce first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
}

pub const ALL_CATEGORIES: [Category; 4] = [Category::APlus, Category::A, Category::B, Category::C];

impl Category {
    /// Display rank used for sort and tie-break ordering, most scarce first
    pub fn rank(self) -> u8 {
        match self {
            Category::APlus => 1,
            Category::A => 2,
            Category::B => 3,
            Category::C => 4,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Category::APlus => "A+",
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
        }
    }

    /// Classification label shown on player cards
    pub fn label(self) -> &'static str {
        match self {
            Category::APlus => "PLATINUM",
            Category::A => "GOLD",
            Category::B => "SILVER",
            Category::C => "BRONZE",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-category rule block: roster quota, bidding floor, fixed draw price
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryRules {
    /// Max players of this category per franchise
    pub quota: u8,
    /// Bidding floor and reservation unit
    pub base_price: Amount,
    /// Fixed price charged by the retention draw
    pub retention_price: Amount,
}

/// Global static league configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueRules {
    pub starting_budget: Amount,
    pub a_plus: CategoryRules,
    pub a: CategoryRules,
    pub b: CategoryRules,
    pub c: CategoryRules,
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("category {0} has zero quota")]
    ZeroQuota(Category),
    #[error("category {0} base price must be a positive multiple of 10 cents")]
    InvalidBasePrice(Category),
    #[error("category {0} retention price below base price")]
    RetentionBelowBase(Category),
    #[error("starting budget cannot cover one full roster at base prices")]
    BudgetBelowFloor,
}

impl LeagueRules {
    pub fn category(&self, category: Category) -> &CategoryRules {
        match category {
            Category::APlus => &self.a_plus,
            Category::A => &self.a,
            Category::B => &self.b,
            Category::C => &self.c,
        }
    }

    pub fn quota(&self, category: Category) -> u8 {
        self.category(category).quota
    }

    pub fn base_price(&self, category: Category) -> Amount {
        self.category(category).base_price
    }

    pub fn retention_price(&self, category: Category) -> Amount {
        self.category(category).retention_price
    }

    /// Bid step for a category: 10% of the category base price
    pub fn bid_increment(&self, category: Category) -> Amount {
        self.base_price(category) / 10
    }

    /// Total roster size a qualified franchise must reach
    pub fn total_quota(&self) -> u32 {
        ALL_CATEGORIES.iter().map(|&c| self.quota(c) as u32).sum()
    }

    /// Cost of one full roster at category base prices
    pub fn roster_floor_cost(&self) -> Amount {
        ALL_CATEGORIES
            .iter()
            .map(|&c| self.base_price(c) * self.quota(c) as i64)
            .sum()
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        for &cat in &ALL_CATEGORIES {
            let rules = self.category(cat);
            if rules.quota == 0 {
                return Err(RulesError::ZeroQuota(cat));
            }
            // Increment is base/10; base must divide cleanly for exact steps.
            if rules.base_price.to_cents() <= 0 || rules.base_price.to_cents() % 10 != 0 {
                return Err(RulesError::InvalidBasePrice(cat));
            }
            if rules.retention_price < rules.base_price {
                return Err(RulesError::RetentionBelowBase(cat));
            }
        }
        if self.starting_budget < self.roster_floor_cost() {
            return Err(RulesError::BudgetBelowFloor);
        }
        Ok(())
    }
}

impl Default for LeagueRules {
    /// The season rule card: quotas 2/3/2/4, bases 5/3/2/1 L,
    /// retention prices 20/13/8/3.5 L, 50 L starting purse.
    fn default() -> Self {
        Self {
            starting_budget: Amount::from_lakhs(50),
            a_plus: CategoryRules {
                quota: 2,
                base_price: Amount::from_lakhs(5),
                retention_price: Amount::from_lakhs(20),
            },
            a: CategoryRules {
                quota: 3,
                base_price: Amount::from_lakhs(3),
                retention_price: Amount::from_lakhs(13),
            },
            b: CategoryRules {
                quota: 2,
                base_price: Amount::from_lakhs(2),
                retention_price: Amount::from_lakhs(8),
            },
            c: CategoryRules {
                quota: 4,
                base_price: Amount::from_lakhs(1),
                retention_price: Amount::from_cents(350),
            },
        }
    }
}
