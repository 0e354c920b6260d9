//! The league ledger: single source of truth for ownership and budgets
//!
//! Rosters are a derived view (players filtered by owning franchise),
//! recomputed on demand. At league scale (tens of players) the O(n)
//! scans are cheaper than maintaining a reverse index on every write.

use crate::error::{Result, RosterError};
use crate::reservation;
use league_model::{Amount, Category, Franchise, FranchiseId, LeagueRules, Player, PlayerId, Sale};
use tracing::info;

pub struct LeagueLedger {
    rules: LeagueRules,
    players: Vec<Player>,
    franchises: Vec<Franchise>,
}

impl LeagueLedger {
    pub fn new(rules: LeagueRules, players: Vec<Player>, franchises: Vec<Franchise>) -> Self {
        Self { rules, players, franchises }
    }

    pub fn rules(&self) -> &LeagueRules {
        &self.rules
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn franchises(&self) -> &[Franchise] {
        &self.franchises
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.iter().find(|p| p.id == id).ok_or(RosterError::PlayerNotFound(id))
    }

    pub fn franchise(&self, id: FranchiseId) -> Result<&Franchise> {
        self.franchises.iter().find(|f| f.id == id).ok_or(RosterError::FranchiseNotFound(id))
    }

    pub fn franchise_mut(&mut self, id: FranchiseId) -> Result<&mut Franchise> {
        self.franchises.iter_mut().find(|f| f.id == id).ok_or(RosterError::FranchiseNotFound(id))
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id).ok_or(RosterError::PlayerNotFound(id))
    }

    /// Players currently owned by a franchise
    pub fn roster_of(&self, franchise: FranchiseId) -> Vec<&Player> {
        self.players.iter().filter(|p| p.owner() == Some(franchise)).collect()
    }

    pub fn unsold_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_sold()).collect()
    }

    /// Owned count of one category for one franchise
    pub fn occupancy(&self, franchise: FranchiseId, category: Category) -> u8 {
        self.players
            .iter()
            .filter(|p| p.owner() == Some(franchise) && p.category == category)
            .count() as u8
    }

    /// Whether a franchise has room for one more player of a category
    pub fn has_quota_room(&self, franchise: FranchiseId, category: Category) -> bool {
        self.occupancy(franchise, category) < self.rules.quota(category)
    }

    /// Commit a sale. The caller is responsible for affordability and
    /// quota validation; a commit that would break an invariant is a
    /// programming error, not a runtime condition.
    pub fn sell(&mut self, player_id: PlayerId, franchise_id: FranchiseId, price: Amount) -> Result<()> {
        let category = self.player(player_id)?.category;
        self.franchise(franchise_id)?;

        assert!(
            self.occupancy(franchise_id, category) < self.rules.quota(category),
            "sell would exceed quota for {} in {}",
            franchise_id,
            category
        );

        let franchise = self.franchise_mut(franchise_id)?;
        let remaining = franchise.budget - price;
        assert!(!remaining.is_negative(), "sell would drive {} budget negative", franchise_id);
        franchise.budget = remaining;

        let player = self.player_mut(player_id)?;
        player.sale = Some(Sale { franchise: franchise_id, price });
        info!(player = %player_id, franchise = %franchise_id, %price, "sale committed");
        Ok(())
    }

    /// Clear a sale and refund the owning franchise
    pub fn release(&mut self, player_id: PlayerId) -> Result<()> {
        let sale = self.player(player_id)?.sale.ok_or(RosterError::NotOwned(player_id))?;

        self.player_mut(player_id)?.sale = None;
        let owner = self.franchise_mut(sale.franchise)?;
        owner.budget = owner.budget + sale.price;
        info!(player = %player_id, franchise = %sale.franchise, refund = %sale.price, "player released to pool");
        Ok(())
    }

    /// Reassign a sold player to another franchise at current valuation.
    /// Net zero to total league spend: destination debited, source credited.
    pub fn move_player(&mut self, player_id: PlayerId, to: FranchiseId) -> Result<()> {
        let player = self.player(player_id)?;
        let sale = player.sale.ok_or(RosterError::NotOwned(player_id))?;
        if sale.franchise == to {
            return Ok(());
        }

        let from = self.franchise(sale.franchise)?;
        if player.name.eq_ignore_ascii_case(&from.name) {
            return Err(RosterError::ImmovableOwner { player: player.name.clone() });
        }

        let dest = self.franchise(to)?;
        if !self.has_quota_room(to, player.category) {
            return Err(RosterError::QuotaExceeded {
                franchise: dest.name.clone(),
                category: player.category,
            });
        }
        if dest.budget < sale.price {
            return Err(RosterError::InsufficientBudget {
                required: sale.price,
                available: dest.budget,
            });
        }

        let dest = self.franchise_mut(to)?;
        dest.budget = dest.budget - sale.price;
        let source = self.franchise_mut(sale.franchise)?;
        source.budget = source.budget + sale.price;
        self.player_mut(player_id)?.sale = Some(Sale { franchise: to, price: sale.price });
        info!(player = %player_id, from = %sale.franchise, %to, valuation = %sale.price, "player moved");
        Ok(())
    }

    /// Change a sold player's valuation, re-validating the owner's
    /// reservation budget at the new price before commit.
    pub fn reprice(&mut self, player_id: PlayerId, new_price: Amount) -> Result<()> {
        let player = self.player(player_id)?;
        let sale = player.sale.ok_or(RosterError::NotOwned(player_id))?;
        let base = self.rules.base_price(player.category);
        if new_price < base {
            return Err(RosterError::BelowBasePrice { price: new_price, base });
        }

        // Budget as if the old price were refunded, then reserve floors
        // for every still-open slot. The player's own slot is already
        // occupied, so no category is excluded here.
        let budget_with_refund = self.franchise(sale.franchise)?.budget + sale.price;
        let reserve = reservation::reserve_floor(self, sale.franchise, None);
        if new_price > budget_with_refund - reserve {
            return Err(RosterError::InsufficientBudget {
                required: new_price,
                available: budget_with_refund - reserve,
            });
        }

        self.franchise_mut(sale.franchise)?.budget = budget_with_refund - new_price;
        self.player_mut(player_id)?.sale = Some(Sale { franchise: sale.franchise, price: new_price });
        info!(player = %player_id, franchise = %sale.franchise, %new_price, "valuation updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{initialize_season, FranchiseSeed, PlayerSeed};
    use league_model::PlayerRole;

    fn seed_franchise(name: &str) -> FranchiseSeed {
        FranchiseSeed { name: name.to_string(), color: "#004BA0".to_string(), icon: "lion".to_string() }
    }

    fn seed_player(name: &str, category: Category) -> PlayerSeed {
        PlayerSeed { name: name.to_string(), category, role: PlayerRole::Batter }
    }

    fn test_ledger() -> LeagueLedger {
        initialize_season(
            LeagueRules::default(),
            &[seed_franchise("Sagar"), seed_franchise("Harsh")],
            &[
                seed_player("Sagar", Category::APlus),
                seed_player("Yash", Category::APlus),
                seed_player("Khush", Category::APlus),
                seed_player("Arjun", Category::A),
                seed_player("Pranav", Category::C),
                seed_player("Vinit", Category::C),
            ],
        )
        .unwrap()
    }

    fn id_of(ledger: &LeagueLedger, name: &str) -> PlayerId {
        ledger.players().iter().find(|p| p.name == name).unwrap().id
    }

    fn fid_of(ledger: &LeagueLedger, name: &str) -> FranchiseId {
        ledger.franchises().iter().find(|f| f.name == name).unwrap().id
    }

    #[test]
    fn sell_debits_budget_and_marks_player() {
        let mut ledger = test_ledger();
        let yash = id_of(&ledger, "Yash");
        let harsh = fid_of(&ledger, "Harsh");
        let before = ledger.franchise(harsh).unwrap().budget;

        ledger.sell(yash, harsh, Amount::from_cents(750)).unwrap();

        let player = ledger.player(yash).unwrap();
        assert_eq!(player.owner(), Some(harsh));
        assert_eq!(player.valuation(), Amount::from_cents(750));
        assert_eq!(ledger.franchise(harsh).unwrap().budget, before - Amount::from_cents(750));
        assert_eq!(ledger.occupancy(harsh, Category::APlus), 2);
    }

    #[test]
    fn release_refunds_and_returns_to_pool() {
        let mut ledger = test_ledger();
        let yash = id_of(&ledger, "Yash");
        let harsh = fid_of(&ledger, "Harsh");
        let before = ledger.franchise(harsh).unwrap().budget;

        ledger.sell(yash, harsh, Amount::from_cents(750)).unwrap();
        ledger.release(yash).unwrap();

        assert!(!ledger.player(yash).unwrap().is_sold());
        assert_eq!(ledger.franchise(harsh).unwrap().budget, before);
    }

    #[test]
    fn release_of_unsold_player_is_rejected() {
        let mut ledger = test_ledger();
        let arjun = id_of(&ledger, "Arjun");
        assert_eq!(ledger.release(arjun), Err(RosterError::NotOwned(arjun)));
    }

    #[test]
    fn release_then_resell_restores_budget() {
        let mut ledger = test_ledger();
        let arjun = id_of(&ledger, "Arjun");
        let sagar = fid_of(&ledger, "Sagar");
        ledger.sell(arjun, sagar, Amount::from_cents(360)).unwrap();
        let committed = ledger.franchise(sagar).unwrap().budget;

        ledger.release(arjun).unwrap();
        ledger.sell(arjun, sagar, Amount::from_cents(360)).unwrap();
        assert_eq!(ledger.franchise(sagar).unwrap().budget, committed);
    }

    #[test]
    fn move_is_budget_neutral_for_the_league() {
        let mut ledger = test_ledger();
        let arjun = id_of(&ledger, "Arjun");
        let sagar = fid_of(&ledger, "Sagar");
        let harsh = fid_of(&ledger, "Harsh");
        ledger.sell(arjun, sagar, Amount::from_cents(390)).unwrap();

        let total_before: Amount =
            ledger.franchises().iter().map(|f| f.budget).sum();
        ledger.move_player(arjun, harsh).unwrap();
        let total_after: Amount = ledger.franchises().iter().map(|f| f.budget).sum();

        assert_eq!(total_before, total_after);
        assert_eq!(ledger.player(arjun).unwrap().owner(), Some(harsh));
    }

    #[test]
    fn owner_players_cannot_be_moved() {
        let mut ledger = test_ledger();
        // "Sagar" the player was auto-retained by the Sagar franchise.
        let owner = id_of(&ledger, "Sagar");
        let harsh = fid_of(&ledger, "Harsh");
        assert!(matches!(
            ledger.move_player(owner, harsh),
            Err(RosterError::ImmovableOwner { .. })
        ));
    }

    #[test]
    fn move_respects_destination_quota() {
        let mut ledger = test_ledger();
        let yash = id_of(&ledger, "Yash");
        let khush = id_of(&ledger, "Khush");
        let harsh = fid_of(&ledger, "Harsh");
        let sagar = fid_of(&ledger, "Sagar");
        // Sagar holds its A+ owner; Yash fills the second and last A+ slot.
        ledger.sell(yash, sagar, Amount::from_cents(500)).unwrap();
        assert_eq!(ledger.occupancy(sagar, Category::APlus), 2);

        ledger.sell(khush, harsh, Amount::from_cents(500)).unwrap();
        assert!(matches!(
            ledger.move_player(khush, sagar),
            Err(RosterError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn reprice_validates_base_and_reservation() {
        let mut ledger = test_ledger();
        let arjun = id_of(&ledger, "Arjun");
        let sagar = fid_of(&ledger, "Sagar");
        ledger.sell(arjun, sagar, Amount::from_cents(300)).unwrap();

        assert!(matches!(
            ledger.reprice(arjun, Amount::from_cents(200)),
            Err(RosterError::BelowBasePrice { .. })
        ));

        // Absurdly high valuation must trip the reservation check.
        assert!(matches!(
            ledger.reprice(arjun, Amount::from_lakhs(49)),
            Err(RosterError::InsufficientBudget { .. })
        ));

        let before = ledger.franchise(sagar).unwrap().budget;
        ledger.reprice(arjun, Amount::from_cents(390)).unwrap();
        assert_eq!(ledger.player(arjun).unwrap().valuation(), Amount::from_cents(390));
        assert_eq!(
            ledger.franchise(sagar).unwrap().budget,
            before + Amount::from_cents(300) - Amount::from_cents(390)
        );
    }

    #[test]
    fn budget_plus_roster_spend_equals_starting_budget() {
        let mut ledger = test_ledger();
        let arjun = id_of(&ledger, "Arjun");
        let pranav = id_of(&ledger, "Pranav");
        let sagar = fid_of(&ledger, "Sagar");
        ledger.sell(arjun, sagar, Amount::from_cents(330)).unwrap();
        ledger.sell(pranav, sagar, Amount::from_cents(110)).unwrap();

        for franchise in ledger.franchises() {
            let spent: Amount =
                ledger.roster_of(franchise.id).iter().map(|p| p.valuation()).sum();
            assert_eq!(franchise.budget + spent, ledger.rules().starting_budget);
        }
    }
}
