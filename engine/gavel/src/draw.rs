//! Draw order for the open pool
//!
//! An administrative convenience, not a game rule: a configured
//! priority ("marquee") name list is drawn first in list order; once
//! it is exhausted the remaining unsold players are drawn uniformly at
//! random.

use league_model::PlayerId;
use rand::seq::SliceRandom;
use rand::Rng;
use roster_service::LeagueLedger;

#[derive(Debug, Clone, Default)]
pub struct DrawOrder {
    marquee: Vec<String>,
}

impl DrawOrder {
    pub fn new(marquee: Vec<String>) -> Self {
        Self { marquee }
    }

    /// Pick the next player to put under the hammer, or `None` when the
    /// pool is empty.
    pub fn next_player<R: Rng + ?Sized>(
        &self,
        ledger: &LeagueLedger,
        rng: &mut R,
    ) -> Option<PlayerId> {
        let unsold = ledger.unsold_players();
        if unsold.is_empty() {
            return None;
        }

        for name in &self.marquee {
            if let Some(player) =
                unsold.iter().find(|p| p.name.eq_ignore_ascii_case(name))
            {
                return Some(player.id);
            }
        }
        unsold.choose(rng).map(|p| p.id)
    }
}
