//! Portfolio export: flat tabular snapshot of every franchise's squad
//!
//! A reporting format, not a protocol. One row per owned player plus a
//! remaining-budget row per franchise, produced on demand.

use crate::ledger::LeagueLedger;

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render the portfolio snapshot as CSV text.
pub fn portfolio_csv(ledger: &LeagueLedger) -> String {
    let mut out = String::from("Franchise,Player,Category,Valuation (L)\n");
    for franchise in ledger.franchises() {
        for player in ledger.roster_of(franchise.id) {
            out.push_str(&format!(
                "{},{},{},{}\n",
                csv_quote(&franchise.name),
                csv_quote(&player.name),
                csv_quote(player.category.code()),
                csv_quote(&format!("{:.2}", player.valuation().to_decimal())),
            ));
        }
        out.push_str(&format!(
            "{},{},{},{}\n\n",
            csv_quote(&franchise.name),
            csv_quote("[REMAINING BUDGET]"),
            csv_quote("-"),
            csv_quote(&format!("{:.2}", franchise.budget.to_decimal())),
        ));
    }
    out
}
