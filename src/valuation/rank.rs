use tracing::warn;

use crate::format::format_two_decimals;
use crate::models::{Holding, PriceSnapshot, RankedHolding};
use crate::priority::PriorityRule;

/// Filter, order and value holdings for display.
///
/// Holdings whose chain priority is at or below the rule's threshold, or whose
/// quantity is not positive, are dropped. Survivors are ordered by priority,
/// highest first; equal priorities keep their input order. A symbol missing
/// from `prices` is valued at zero.
///
/// Malformed holdings (empty symbol, non-finite quantity) are skipped with a
/// warning rather than failing the whole pass.
pub fn rank(holdings: &[Holding], prices: &PriceSnapshot, rule: &PriorityRule) -> Vec<RankedHolding> {
    let mut kept: Vec<(i32, &Holding)> = holdings
        .iter()
        .filter_map(|holding| {
            if let Err(err) = holding.validate() {
                warn!(symbol = %holding.symbol(), error = %err, "skipping malformed holding");
                return None;
            }
            let priority = rule.priority(holding.chain_tag());
            if rule.is_excluded(priority) || holding.quantity() <= 0.0 {
                return None;
            }
            Some((priority, holding))
        })
        .collect();

    // `sort_by` is stable.
    kept.sort_by(|a, b| b.0.cmp(&a.0));

    kept.into_iter()
        .map(|(priority, holding)| value_holding(holding, priority, prices))
        .collect()
}

fn value_holding(holding: &Holding, priority: i32, prices: &PriceSnapshot) -> RankedHolding {
    let usd_value = prices.get(holding.symbol()).unwrap_or(0.0) * holding.quantity();
    RankedHolding {
        symbol: holding.symbol().to_string(),
        quantity: holding.quantity(),
        chain_tag: holding.chain_tag().to_string(),
        priority,
        usd_value,
        formatted_quantity: format_two_decimals(holding.quantity()),
        formatted_usd_value: format_two_decimals(usd_value),
    }
}

/// Sum of `usd_value` across ranked rows.
pub fn total_usd_value(ranked: &[RankedHolding]) -> f64 {
    ranked.iter().map(|row| row.usd_value).sum()
}
