pub mod break_even;
pub mod entry;
pub mod extremum;
pub mod payoff;
pub mod range;
pub mod strategy;

use crate::errors::AnalyzerResult;
use crate::model::{Analysis, Leg};
use entry::PremiumBasis;
use strategy::Strategy;

/// Shares controlled by one option contract.
pub const SHARES_PER_CONTRACT: f64 = 100.0;

/// Bisection stops once the half-width or |payoff| drops below this.
pub const BISECTION_TOLERANCE: f64 = 1e-3;

/// Distance from the last strike used to probe the linear tails.
pub const FAR_PROBE_OFFSET: f64 = 1000.0;

/// Number of equal steps across the charted price range.
pub const CURVE_STEPS: usize = 30;

/// Minimum margin kept on either side of the strikes when charting.
pub const RANGE_BUFFER_FLOOR: f64 = 20.0;

/// Margin as a fraction of the strike spread.
pub const RANGE_BUFFER_RATIO: f64 = 0.20;

/// Round up to the next cent: `ceil(x * 100) / 100`, never half-even.
/// Negative zero is folded into zero so it never renders as `-0`.
#[inline]
pub fn round_up_cent(x: f64) -> f64 {
    let r = (x * 100.0).ceil() / 100.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Run the full risk/reward analysis for 1-4 legs.
///
/// Pure: no shared state is read or written, so concurrent requests need no
/// coordination. Fails only when the leg count is out of range.
pub fn analyze(legs: &[Leg], basis: PremiumBasis) -> AnalyzerResult<Analysis> {
    let strategy = Strategy::new(legs.iter().copied())?;

    let entry = entry::entry_cost(strategy.legs(), basis);

    let price_range = range::price_range(&strategy);
    let risk_reward_graph = range::sample_curve(&strategy, entry, price_range);

    let break_even_points = break_even::break_evens(&strategy, entry);
    let (max_profit, max_loss) = extremum::max_profit_and_loss(&strategy, entry);

    tracing::debug!(
        legs = strategy.legs().len(),
        entry_cost = entry,
        range_min = price_range.min,
        range_max = price_range.max,
        break_evens = break_even_points.len(),
        %max_profit,
        %max_loss,
        "strategy analyzed"
    );

    Ok(Analysis {
        risk_reward_graph,
        max_profit: max_profit.scaled(SHARES_PER_CONTRACT),
        max_loss: max_loss.scaled(SHARES_PER_CONTRACT),
        break_even_points,
    })
}
