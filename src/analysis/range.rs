use super::payoff::contract_payoff;
use super::strategy::Strategy;
use super::{CURVE_STEPS, RANGE_BUFFER_FLOOR, RANGE_BUFFER_RATIO};
use crate::model::CurvePoint;

/// Underlying price window charted for a strategy. Stack-allocated, Copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    #[inline]
    pub fn step(&self) -> f64 {
        (self.max - self.min) / CURVE_STEPS as f64
    }
}

/// Strikes plus a buffer of 20% of the spread (never less than 20) on each
/// side, clamped at zero.
pub fn price_range(strategy: &Strategy) -> PriceRange {
    let min_strike = strategy.min_strike();
    let max_strike = strategy.max_strike();
    let spread = max_strike - min_strike;
    let buffer = (spread * RANGE_BUFFER_RATIO).max(RANGE_BUFFER_FLOOR);

    PriceRange {
        min: (min_strike - buffer).max(0.0),
        max: max_strike + buffer,
    }
}

/// Per-contract P/L sampled across `range`.
///
/// Prices are accumulated step by step rather than computed as `min + i*step`.
/// The sample at `max` is only emitted when the running sum does not overshoot
/// it, so callers see either 30 or 31 points. At magnitudes where `step` is
/// below the float spacing the sum stops advancing and sampling ends early.
pub fn sample_curve(strategy: &Strategy, entry: f64, range: PriceRange) -> Vec<CurvePoint> {
    let legs = strategy.legs();
    let step = range.step();

    if !step.is_finite() || step <= 0.0 {
        return vec![CurvePoint {
            underlying_price: range.min,
            profit_loss: contract_payoff(legs, entry, range.min),
        }];
    }

    let mut curve = Vec::with_capacity(CURVE_STEPS + 1);
    let mut price = range.min;
    for _ in 0..=CURVE_STEPS {
        if price > range.max {
            break;
        }
        curve.push(CurvePoint {
            underlying_price: price,
            profit_loss: contract_payoff(legs, entry, price),
        });

        let next = price + step;
        if next <= price {
            break;
        }
        price = next;
    }
    curve
}
