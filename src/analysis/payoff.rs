use super::{round_up_cent, SHARES_PER_CONTRACT};
use crate::model::{Leg, OptionType};

/// Exercise value of one leg at `price`, ignoring position and premium.
#[inline]
pub fn intrinsic(leg: &Leg, price: f64) -> f64 {
    match leg.kind {
        OptionType::Call => (price - leg.strike).max(0.0),
        OptionType::Put => (leg.strike - price).max(0.0),
    }
}

/// Profit/loss per unit of underlying at expiry.
///
/// Piecewise-linear in `price` with kinks only at the strikes. Used by the
/// break-even and extremum searches, which reason about exact zeros and signs,
/// so it is not rounded.
#[inline]
pub fn unit_payoff(legs: &[Leg], entry: f64, price: f64) -> f64 {
    let mut pl = -entry;
    for leg in legs {
        pl += leg.position.sign() * intrinsic(leg, price);
    }
    pl
}

/// Profit/loss for one contract (100 shares), rounded up to the cent.
#[inline]
pub fn contract_payoff(legs: &[Leg], entry: f64, price: f64) -> f64 {
    round_up_cent(unit_payoff(legs, entry, price) * SHARES_PER_CONTRACT)
}
