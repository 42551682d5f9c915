use super::payoff::unit_payoff;
use super::strategy::Strategy;
use super::{round_up_cent, FAR_PROBE_OFFSET};
use serde::{Serialize, Serializer};

/// Far probes must beat the running extreme by more than this to count as a
/// sloped tail. Absorbs the last-bit drift of `(K + 1000) - K`.
const PROBE_EPSILON: f64 = 1e-6;

/// Maximum profit or loss: a finite figure or an unbounded tail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extremum {
    Finite(f64),
    UnboundedPositive,
    UnboundedNegative,
}

impl Extremum {
    /// Multiply a finite value by `factor` and round it up to the cent.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        match self {
            Self::Finite(v) => Self::Finite(round_up_cent(v * factor)),
            other => other,
        }
    }
}

impl std::fmt::Display for Extremum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // -0.0 would print as "-0.00"
            Self::Finite(v) if *v == 0.0 => write!(f, "0.00"),
            Self::Finite(v) => write!(f, "{v:.2}"),
            Self::UnboundedPositive => write!(f, "+Inf"),
            Self::UnboundedNegative => write!(f, "-Inf"),
        }
    }
}

impl Serialize for Extremum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Maximum profit and maximum loss per unit of underlying.
///
/// Between and beyond the strikes the payoff is linear, so finite extremes sit
/// on a strike; segment midpoints are checked as well. Two probes
/// `FAR_PROBE_OFFSET` either side of the last strike read the tail slopes: a
/// probe above every candidate means profit is unbounded, below every
/// candidate means loss is unbounded.
pub fn max_profit_and_loss(strategy: &Strategy, entry: f64) -> (Extremum, Extremum) {
    let legs = strategy.legs();

    let candidates = legs
        .iter()
        .map(|l| l.strike)
        .chain(strategy.segments().map(|(a, b)| (a + b) / 2.0));

    let (max_profit, max_loss) = candidates
        .map(|price| unit_payoff(legs, entry, price))
        .fold((f64::NEG_INFINITY, f64::INFINITY), |(hi, lo), pl| (hi.max(pl), lo.min(pl)));

    let last = strategy.max_strike();
    let mut unbounded_profit = false;
    let mut unbounded_loss = false;
    for probe in [last + FAR_PROBE_OFFSET, last - FAR_PROBE_OFFSET] {
        let pl = unit_payoff(legs, entry, probe);
        unbounded_profit |= pl > max_profit + PROBE_EPSILON;
        unbounded_loss |= pl < max_loss - PROBE_EPSILON;
    }

    let profit = if unbounded_profit {
        Extremum::UnboundedPositive
    } else {
        Extremum::Finite(max_profit)
    };
    let loss = if unbounded_loss {
        Extremum::UnboundedNegative
    } else {
        Extremum::Finite(max_loss)
    };
    (profit, loss)
}
