//! Break-even search.
//!
//! The payoff is linear outside the strikes and between consecutive strikes,
//! so roots are found in three places:
//!
//!   left tail   (x <= min strike): only puts carry slope,
//!                 x = (sum_put - entry) / count_put
//!   interior    (each strike segment): exact zero at an endpoint, or
//!                 bisection when the endpoint values change sign
//!   right tail  (x > max strike): only calls carry slope,
//!                 x = (sum_call + entry) / count_call
//!
//! where sum/count are signed (+ long, - short). A tail is only solved when
//! its net count is positive.

use super::payoff::unit_payoff;
use super::strategy::Strategy;
use super::{round_up_cent, BISECTION_TOLERANCE};
use crate::model::{Leg, OptionType, Position};
use smallvec::SmallVec;

/// Signed strike sum and leg count for one option type. Stack-allocated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct TailSlope {
    sum: f64,
    count: i32,
}

fn tail_slope(legs: &[Leg], kind: OptionType) -> TailSlope {
    let mut t = TailSlope::default();
    for leg in legs.iter().filter(|l| l.kind == kind) {
        match leg.position {
            Position::Long => {
                t.sum += leg.strike;
                t.count += 1;
            }
            Position::Short => {
                t.sum -= leg.strike;
                t.count -= 1;
            }
        }
    }
    t
}

/// All break-even prices: left tail, then interior segments in strike order,
/// then right tail. Duplicates are not removed.
pub fn break_evens(strategy: &Strategy, entry: f64) -> SmallVec<[f64; 8]> {
    let legs = strategy.legs();
    let mut points = SmallVec::new();

    if let Some(x) = left_tail(legs, entry, strategy.min_strike()) {
        points.push(x);
    }

    for (x1, x2) in strategy.segments() {
        let pl1 = unit_payoff(legs, entry, x1);
        let pl2 = unit_payoff(legs, entry, x2);

        if pl1 == 0.0 {
            points.push(x1);
        }
        if pl2 == 0.0 {
            points.push(x2);
        }
        if (pl1 < 0.0 && pl2 > 0.0) || (pl1 > 0.0 && pl2 < 0.0) {
            points.push(round_up_cent(bisect(legs, entry, x1, x2)));
        }
    }

    if let Some(x) = right_tail(legs, entry, strategy.max_strike()) {
        points.push(x);
    }

    points
}

fn left_tail(legs: &[Leg], entry: f64, min_strike: f64) -> Option<f64> {
    let puts = tail_slope(legs, OptionType::Put);
    if puts.count <= 0 {
        return None;
    }
    let x = (puts.sum - entry) / puts.count as f64;
    (x <= min_strike).then(|| round_up_cent(x))
}

fn right_tail(legs: &[Leg], entry: f64, max_strike: f64) -> Option<f64> {
    let calls = tail_slope(legs, OptionType::Call);
    if calls.count <= 0 {
        return None;
    }
    let x = (calls.sum + entry) / calls.count as f64;
    (x > max_strike).then(|| round_up_cent(x))
}

/// Root of the payoff on `[a, b]`, which must bracket a sign change.
///
/// Each round keeps the half whose left end still disagrees in sign with the
/// midpoint; the sign at `b` is never re-evaluated. Stops early once `a` and
/// `b` are adjacent floats, which happens for very large strikes.
pub fn bisect(legs: &[Leg], entry: f64, mut a: f64, mut b: f64) -> f64 {
    while (b - a) / 2.0 > BISECTION_TOLERANCE {
        let mid = (a + b) / 2.0;
        if mid <= a || mid >= b {
            break;
        }
        let pl_mid = unit_payoff(legs, entry, mid);

        if pl_mid.abs() <= BISECTION_TOLERANCE {
            return mid;
        }

        let pl_a = unit_payoff(legs, entry, a);
        if (pl_mid > 0.0 && pl_a < 0.0) || (pl_mid < 0.0 && pl_a > 0.0) {
            b = mid;
        } else {
            a = mid;
        }
    }
    (a + b) / 2.0
}
