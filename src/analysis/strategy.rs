use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::model::Leg;
use smallvec::SmallVec;

/// Largest strategy the engine accepts.
pub const MAX_LEGS: usize = 4;

/// Reject strategies with no legs or more than `MAX_LEGS`.
pub fn check_leg_count(n: usize) -> AnalyzerResult<()> {
    if n > MAX_LEGS {
        return Err(AnalyzerError::InvalidRequest(format!(
            "only accepting at most {MAX_LEGS} options contracts"
        )));
    }
    if n == 0 {
        return Err(AnalyzerError::InvalidRequest(
            "need at least one options contracts".into(),
        ));
    }
    Ok(())
}

/// 1-4 legs sorted ascending by strike. Equal strikes keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy {
    legs: SmallVec<[Leg; MAX_LEGS]>,
}

impl Strategy {
    pub fn new<I: IntoIterator<Item = Leg>>(legs: I) -> AnalyzerResult<Self> {
        let mut legs: SmallVec<[Leg; MAX_LEGS]> = legs.into_iter().collect();
        check_leg_count(legs.len())?;

        // slice::sort_by is stable
        legs.sort_by(|a, b| a.strike.total_cmp(&b.strike));
        Ok(Self { legs })
    }

    #[inline]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    #[inline]
    pub fn min_strike(&self) -> f64 {
        self.legs[0].strike
    }

    #[inline]
    pub fn max_strike(&self) -> f64 {
        self.legs[self.legs.len() - 1].strike
    }

    /// Consecutive pairs of distinct strikes, i.e. the bounded linear segments
    /// of the payoff.
    pub fn segments(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.legs
            .windows(2)
            .map(|w| (w[0].strike, w[1].strike))
            .filter(|(a, b)| a < b)
    }
}
