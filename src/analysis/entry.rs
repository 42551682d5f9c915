use super::round_up_cent;
use crate::model::{Leg, OptionType, Position};

/// Which side of the quote a leg's opening premium is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PremiumBasis {
    /// Calls at the ask, puts at the bid, regardless of position.
    #[default]
    CallAskPutBid,
    /// Long legs pay the ask, short legs receive the bid.
    CrossSpread,
}

impl PremiumBasis {
    #[inline]
    pub fn premium(self, leg: &Leg) -> f64 {
        match self {
            Self::CallAskPutBid => match leg.kind {
                OptionType::Call => leg.ask,
                OptionType::Put => leg.bid,
            },
            Self::CrossSpread => match leg.position {
                Position::Long => leg.ask,
                Position::Short => leg.bid,
            },
        }
    }
}

impl std::str::FromStr for PremiumBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call_ask_put_bid" => Ok(Self::CallAskPutBid),
            "cross_spread" => Ok(Self::CrossSpread),
            other => Err(format!(
                "unknown premium basis {other:?} (expected call_ask_put_bid or cross_spread)"
            )),
        }
    }
}

impl std::fmt::Display for PremiumBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CallAskPutBid => write!(f, "call_ask_put_bid"),
            Self::CrossSpread => write!(f, "cross_spread"),
        }
    }
}

/// Net premium to open the position: positive is a debit, negative a credit.
/// Rounded up to the cent. An empty slice costs nothing.
pub fn entry_cost(legs: &[Leg], basis: PremiumBasis) -> f64 {
    let mut cost = 0.0;
    for leg in legs {
        cost += leg.position.sign() * basis.premium(leg);
    }
    round_up_cent(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(kind: OptionType, position: Position, bid: f64, ask: f64) -> Leg {
        Leg { kind, position, strike: 100.0, bid, ask }
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(entry_cost(&[], PremiumBasis::CallAskPutBid), 0.0);
        assert_eq!(entry_cost(&[], PremiumBasis::CrossSpread), 0.0);
    }

    #[test]
    fn test_call_ask_put_bid() {
        let basis = PremiumBasis::CallAskPutBid;
        assert_eq!(entry_cost(&[leg(OptionType::Call, Position::Long, 10.0, 12.0)], basis), 12.0);
        assert_eq!(entry_cost(&[leg(OptionType::Put, Position::Long, 8.0, 10.0)], basis), 8.0);
        assert_eq!(entry_cost(&[leg(OptionType::Call, Position::Short, 10.0, 12.0)], basis), -12.0);
        assert_eq!(entry_cost(&[leg(OptionType::Put, Position::Short, 7.0, 9.0)], basis), -7.0);
    }

    #[test]
    fn test_cross_spread() {
        let basis = PremiumBasis::CrossSpread;
        assert_eq!(entry_cost(&[leg(OptionType::Put, Position::Long, 8.0, 10.0)], basis), 10.0);
        assert_eq!(entry_cost(&[leg(OptionType::Call, Position::Short, 10.0, 12.0)], basis), -10.0);
    }

    #[test]
    fn test_credit_can_make_cost_negative() {
        let legs = [
            leg(OptionType::Call, Position::Long, 10.0, 12.0),
            leg(OptionType::Put, Position::Short, 15.0, 16.0),
        ];
        assert_eq!(entry_cost(&legs, PremiumBasis::CallAskPutBid), -3.0);
    }

    #[test]
    fn test_rounds_up_to_cent() {
        let legs = [leg(OptionType::Call, Position::Long, 0.0, 1.2345)];
        assert_eq!(entry_cost(&legs, PremiumBasis::CallAskPutBid), 1.24);

        let legs = [leg(OptionType::Call, Position::Short, 0.0, 1.2345)];
        assert_eq!(entry_cost(&legs, PremiumBasis::CallAskPutBid), -1.23);
    }

    #[test]
    fn test_parse_basis() {
        assert_eq!("cross_spread".parse::<PremiumBasis>(), Ok(PremiumBasis::CrossSpread));
        assert_eq!(" Call_Ask_Put_Bid ".parse::<PremiumBasis>(), Ok(PremiumBasis::CallAskPutBid));
        assert!("mid".parse::<PremiumBasis>().is_err());
        assert_eq!(PremiumBasis::CrossSpread.to_string(), "cross_spread");
    }
}
