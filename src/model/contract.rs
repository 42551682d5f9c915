use crate::errors::{AnalyzerError, AnalyzerResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Leg enums ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Long,
    Short,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

impl Position {
    /// +1 for long, -1 for short.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Self::Long => 1.0,
            Self::Short => -1.0,
        }
    }
}

// ── Engine leg (stack-allocated, Copy) ──

/// One option position as seen by the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub kind: OptionType,
    pub position: Position,
    pub strike: f64,
    pub bid: f64,
    pub ask: f64,
}

// ── Wire contract ──

/// A contract as it arrives in the `/analyze` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsContract {
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub long_short: Position,
    pub strike_price: f64,
    pub bid: f64,
    pub ask: f64,
    pub expiration_date: DateTime<Utc>,
}

impl OptionsContract {
    /// Field sanity checks. The first failing field wins.
    pub fn validate(&self, now: DateTime<Utc>) -> AnalyzerResult<()> {
        if !self.strike_price.is_finite() || self.strike_price <= 0.0 {
            return Err(invalid("strike price must be greater than zero"));
        }
        if !self.bid.is_finite() || self.bid < 0.0 {
            return Err(invalid("bid must be non-negative"));
        }
        if !self.ask.is_finite() || self.ask < 0.0 {
            return Err(invalid("ask must be non-negative"));
        }
        if self.expiration_date <= now {
            return Err(invalid("expiration date must be in the future"));
        }
        Ok(())
    }

    #[inline]
    pub fn leg(&self) -> Leg {
        Leg {
            kind: self.option_type,
            position: self.long_short,
            strike: self.strike_price,
            bid: self.bid,
            ask: self.ask,
        }
    }
}

fn invalid(msg: &str) -> AnalyzerError {
    AnalyzerError::InvalidContract(msg.to_string())
}
