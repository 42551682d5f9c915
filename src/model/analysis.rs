use crate::analysis::extremum::Extremum;
use serde::Serialize;
use smallvec::SmallVec;

/// One sample of the risk/reward chart, in per-100-shares terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub underlying_price: f64,
    pub profit_loss: f64,
}

/// Response body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub risk_reward_graph: Vec<CurvePoint>,
    pub max_profit: Extremum,
    pub max_loss: Extremum,
    pub break_even_points: SmallVec<[f64; 8]>,
}
