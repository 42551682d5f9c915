pub mod analysis;
pub mod contract;

pub use analysis::{Analysis, CurvePoint};
pub use contract::{Leg, OptionType, OptionsContract, Position};
