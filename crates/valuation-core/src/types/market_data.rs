//! Fixed-shape month bundles returned for each market.

use serde::{Deserialize, Serialize};

use super::TimeSeries;

/// ERCOT day-ahead settlement point prices and regulation capacity prices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErcotMonth {
    /// Day-ahead settlement point price
    pub spp_da: TimeSeries,
    /// Regulation down clearing price
    pub reg_down: TimeSeries,
    /// Regulation up clearing price
    pub reg_up: TimeSeries,
}

/// PJM day-ahead LMP, mileage factors and regulation clearing prices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PjmMonth {
    /// Day-ahead locational marginal price
    pub lmp_da: TimeSeries,
    /// Mileage ratio
    pub mileage_ratio: TimeSeries,
    /// Regulation-up mileage
    pub mileage_up: TimeSeries,
    /// Regulation-down mileage
    pub mileage_down: TimeSeries,
    /// Regulation capability clearing price
    pub reg_ccp: TimeSeries,
    /// Regulation performance clearing price
    pub reg_pcp: TimeSeries,
}

/// MISO day-ahead LMP and regulation market clearing price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MisoMonth {
    pub lmp_da: TimeSeries,
    pub reg_mcp: TimeSeries,
}

/// ISO-NE day-ahead LMP and regulation clearing prices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IsoneMonth {
    pub lmp_da: TimeSeries,
    pub reg_ccp: TimeSeries,
    pub reg_pcp: TimeSeries,
}
