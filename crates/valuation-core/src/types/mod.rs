//! Core data types for valuation market data.

mod key;
mod market;
mod market_data;
mod series;

pub use key::{CacheKey, DELIMITER};
pub use market::Market;
pub use market_data::{ErcotMonth, IsoneMonth, MisoMonth, PjmMonth};
pub use series::TimeSeries;
