//! Data management for energy storage valuation.
//!
//! [`DataManagementSystem`] is the generic cache engine: a key/value store
//! persisted to one file, with lookups that load each missing dataset at
//! most once. [`ValuationDms`] specializes it for market series and routes
//! requests through one adapter per market.

pub mod adapters;
mod dms;
mod export;
mod nodes;
mod scan;
mod store;

pub use dms::{ValuationDms, ValuationDmsBuilder, DEFAULT_NODES_FILE};
pub use export::write_series_csv;
pub use nodes::{NodeDescriptor, NodeDirectory};
pub use scan::first_with_extension;
pub use store::DataManagementSystem;

use valuation_core::types::TimeSeries;

/// Store of market time series, keyed by cache key.
pub type SeriesStore = DataManagementSystem<TimeSeries>;
