//! Core types and traits for valuation market data.
//!
//! This crate provides the foundational building blocks including:
//! - Cache keys and the cached series type
//! - Per-market month bundles (ERCOT, PJM, MISO, ISO-NE)
//! - Raw loader traits for each data vendor
//! - The node-name lookup interface

pub mod types;
pub mod traits;
pub mod error;

pub use error::{ValuationError, ValuationResult};
pub use types::*;
pub use traits::*;
