//! Core traits for valuation data management.

mod loader;
mod node_names;

pub use loader::{ErcotLoader, IsoneLoader, MisoLoader, PjmLoader};
pub use node_names::{IdentityNodeNames, NodeNameLookup};
