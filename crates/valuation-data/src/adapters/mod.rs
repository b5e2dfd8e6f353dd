//! Vendor adapters.
//!
//! Each adapter turns structured requests for one market into cache keys,
//! consults the store it is handed, and calls its raw loader on a miss.

mod ercot;
mod isone;
mod miso;
mod pjm;

#[cfg(test)]
pub(crate) mod mock;

pub use ercot::ErcotAdapter;
pub use isone::IsoneAdapter;
pub use miso::MisoAdapter;
pub use pjm::PjmAdapter;

use std::path::Path;

/// Render a path as a key component.
pub(crate) fn path_component(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
