//! MISO LMP and regulation market clearing prices.

use std::path::{Path, PathBuf};
use tracing::info;
use valuation_core::error::DataError;
use valuation_core::traits::MisoLoader;
use valuation_core::types::{CacheKey, Market, MisoMonth, TimeSeries};

use super::path_component;
use crate::SeriesStore;

/// Adapter for MISO market data.
pub struct MisoAdapter {
    root: PathBuf,
    loader: Box<dyn MisoLoader>,
}

impl MisoAdapter {
    /// Create an adapter rooted at `<home>/MISO`.
    pub fn new(home: &Path, loader: Box<dyn MisoLoader>) -> Self {
        Self {
            root: home.join(Market::Miso.dir_name()),
            loader,
        }
    }

    /// Root directory of the MISO data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get day-ahead LMP and RegMCP for one month and node.
    pub fn month(
        &self,
        store: &mut SeriesStore,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<MisoMonth, DataError> {
        info!("DMS: Loading MISO data for {}-{} node {}", year, month, node);

        let root = path_component(&self.root);
        let year_s = year.to_string();
        let month_s = month.to_string();

        let keys = [
            CacheKey::join([
                root.as_str(),
                year_s.as_str(),
                month_s.as_str(),
                node,
                "LMP",
            ]),
            CacheKey::join([root.as_str(), year_s.as_str(), month_s.as_str(), "MCP"]),
        ];

        let [lmp_da, reg_mcp] = store.get_or_load_all(&keys, || {
            let data = self.loader.read_month(&self.root, year, month, node)?;
            Ok::<_, DataError>([data.lmp_da, data.reg_mcp])
        })?;

        Ok(MisoMonth { lmp_da, reg_mcp })
    }

    /// Get a day-ahead LMP series keyed by its selector components.
    #[deprecated(note = "use `MisoAdapter::month`")]
    pub fn lmp(&self, store: &mut SeriesStore, args: &[&str]) -> Result<TimeSeries, DataError> {
        info!("DMS: Loading MISO DA-LMP");
        store.get_or_load(&CacheKey::join(args), || {
            self.loader.read_da_lmp(args).map_err(DataError::from)
        })
    }

    /// Get the RegMCP series keyed by its selector components.
    #[deprecated(note = "use `MisoAdapter::month`")]
    pub fn reg_price(
        &self,
        store: &mut SeriesStore,
        args: &[&str],
    ) -> Result<TimeSeries, DataError> {
        info!("DMS: Loading MISO RegMCP");
        store.get_or_load(&CacheKey::join(args), || {
            self.loader.read_reg_price(args).map_err(DataError::from)
        })
    }
}
