//! ISO-NE LMP and regulation clearing prices.

use std::path::{Path, PathBuf};
use tracing::info;
use valuation_core::error::DataError;
use valuation_core::traits::IsoneLoader;
use valuation_core::types::{CacheKey, IsoneMonth, Market};

use super::path_component;
use crate::SeriesStore;

/// Adapter for ISO-NE market data.
pub struct IsoneAdapter {
    root: PathBuf,
    loader: Box<dyn IsoneLoader>,
}

impl IsoneAdapter {
    /// Create an adapter rooted at `<home>/ISONE`.
    pub fn new(home: &Path, loader: Box<dyn IsoneLoader>) -> Self {
        Self {
            root: home.join(Market::Isone.dir_name()),
            loader,
        }
    }

    /// Root directory of the ISO-NE data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get day-ahead LMP and regulation prices for one month and node.
    pub fn month(
        &self,
        store: &mut SeriesStore,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<IsoneMonth, DataError> {
        info!("DMS: Loading ISO-NE LMP and regulation prices");

        let root = path_component(&self.root);
        let year_s = year.to_string();
        let month_s = month.to_string();
        let month_key =
            |tag: &str| CacheKey::join([root.as_str(), year_s.as_str(), month_s.as_str(), tag]);

        let keys = [
            CacheKey::join([
                root.as_str(),
                year_s.as_str(),
                month_s.as_str(),
                node,
                "LMP",
            ]),
            month_key("RegCCP"),
            month_key("RegPCP"),
        ];

        let [lmp_da, reg_ccp, reg_pcp] = store.get_or_load_all(&keys, || {
            let data = self.loader.read_month(&self.root, year, month, node)?;
            Ok::<_, DataError>([data.lmp_da, data.reg_ccp, data.reg_pcp])
        })?;

        Ok(IsoneMonth {
            lmp_da,
            reg_ccp,
            reg_pcp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{series, MockLoader};

    #[test]
    fn test_cold_start_then_hit() {
        let loader = MockLoader::new();
        let adapter = IsoneAdapter::new(Path::new("data"), Box::new(loader.clone()));
        let mut store = SeriesStore::in_memory();

        let first = adapter.month(&mut store, 2016, 1, "4004").unwrap();
        let second = adapter.month(&mut store, 2016, 1, "4004").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.reg_pcp, series(32.0));
        assert_eq!(loader.call_count(), 1);
        assert_eq!(store.len(), 3);

        let root = path_component(adapter.root());
        assert!(store.contains(&CacheKey::join([root.as_str(), "2016", "1", "4004", "LMP"])));
        assert!(store.contains(&CacheKey::join([root.as_str(), "2016", "1", "RegCCP"])));
        assert!(store.contains(&CacheKey::join([root.as_str(), "2016", "1", "RegPCP"])));
    }

    #[test]
    fn test_new_node_reloads_shared_regulation_series() {
        let loader = MockLoader::new();
        let adapter = IsoneAdapter::new(Path::new("data"), Box::new(loader.clone()));
        let mut store = SeriesStore::in_memory();

        adapter.month(&mut store, 2016, 1, "4004").unwrap();
        adapter.month(&mut store, 2016, 1, "4005").unwrap();

        assert_eq!(loader.call_count(), 2);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_loader_error_passes_through() {
        let adapter = IsoneAdapter::new(Path::new("data"), Box::new(MockLoader::failing()));
        let mut store = SeriesStore::in_memory();

        let err = adapter.month(&mut store, 2016, 1, "4004").unwrap_err();

        assert!(err.to_string().starts_with("Parse error in isone.month("));
        assert!(store.is_empty());
    }
}
