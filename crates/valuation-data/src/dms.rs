//! Valuation data management facade.

use std::path::{Path, PathBuf};
use tracing::info;
use valuation_core::error::{DataError, LoaderError, ValuationResult};
use valuation_core::traits::{
    ErcotLoader, IdentityNodeNames, IsoneLoader, MisoLoader, NodeNameLookup, PjmLoader,
};
use valuation_core::types::{
    CacheKey, ErcotMonth, IsoneMonth, Market, MisoMonth, PjmMonth, TimeSeries,
};

use crate::adapters::{ErcotAdapter, IsoneAdapter, MisoAdapter, PjmAdapter};
use crate::nodes::NodeDirectory;
use crate::SeriesStore;

/// Node definitions read by [`ValuationDms::builder`] unless overridden.
pub const DEFAULT_NODES_FILE: &str = "definitions/nodes.json";

/// Data management for the valuation optimizer.
///
/// Owns the series store and one adapter per market. Every `*_month`
/// method returns cached series when all of them are present and calls the
/// market's raw loader once otherwise.
pub struct ValuationDms {
    home: PathBuf,
    store: SeriesStore,
    nodes: NodeDirectory,
    node_names: Box<dyn NodeNameLookup>,
    ercot: ErcotAdapter,
    pjm: PjmAdapter,
    miso: MisoAdapter,
    isone: IsoneAdapter,
}

impl ValuationDms {
    /// Start building a DMS over the data under `home`.
    pub fn builder(home: impl Into<PathBuf>) -> ValuationDmsBuilder {
        ValuationDmsBuilder::new(home.into())
    }

    /// Data home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The underlying series store.
    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    /// Mutable access to the series store.
    pub fn store_mut(&mut self) -> &mut SeriesStore {
        &mut self.store
    }

    /// Node definitions loaded at construction.
    pub fn nodes(&self) -> &NodeDirectory {
        &self.nodes
    }

    /// Display name for a node.
    pub fn node_name(&self, node_id: &str, market: Market) -> String {
        self.node_names.node_name(node_id, market)
    }

    /// Persist the store.
    pub fn save(&mut self) -> ValuationResult<()> {
        self.store.save()?;
        Ok(())
    }

    /// ERCOT SPP and regulation prices for one month and settlement point.
    pub fn ercot_month(
        &mut self,
        year: i32,
        month: u32,
        settlement_point: &str,
    ) -> Result<ErcotMonth, DataError> {
        self.ercot.month(&mut self.store, year, month, settlement_point)
    }

    /// ERCOT day-ahead SPP by pre-built key.
    pub fn ercot_spp_by_key(&mut self, key: &CacheKey) -> Result<TimeSeries, DataError> {
        self.ercot.spp_by_key(&mut self.store, key)
    }

    /// ERCOT `(reg_down, reg_up)` by pre-built key.
    pub fn ercot_ccp_by_key(
        &mut self,
        key: &CacheKey,
    ) -> Result<(TimeSeries, TimeSeries), DataError> {
        self.ercot.ccp_by_key(&mut self.store, key)
    }

    /// All six PJM series for one month and node.
    pub fn pjm_month(&mut self, year: i32, month: u32, node: &str) -> Result<PjmMonth, DataError> {
        self.pjm.month(&mut self.store, year, month, node)
    }

    #[deprecated(note = "use `ValuationDms::pjm_month`")]
    #[allow(deprecated)]
    pub fn pjm_lmp(&mut self, args: &[&str]) -> Result<TimeSeries, DataError> {
        self.pjm.lmp(&mut self.store, args)
    }

    #[deprecated(note = "use `ValuationDms::pjm_month`")]
    #[allow(deprecated)]
    pub fn pjm_reg_price(&mut self, args: &[&str]) -> Result<(TimeSeries, TimeSeries), DataError> {
        self.pjm.reg_price(&mut self.store, args)
    }

    #[deprecated(note = "use `ValuationDms::pjm_month`")]
    #[allow(deprecated)]
    pub fn pjm_mileage(
        &mut self,
        args: &[&str],
    ) -> Result<(TimeSeries, TimeSeries, TimeSeries), DataError> {
        self.pjm.mileage(&mut self.store, args)
    }

    #[deprecated(note = "no structured replacement")]
    #[allow(deprecated)]
    pub fn pjm_reg_signal(
        &mut self,
        args: &[&str],
    ) -> Result<(TimeSeries, TimeSeries), DataError> {
        self.pjm.reg_signal(&mut self.store, args)
    }

    /// MISO day-ahead LMP and RegMCP for one month and node.
    pub fn miso_month(
        &mut self,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<MisoMonth, DataError> {
        self.miso.month(&mut self.store, year, month, node)
    }

    #[deprecated(note = "use `ValuationDms::miso_month`")]
    #[allow(deprecated)]
    pub fn miso_lmp(&mut self, args: &[&str]) -> Result<TimeSeries, DataError> {
        self.miso.lmp(&mut self.store, args)
    }

    #[deprecated(note = "use `ValuationDms::miso_month`")]
    #[allow(deprecated)]
    pub fn miso_reg_price(&mut self, args: &[&str]) -> Result<TimeSeries, DataError> {
        self.miso.reg_price(&mut self.store, args)
    }

    /// ISO-NE day-ahead LMP and regulation prices for one month and node.
    pub fn isone_month(
        &mut self,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<IsoneMonth, DataError> {
        self.isone.month(&mut self.store, year, month, node)
    }
}

/// Builder for [`ValuationDms`].
pub struct ValuationDmsBuilder {
    home: PathBuf,
    store: Option<SeriesStore>,
    nodes_file: Option<PathBuf>,
    node_names: Option<Box<dyn NodeNameLookup>>,
    ercot: Option<Box<dyn ErcotLoader>>,
    pjm: Option<Box<dyn PjmLoader>>,
    miso: Option<Box<dyn MisoLoader>>,
    isone: Option<Box<dyn IsoneLoader>>,
}

impl ValuationDmsBuilder {
    fn new(home: PathBuf) -> Self {
        Self {
            home,
            store: None,
            nodes_file: Some(PathBuf::from(DEFAULT_NODES_FILE)),
            node_names: None,
            ercot: None,
            pjm: None,
            miso: None,
            isone: None,
        }
    }

    /// Use an opened store. Defaults to an in-memory store.
    pub fn with_store(mut self, store: SeriesStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Read node definitions from `path` instead of [`DEFAULT_NODES_FILE`].
    pub fn with_nodes_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.nodes_file = Some(path.into());
        self
    }

    /// Start with an empty node table.
    pub fn without_nodes_file(mut self) -> Self {
        self.nodes_file = None;
        self
    }

    /// Replace the pass-through node-name lookup.
    pub fn with_node_names(mut self, lookup: impl NodeNameLookup + 'static) -> Self {
        self.node_names = Some(Box::new(lookup));
        self
    }

    pub fn with_ercot_loader(mut self, loader: impl ErcotLoader + 'static) -> Self {
        self.ercot = Some(Box::new(loader));
        self
    }

    pub fn with_pjm_loader(mut self, loader: impl PjmLoader + 'static) -> Self {
        self.pjm = Some(Box::new(loader));
        self
    }

    pub fn with_miso_loader(mut self, loader: impl MisoLoader + 'static) -> Self {
        self.miso = Some(Box::new(loader));
        self
    }

    pub fn with_isone_loader(mut self, loader: impl IsoneLoader + 'static) -> Self {
        self.isone = Some(Box::new(loader));
        self
    }

    /// Build the DMS, loading the node definitions file.
    ///
    /// A missing file gives an empty node table.
    ///
    /// Markets without a registered loader still serve cached data; a miss
    /// fails with a loader error.
    pub fn build(self) -> ValuationResult<ValuationDms> {
        let nodes = match &self.nodes_file {
            Some(path) => NodeDirectory::load_or_empty(path)?,
            None => NodeDirectory::default(),
        };
        let store = self.store.unwrap_or_default();

        info!(
            "Valuation DMS ready: home {:?}, {} cached series, {} nodes",
            self.home,
            store.len(),
            nodes.len()
        );

        let home = self.home;
        Ok(ValuationDms {
            ercot: ErcotAdapter::new(
                &home,
                self.ercot
                    .unwrap_or_else(|| Box::new(UnavailableLoader(Market::Ercot))),
            ),
            pjm: PjmAdapter::new(
                &home,
                self.pjm
                    .unwrap_or_else(|| Box::new(UnavailableLoader(Market::Pjm))),
            ),
            miso: MisoAdapter::new(
                &home,
                self.miso
                    .unwrap_or_else(|| Box::new(UnavailableLoader(Market::Miso))),
            ),
            isone: IsoneAdapter::new(
                &home,
                self.isone
                    .unwrap_or_else(|| Box::new(UnavailableLoader(Market::Isone))),
            ),
            node_names: self
                .node_names
                .unwrap_or_else(|| Box::new(IdentityNodeNames)),
            home,
            store,
            nodes,
        })
    }
}

/// Stand-in for a market with no registered loader.
struct UnavailableLoader(Market);

impl UnavailableLoader {
    fn err(&self) -> LoaderError {
        LoaderError::Other(format!("no raw loader registered for {}", self.0))
    }
}

impl ErcotLoader for UnavailableLoader {
    fn read_da_spp(&self, _: &Path, _: &str, _: &str) -> Result<TimeSeries, LoaderError> {
        Err(self.err())
    }

    fn read_da_ccp(&self, _: &Path, _: &str) -> Result<(TimeSeries, TimeSeries), LoaderError> {
        Err(self.err())
    }
}

impl PjmLoader for UnavailableLoader {
    fn read_month(&self, _: &Path, _: i32, _: u32, _: &str) -> Result<PjmMonth, LoaderError> {
        Err(self.err())
    }

    fn read_da_lmp(&self, _: &[&str]) -> Result<TimeSeries, LoaderError> {
        Err(self.err())
    }

    fn read_reg_price(&self, _: &[&str]) -> Result<(TimeSeries, TimeSeries), LoaderError> {
        Err(self.err())
    }

    fn read_mileage(
        &self,
        _: &[&str],
    ) -> Result<(TimeSeries, TimeSeries, TimeSeries), LoaderError> {
        Err(self.err())
    }

    fn read_reg_signal(&self, _: &[&str]) -> Result<(TimeSeries, TimeSeries), LoaderError> {
        Err(self.err())
    }
}

impl MisoLoader for UnavailableLoader {
    fn read_month(&self, _: &Path, _: i32, _: u32, _: &str) -> Result<MisoMonth, LoaderError> {
        Err(self.err())
    }

    fn read_da_lmp(&self, _: &[&str]) -> Result<TimeSeries, LoaderError> {
        Err(self.err())
    }

    fn read_reg_price(&self, _: &[&str]) -> Result<TimeSeries, LoaderError> {
        Err(self.err())
    }
}

impl IsoneLoader for UnavailableLoader {
    fn read_month(&self, _: &Path, _: i32, _: u32, _: &str) -> Result<IsoneMonth, LoaderError> {
        Err(self.err())
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::adapters::mock::{series, MockLoader};
    use std::fs;

    fn dms_with(loader: &MockLoader, store: SeriesStore) -> ValuationDms {
        ValuationDms::builder("data")
            .with_store(store)
            .with_ercot_loader(loader.clone())
            .with_pjm_loader(loader.clone())
            .with_miso_loader(loader.clone())
            .with_isone_loader(loader.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn test_miso_scenario_through_facade() {
        let loader = MockLoader::new();
        let mut dms = dms_with(&loader, SeriesStore::in_memory());
        let root = Path::new("data").join("MISO");

        let first = dms.miso_month(2015, 3, "AEC").unwrap();
        let second = dms.miso_month(2015, 3, "AEC").unwrap();

        assert_eq!(first, second);
        assert_eq!(
            loader.calls(),
            vec![format!("miso.month({}, 2015, 3, AEC)", root.display())]
        );
        assert!(dms.store().contains(&CacheKey::from_raw(format!(
            "{} @ 2015 @ 3 @ AEC @ LMP",
            root.display()
        ))));
        assert!(dms
            .store()
            .contains(&CacheKey::from_raw(format!("{} @ 2015 @ 3 @ MCP", root.display()))));
    }

    #[test]
    fn test_markets_share_one_store() {
        let loader = MockLoader::new();
        let mut dms = dms_with(&loader, SeriesStore::in_memory());

        dms.pjm_month(2016, 5, "1").unwrap();
        dms.miso_month(2015, 3, "AEC").unwrap();
        dms.isone_month(2016, 1, "4004").unwrap();

        assert_eq!(dms.store().len(), 6 + 2 + 3);
        assert_eq!(loader.call_count(), 3);
    }

    #[test]
    fn test_legacy_pass_through_hits_structured_entry() {
        let loader = MockLoader::new();
        let mut dms = dms_with(&loader, SeriesStore::in_memory());
        let root = Path::new("data").join("PJM").display().to_string();

        dms.pjm_month(2016, 5, "1").unwrap();
        let lmp = dms.pjm_lmp(&[root.as_str(), "2016", "5", "1", "SPP"]).unwrap();

        assert_eq!(lmp, series(10.0));
        assert_eq!(loader.call_count(), 1);
    }

    #[test]
    fn test_saved_store_serves_next_session_without_loader() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("valuation_dms.json");
        let loader = MockLoader::new();

        let mut dms = dms_with(&loader, SeriesStore::open(&path).unwrap());
        let loaded = dms.isone_month(2016, 1, "4004").unwrap();
        dms.save().unwrap();

        // No loaders registered: any miss would fail.
        let mut next = ValuationDms::builder("data")
            .with_store(SeriesStore::open(&path).unwrap())
            .build()
            .unwrap();
        assert_eq!(next.isone_month(2016, 1, "4004").unwrap(), loaded);
        assert_eq!(loader.call_count(), 1);
    }

    #[test]
    fn test_missing_loader_reports_market() {
        let mut dms = ValuationDms::builder("data").build().unwrap();

        let err = dms.pjm_month(2016, 5, "1").unwrap_err();

        assert_eq!(err.to_string(), "Loader error: no raw loader registered for PJM");
        assert!(dms.store().is_empty());
    }

    #[test]
    fn test_node_name_defaults_to_identity() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nodes = temp_dir.path().join("nodes.json");
        fs::write(&nodes, r#"{"PJM": {"1": {"name": "PJM-RTO"}}}"#).unwrap();

        let dms = ValuationDms::builder("data")
            .with_nodes_file(&nodes)
            .build()
            .unwrap();

        assert_eq!(dms.nodes().len(), 1);
        assert_eq!(dms.node_name("1", Market::Pjm), "1");
    }

    #[test]
    fn test_builder_reads_default_nodes_file() {
        let builder = ValuationDms::builder("data");
        assert_eq!(builder.nodes_file, Some(PathBuf::from(DEFAULT_NODES_FILE)));

        // Not present under the test working directory.
        let dms = builder.build().unwrap();
        assert!(dms.nodes().is_empty());
    }

    #[test]
    fn test_builder_without_nodes_file() {
        let builder = ValuationDms::builder("data").without_nodes_file();
        assert_eq!(builder.nodes_file, None);
        assert!(builder.build().unwrap().nodes().is_empty());
    }

    #[test]
    fn test_node_table_lookup_can_be_swapped_in() {
        let directory = NodeDirectory::from_json(r#"{"PJM": {"1": {"name": "PJM-RTO"}}}"#).unwrap();

        let dms = ValuationDms::builder("data")
            .with_node_names(directory)
            .build()
            .unwrap();

        assert_eq!(dms.node_name("1", Market::Pjm), "PJM-RTO");
        assert_eq!(dms.node_name("2", Market::Pjm), "2");
    }

    #[test]
    fn test_ercot_scan_failure_through_facade() {
        let temp_dir = tempfile::tempdir().unwrap();
        let loader = MockLoader::new();
        let mut dms = ValuationDms::builder(temp_dir.path())
            .with_ercot_loader(loader.clone())
            .build()
            .unwrap();

        assert!(matches!(
            dms.ercot_month(2010, 1, "HB_HOUSTON"),
            Err(DataError::NoMatchingFile { .. })
        ));
        assert!(dms.store().is_empty());
        assert_eq!(loader.call_count(), 0);
    }
}
