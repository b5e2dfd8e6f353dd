//! ERCOT settlement point and regulation capacity prices.
//!
//! Layout under the data home:
//! - `ERCOT/SPP/<year>/*.xlsx`: one workbook of day-ahead SPPs per year
//! - `ERCOT/CCP/<year>/*.csv`: one file of capacity clearing prices per year
//!
//! Keys are built from the resolved file path, so the key-based entry points
//! ([`ErcotAdapter::spp_by_key`], [`ErcotAdapter::ccp_by_key`]) accept keys
//! produced by older callers verbatim.

use std::path::{Path, PathBuf};
use tracing::{debug, info};
use valuation_core::error::DataError;
use valuation_core::traits::ErcotLoader;
use valuation_core::types::{CacheKey, ErcotMonth, Market, TimeSeries};

use super::path_component;
use crate::scan::first_with_extension;
use crate::SeriesStore;

const SPP_EXTENSION: &str = "xlsx";
const CCP_EXTENSION: &str = "csv";

/// Adapter for ERCOT market data.
pub struct ErcotAdapter {
    root: PathBuf,
    loader: Box<dyn ErcotLoader>,
}

impl ErcotAdapter {
    /// Create an adapter rooted at `<home>/ERCOT`.
    pub fn new(home: &Path, loader: Box<dyn ErcotLoader>) -> Self {
        Self {
            root: home.join(Market::Ercot.dir_name()),
            loader,
        }
    }

    /// Root directory of the ERCOT data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get SPP and regulation prices for one month and settlement point.
    ///
    /// Both source files are resolved before the store is consulted, so a
    /// missing file fails with [`DataError::NoMatchingFile`] and leaves the
    /// store untouched.
    pub fn month(
        &self,
        store: &mut SeriesStore,
        year: i32,
        month: u32,
        settlement_point: &str,
    ) -> Result<ErcotMonth, DataError> {
        let year = year.to_string();
        let month = month.to_string();

        let spp_file = first_with_extension(&self.root.join("SPP").join(&year), SPP_EXTENSION)?;
        let ccp_file = first_with_extension(&self.root.join("CCP").join(&year), CCP_EXTENSION)?;

        let spp_key = CacheKey::join([
            path_component(&spp_file),
            month.clone(),
            settlement_point.to_string(),
        ]);
        let ccp_key = CacheKey::join([path_component(&ccp_file), month.clone()]);

        info!("DMS: Loading ERCOT DA-SPP");
        let spp_da = self.load_spp(store, &spp_key, &spp_file, &month, settlement_point)?;
        info!("DMS: Loading ERCOT DA-CCP");
        let (reg_down, reg_up) = self.load_ccp(store, &ccp_key, &ccp_file, &month)?;

        Ok(ErcotMonth {
            spp_da,
            reg_down,
            reg_up,
        })
    }

    /// Get day-ahead SPP by a pre-built `file @ month @ settlement point` key.
    pub fn spp_by_key(
        &self,
        store: &mut SeriesStore,
        key: &CacheKey,
    ) -> Result<TimeSeries, DataError> {
        info!("DMS: Loading ERCOT DA-SPP");
        let parts = key_parts(key, 3);
        self.load_spp(
            store,
            key,
            Path::new(component(&parts, 0)),
            component(&parts, 1),
            component(&parts, 2),
        )
    }

    /// Get regulation capacity prices by a pre-built `file @ month` key.
    ///
    /// Returns `(reg_down, reg_up)`, cached under `key @ REGDN` and
    /// `key @ REGUP`.
    pub fn ccp_by_key(
        &self,
        store: &mut SeriesStore,
        key: &CacheKey,
    ) -> Result<(TimeSeries, TimeSeries), DataError> {
        info!("DMS: Loading ERCOT DA-CCP");
        let parts = key_parts(key, 2);
        self.load_ccp(
            store,
            key,
            Path::new(component(&parts, 0)),
            component(&parts, 1),
        )
    }

    fn load_spp(
        &self,
        store: &mut SeriesStore,
        key: &CacheKey,
        file: &Path,
        month: &str,
        settlement_point: &str,
    ) -> Result<TimeSeries, DataError> {
        store.get_or_load(key, || {
            self.loader
                .read_da_spp(file, month, settlement_point)
                .map_err(DataError::from)
        })
    }

    fn load_ccp(
        &self,
        store: &mut SeriesStore,
        key: &CacheKey,
        file: &Path,
        month: &str,
    ) -> Result<(TimeSeries, TimeSeries), DataError> {
        let keys = [key.child("REGDN"), key.child("REGUP")];
        let [reg_down, reg_up] = store.get_or_load_all(&keys, || {
            let (reg_down, reg_up) = self.loader.read_da_ccp(file, month)?;
            Ok::<_, DataError>([reg_down, reg_up])
        })?;
        Ok((reg_down, reg_up))
    }
}

/// Split a legacy key, noting components the loader will not see.
fn key_parts(key: &CacheKey, expected: usize) -> Vec<&str> {
    let parts = key.parts();
    if parts.len() > expected {
        debug!(
            key = %key,
            expected,
            found = parts.len(),
            "Extra key components ignored"
        );
    }
    parts
}

/// Key component at `i`, or empty when the key is too short.
///
/// Short keys are not rejected here; the loader reports the bad arguments.
fn component<'a>(parts: &[&'a str], i: usize) -> &'a str {
    parts.get(i).copied().unwrap_or_default()
}
