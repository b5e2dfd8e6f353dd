//! PJM LMP, mileage and regulation prices.

use std::path::{Path, PathBuf};
use tracing::info;
use valuation_core::error::DataError;
use valuation_core::traits::PjmLoader;
use valuation_core::types::{CacheKey, Market, PjmMonth, TimeSeries};

use super::path_component;
use crate::SeriesStore;

/// Adapter for PJM market data.
pub struct PjmAdapter {
    root: PathBuf,
    loader: Box<dyn PjmLoader>,
}

impl PjmAdapter {
    /// Create an adapter rooted at `<home>/PJM`.
    pub fn new(home: &Path, loader: Box<dyn PjmLoader>) -> Self {
        Self {
            root: home.join(Market::Pjm.dir_name()),
            loader,
        }
    }

    /// Root directory of the PJM data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get all six PJM series for one month and pricing node.
    ///
    /// The series share one source read, so they are cached and reloaded
    /// together.
    pub fn month(
        &self,
        store: &mut SeriesStore,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<PjmMonth, DataError> {
        info!("DMS: Loading PJM data for {}-{} node {}", year, month, node);

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
                "SPP",
            ]),
            month_key("MR"),
            month_key("RA"),
            month_key("RD"),
            month_key("RegCCP"),
            month_key("RegPCP"),
        ];

        let [lmp_da, mileage_ratio, mileage_up, mileage_down, reg_ccp, reg_pcp] =
            store.get_or_load_all(&keys, || {
                let data = self.loader.read_month(&self.root, year, month, node)?;
                Ok::<_, DataError>([
                    data.lmp_da,
                    data.mileage_ratio,
                    data.mileage_up,
                    data.mileage_down,
                    data.reg_ccp,
                    data.reg_pcp,
                ])
            })?;

        Ok(PjmMonth {
            lmp_da,
            mileage_ratio,
            mileage_up,
            mileage_down,
            reg_ccp,
            reg_pcp,
        })
    }

    /// Get a day-ahead LMP series keyed by its selector components.
    #[deprecated(note = "use `PjmAdapter::month`")]
    pub fn lmp(&self, store: &mut SeriesStore, args: &[&str]) -> Result<TimeSeries, DataError> {
        info!("DMS: Loading PJM DA-LMP");
        let key = CacheKey::join(args);
        store.get_or_load(&key, || {
            self.loader.read_da_lmp(args).map_err(DataError::from)
        })
    }

    /// Get `(RegCCP, RegPCP)` keyed by selector components.
    #[deprecated(note = "use `PjmAdapter::month`")]
    pub fn reg_price(
        &self,
        store: &mut SeriesStore,
        args: &[&str],
    ) -> Result<(TimeSeries, TimeSeries), DataError> {
        info!("DMS: Loading PJM regulation prices");
        let base = CacheKey::join(args);
        let keys = [base.child("RegCCP"), base.child("RegPCP")];
        let [ccp, pcp] = store.get_or_load_all(&keys, || {
            let (ccp, pcp) = self.loader.read_reg_price(args)?;
            Ok::<_, DataError>([ccp, pcp])
        })?;
        Ok((ccp, pcp))
    }

    /// Get mileage `(MR, RA, RD)` keyed by selector components.
    #[deprecated(note = "use `PjmAdapter::month`")]
    pub fn mileage(
        &self,
        store: &mut SeriesStore,
        args: &[&str],
    ) -> Result<(TimeSeries, TimeSeries, TimeSeries), DataError> {
        info!("DMS: Loading PJM mileage data");
        let base = CacheKey::join(args);
        let keys = [base.child("MR"), base.child("RA"), base.child("RD")];
        let [mr, ra, rd] = store.get_or_load_all(&keys, || {
            let (mr, ra, rd) = self.loader.read_mileage(args)?;
            Ok::<_, DataError>([mr, ra, rd])
        })?;
        Ok((mr, ra, rd))
    }

    /// Get the regulation signal `(RegUp, RegDown)` keyed by selector components.
    #[deprecated(note = "no structured replacement; the signal is not part of `PjmMonth`")]
    pub fn reg_signal(
        &self,
        store: &mut SeriesStore,
        args: &[&str],
    ) -> Result<(TimeSeries, TimeSeries), DataError> {
        info!("DMS: Loading PJM regulation signal");
        let base = CacheKey::join(args);
        let keys = [base.child("RegUp"), base.child("RegDown")];
        let [up, down] = store.get_or_load_all(&keys, || {
            let (up, down) = self.loader.read_reg_signal(args)?;
            Ok::<_, DataError>([up, down])
        })?;
        Ok((up, down))
    }
}
