//! Raw vendor loader contracts.
//!
//! Loaders are pure parsers: given source paths and selectors they return
//! in-memory series. They know nothing about caching and may fail with a
//! vendor-specific [`LoaderError`], which callers pass through unchanged.

use std::path::Path;

use crate::error::LoaderError;
use crate::types::{IsoneMonth, MisoMonth, PjmMonth, TimeSeries};

/// Loader for ERCOT settlement point and ancillary capacity price files.
pub trait ErcotLoader {
    /// Read the day-ahead settlement point price for one month.
    ///
    /// # Arguments
    /// * `file` - Workbook containing a year of SPP data
    /// * `month` - Month number as written in the cache key
    /// * `settlement_point` - Settlement point name (e.g. `HB_HOUSTON`)
    fn read_da_spp(
        &self,
        file: &Path,
        month: &str,
        settlement_point: &str,
    ) -> Result<TimeSeries, LoaderError>;

    /// Read regulation capacity clearing prices for one month.
    ///
    /// # Returns
    /// `(reg_down, reg_up)`
    fn read_da_ccp(
        &self,
        file: &Path,
        month: &str,
    ) -> Result<(TimeSeries, TimeSeries), LoaderError>;
}

/// Loader for PJM market data.
pub trait PjmLoader {
    /// Read every series of one month for one pricing node.
    fn read_month(
        &self,
        root: &Path,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<PjmMonth, LoaderError>;

    /// Read a day-ahead LMP series addressed by selector components.
    fn read_da_lmp(&self, args: &[&str]) -> Result<TimeSeries, LoaderError>;

    /// Read regulation clearing prices as `(RegCCP, RegPCP)`.
    fn read_reg_price(&self, args: &[&str]) -> Result<(TimeSeries, TimeSeries), LoaderError>;

    /// Read mileage data as `(MR, RA, RD)`.
    fn read_mileage(
        &self,
        args: &[&str],
    ) -> Result<(TimeSeries, TimeSeries, TimeSeries), LoaderError>;

    /// Read the regulation signal as `(RegUp, RegDown)`.
    fn read_reg_signal(&self, args: &[&str]) -> Result<(TimeSeries, TimeSeries), LoaderError>;
}

/// Loader for MISO market data.
pub trait MisoLoader {
    /// Read day-ahead LMP and regulation MCP for one month and node.
    fn read_month(
        &self,
        root: &Path,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<MisoMonth, LoaderError>;

    /// Read a day-ahead LMP series addressed by selector components.
    fn read_da_lmp(&self, args: &[&str]) -> Result<TimeSeries, LoaderError>;

    /// Read the regulation market clearing price addressed by selector components.
    fn read_reg_price(&self, args: &[&str]) -> Result<TimeSeries, LoaderError>;
}

/// Loader for ISO-NE market data.
pub trait IsoneLoader {
    /// Read day-ahead LMP and regulation clearing prices for one month and node.
    fn read_month(
        &self,
        root: &Path,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<IsoneMonth, LoaderError>;
}
