//! Recording loaders for adapter tests.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use valuation_core::error::LoaderError;
use valuation_core::traits::{ErcotLoader, IsoneLoader, MisoLoader, PjmLoader};
use valuation_core::types::{IsoneMonth, MisoMonth, PjmMonth, TimeSeries};

/// Loader that records every call and returns fixed series.
///
/// Clones share the call log, so a test can keep one handle while the
/// adapter owns another.
#[derive(Clone, Default)]
pub struct MockLoader {
    calls: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl MockLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader whose every call fails with a parse error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: String) -> Result<(), LoaderError> {
        self.calls.borrow_mut().push(call.clone());
        if self.fail {
            Err(LoaderError::parse(call, "unexpected end of file"))
        } else {
            Ok(())
        }
    }
}

/// Two-point series tagged by `level`.
pub fn series(level: f64) -> TimeSeries {
    TimeSeries::from_points([(0, level), (3_600_000, level + 0.5)])
}

impl ErcotLoader for MockLoader {
    fn read_da_spp(
        &self,
        file: &Path,
        month: &str,
        settlement_point: &str,
    ) -> Result<TimeSeries, LoaderError> {
        self.record(format!(
            "ercot.spp({}, {}, {})",
            file.display(),
            month,
            settlement_point
        ))?;
        Ok(series(1.0))
    }

    fn read_da_ccp(
        &self,
        file: &Path,
        month: &str,
    ) -> Result<(TimeSeries, TimeSeries), LoaderError> {
        self.record(format!("ercot.ccp({}, {})", file.display(), month))?;
        Ok((series(2.0), series(3.0)))
    }
}

impl PjmLoader for MockLoader {
    fn read_month(
        &self,
        root: &Path,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<PjmMonth, LoaderError> {
        self.record(format!(
            "pjm.month({}, {}, {}, {})",
            root.display(),
            year,
            month,
            node
        ))?;
        Ok(PjmMonth {
            lmp_da: series(10.0),
            mileage_ratio: series(11.0),
            mileage_up: series(12.0),
            mileage_down: series(13.0),
            reg_ccp: series(14.0),
            reg_pcp: series(15.0),
        })
    }

    fn read_da_lmp(&self, args: &[&str]) -> Result<TimeSeries, LoaderError> {
        self.record(format!("pjm.lmp({})", args.join(", ")))?;
        Ok(series(10.0))
    }

    fn read_reg_price(&self, args: &[&str]) -> Result<(TimeSeries, TimeSeries), LoaderError> {
        self.record(format!("pjm.reg_price({})", args.join(", ")))?;
        Ok((series(14.0), series(15.0)))
    }

    fn read_mileage(
        &self,
        args: &[&str],
    ) -> Result<(TimeSeries, TimeSeries, TimeSeries), LoaderError> {
        self.record(format!("pjm.mileage({})", args.join(", ")))?;
        Ok((series(11.0), series(12.0), series(13.0)))
    }

    fn read_reg_signal(&self, args: &[&str]) -> Result<(TimeSeries, TimeSeries), LoaderError> {
        self.record(format!("pjm.reg_signal({})", args.join(", ")))?;
        Ok((series(16.0), series(17.0)))
    }
}

impl MisoLoader for MockLoader {
    fn read_month(
        &self,
        root: &Path,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<MisoMonth, LoaderError> {
        self.record(format!(
            "miso.month({}, {}, {}, {})",
            root.display(),
            year,
            month,
            node
        ))?;
        Ok(MisoMonth {
            lmp_da: series(20.0),
            reg_mcp: series(21.0),
        })
    }

    fn read_da_lmp(&self, args: &[&str]) -> Result<TimeSeries, LoaderError> {
        self.record(format!("miso.lmp({})", args.join(", ")))?;
        Ok(series(20.0))
    }

    fn read_reg_price(&self, args: &[&str]) -> Result<TimeSeries, LoaderError> {
        self.record(format!("miso.reg_price({})", args.join(", ")))?;
        Ok(series(21.0))
    }
}

impl IsoneLoader for MockLoader {
    fn read_month(
        &self,
        root: &Path,
        year: i32,
        month: u32,
        node: &str,
    ) -> Result<IsoneMonth, LoaderError> {
        self.record(format!(
            "isone.month({}, {}, {}, {})",
            root.display(),
            year,
            month,
            node
        ))?;
        Ok(IsoneMonth {
            lmp_da: series(30.0),
            reg_ccp: series(31.0),
            reg_pcp: series(32.0),
        })
    }
}
