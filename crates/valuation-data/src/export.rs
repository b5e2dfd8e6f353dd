//! CSV export of cached series.

use csv::Writer;
use serde::Serialize;
use std::path::Path;
use valuation_core::error::ValuationError;
use valuation_core::types::TimeSeries;

#[derive(Serialize)]
struct SeriesRecord {
    timestamp: i64,
    value: f64,
}

/// Write a series as `timestamp,value` rows.
pub fn write_series_csv(series: &TimeSeries, path: &Path) -> Result<(), ValuationError> {
    let mut writer = Writer::from_path(path).map_err(csv_error)?;

    for (timestamp, value) in series.iter() {
        writer
            .serialize(SeriesRecord { timestamp, value })
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

fn csv_error(e: csv::Error) -> ValuationError {
    match e.into_kind() {
        csv::ErrorKind::Io(io) => ValuationError::Io(io),
        other => ValuationError::Io(std::io::Error::other(format!("{:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_series_csv() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("lmp.csv");
        let series = TimeSeries::from_points([(0, 21.5), (3_600_000, 19.25)]);

        write_series_csv(&series, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "timestamp,value\n0,21.5\n3600000,19.25\n");
    }

    #[test]
    fn test_empty_series_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("empty.csv");

        write_series_csv(&TimeSeries::default(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("lmp.csv");

        let err = write_series_csv(&TimeSeries::default(), &path).unwrap_err();
        assert!(matches!(err, ValuationError::Io(_)));
    }
}
