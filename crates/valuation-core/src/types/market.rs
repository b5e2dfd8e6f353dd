//! Power markets handled by the valuation tool.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An independent system operator whose market data we load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Market {
    Ercot,
    Pjm,
    Miso,
    Isone,
}

impl Market {
    /// All markets in display order.
    pub const ALL: [Market; 4] = [Market::Ercot, Market::Pjm, Market::Miso, Market::Isone];

    /// Name of the market's directory under the data home.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Market::Ercot => "ERCOT",
            Market::Pjm => "PJM",
            Market::Miso => "MISO",
            Market::Isone => "ISONE",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "").as_str() {
            "ERCOT" => Ok(Market::Ercot),
            "PJM" => Ok(Market::Pjm),
            "MISO" => Ok(Market::Miso),
            "ISONE" => Ok(Market::Isone),
            _ => Err(format!("Unknown market: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_parsing() {
        assert_eq!("ercot".parse::<Market>().unwrap(), Market::Ercot);
        assert_eq!("ISO-NE".parse::<Market>().unwrap(), Market::Isone);
        assert_eq!("isone".parse::<Market>().unwrap(), Market::Isone);
        assert!("CAISO".parse::<Market>().is_err());
    }

    #[test]
    fn test_serde_uses_directory_names() {
        for market in Market::ALL {
            let json = serde_json::to_string(&market).unwrap();
            assert_eq!(json, format!("\"{}\"", market.dir_name()));
        }
    }
}
