//! Node listing command.

use anyhow::Result;
use std::path::Path;
use valuation_core::types::Market;
use valuation_data::ValuationDms;

use super::load_or_default;
use crate::cli::NodesArgs;

pub fn run(args: NodesArgs, config_path: &Path) -> Result<()> {
    let config = load_or_default(config_path)?;
    let dms = ValuationDms::builder(&config.data.home_path)
        .with_nodes_file(&config.data.nodes_file)
        .build()?;

    let markets: Vec<Market> = match args.market {
        Some(market) => vec![market],
        None => Market::ALL.to_vec(),
    };

    for market in markets {
        println!("{}", market);
        for (id, node) in dms.nodes().nodes(market) {
            println!("  {:<20} {:<24} {}", id, dms.node_name(id, market), node.name);
        }
    }

    Ok(())
}
