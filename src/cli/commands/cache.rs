//! Store inspection commands.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use valuation_core::types::CacheKey;
use valuation_data::{write_series_csv, SeriesStore};

use super::load_or_default;
use crate::cli::{CacheAction, CacheArgs};

pub fn run(args: CacheArgs, config_path: &Path) -> Result<()> {
    let config = load_or_default(config_path)?;
    let store_path = &config.data.store_file;
    let mut store = SeriesStore::open(store_path)
        .with_context(|| format!("Failed to open data store {:?}", store_path))?;

    match args.action {
        CacheAction::Stats => {
            println!("Store: {}", store_path.display());
            println!("Entries: {}", store.len());
        }
        CacheAction::List { prefix } => {
            for key in matching_keys(&store, prefix.as_deref()) {
                println!("{}", key);
            }
        }
        CacheAction::Export { key, out } => {
            export(&store, &CacheKey::from_raw(key), &out)?;
            println!("Exported to {}", out.display());
        }
        CacheAction::Remove { key } => {
            let key = CacheKey::from_raw(key);
            if store.remove(&key).is_none() {
                anyhow::bail!("Key not in store: {}", key);
            }
            store.save()?;
            info!("Removed {}", key);
        }
        CacheAction::Clear => {
            let count = store.len();
            store.clear();
            store.save()?;
            println!("Removed {} entries", count);
        }
    }

    Ok(())
}

fn matching_keys<'a>(store: &'a SeriesStore, prefix: Option<&str>) -> Vec<&'a CacheKey> {
    store
        .keys()
        .into_iter()
        .filter(|key| prefix.map_or(true, |p| key.as_str().starts_with(p)))
        .collect()
}

fn export(store: &SeriesStore, key: &CacheKey, out: &Path) -> Result<()> {
    let series = store
        .get(key)
        .with_context(|| format!("Cannot export {}", key))?;
    write_series_csv(series, out)?;
    Ok(())
}
