//! Node definitions file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use valuation_core::error::{ValuationError, ValuationResult};
use valuation_core::traits::NodeNameLookup;
use valuation_core::types::Market;

/// Description of one pricing node or settlement point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Market → node id → descriptor table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeDirectory {
    markets: BTreeMap<String, BTreeMap<String, NodeDescriptor>>,
}

impl NodeDirectory {
    /// Parse a node definitions document.
    pub fn from_json(json: &str) -> ValuationResult<Self> {
        serde_json::from_str(json).map_err(|e| ValuationError::Nodes(e.to_string()))
    }

    /// Load the node definitions file.
    pub fn load(path: &Path) -> ValuationResult<Self> {
        let json = fs::read_to_string(path)?;
        let directory = Self::from_json(&json)?;
        info!(
            "Loaded {} node definitions from {:?}",
            directory.len(),
            path
        );
        Ok(directory)
    }

    /// Load the node definitions file, or an empty table if there is none.
    pub fn load_or_empty(path: &Path) -> ValuationResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("Node definitions not found at {:?}", path);
            Ok(Self::default())
        }
    }

    /// Look up a node descriptor.
    pub fn get(&self, market: Market, node_id: &str) -> Option<&NodeDescriptor> {
        self.markets.get(market.dir_name())?.get(node_id)
    }

    /// Nodes defined for `market`, ordered by id.
    pub fn nodes(&self, market: Market) -> impl Iterator<Item = (&str, &NodeDescriptor)> {
        self.markets
            .get(market.dir_name())
            .into_iter()
            .flat_map(|nodes| nodes.iter().map(|(id, node)| (id.as_str(), node)))
    }

    /// Total number of nodes across all markets.
    pub fn len(&self) -> usize {
        self.markets.values().map(BTreeMap::len).sum()
    }

    /// Check if no nodes are defined.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NodeNameLookup for NodeDirectory {
    fn node_name(&self, node_id: &str, market: Market) -> String {
        self.get(market, node_id)
            .map(|node| node.name.clone())
            .unwrap_or_else(|| node_id.to_string())
    }
}
