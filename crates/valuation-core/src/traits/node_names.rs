//! Node-name lookup.

use crate::types::Market;

/// Resolves an opaque node identifier to a human-readable name.
pub trait NodeNameLookup {
    /// Get the display name for `node_id` in `market`.
    fn node_name(&self, node_id: &str, market: Market) -> String;
}

/// Pass-through lookup: the node id is its own name.
///
/// This is the default until the node table carries reliable names for
/// every market.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNodeNames;

impl NodeNameLookup for IdentityNodeNames {
    fn node_name(&self, node_id: &str, _market: Market) -> String {
        node_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_id() {
        let lookup = IdentityNodeNames;
        assert_eq!(lookup.node_name("51217", Market::Pjm), "51217");
        assert_eq!(lookup.node_name("AEC", Market::Miso), "AEC");
    }
}
