//! Catalog record types mirroring the cloud API's JSON

use serde::Deserialize;

/// One installable application from the marketplace listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarketplaceApplication {
    /// Application name as it appears in cluster specs
    pub name: String,

    /// Published version
    #[serde(default)]
    pub version: String,

    /// Marketplace category
    #[serde(default)]
    pub category: String,

    /// Maintainer contact
    #[serde(default)]
    pub maintainer: String,
}

/// Requested configuration of one node pool in a cluster
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodePoolConfig {
    /// Pool identifier
    pub id: String,

    /// Number of nodes in the pool
    #[serde(default)]
    pub count: u32,

    /// Instance size of each node
    #[serde(default)]
    pub size: String,
}
