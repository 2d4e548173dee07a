//! Catalog trait definitions

use anyhow::Result;

use crate::types::MarketplaceApplication;

/// Source of the marketplace application listing
///
/// Implemented by API clients. Resource hooks program against this seam so
/// membership checks stay testable without a live endpoint.
pub trait ApplicationCatalog: Send + Sync {
    /// List every application the marketplace currently offers
    fn list_applications(&self) -> Result<Vec<MarketplaceApplication>>;
}
