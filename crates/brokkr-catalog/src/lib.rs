//! # brokkr-catalog
//!
//! Marketplace application catalog for the brokkr provisioning helpers:
//! - Typed records for catalog applications and cluster node pools
//! - The `ApplicationCatalog` trait implemented by API clients
//! - A blocking HTTP client against the cloud API's marketplace endpoint
//! - Membership checks and a deadline-bounded wait used by resource hooks

pub mod http;
pub mod membership;
pub mod traits;
pub mod types;

pub use http::HttpCatalog;
pub use membership::{in_pool, is_catalog_application, wait_for_application, ApplicationMissing};
pub use traits::ApplicationCatalog;
pub use types::{MarketplaceApplication, NodePoolConfig};
