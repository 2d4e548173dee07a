//! Membership checks consumed by resource validation hooks

use thiserror::Error;
use tracing::warn;

use brokkr_core::retry::{DeadlineRetrier, RetryError, TracingObserver};
use brokkr_core::types::RetryPolicy;

use crate::traits::ApplicationCatalog;
use crate::types::NodePoolConfig;

/// Check whether a requested application is offered by the marketplace
///
/// Requested names may carry a version suffix (`name:version`), so the check
/// is containment against each catalog entry's bare name. A failed listing
/// degrades to `false` instead of surfacing the transport error.
pub fn is_catalog_application(name: &str, catalog: &dyn ApplicationCatalog) -> bool {
    match catalog.list_applications() {
        Ok(applications) => applications.iter().any(|app| name.contains(&app.name)),
        Err(error) => {
            warn!(
                error = %error,
                application = name,
                "failed to list marketplace applications"
            );
            false
        }
    }
}

/// Check whether a node pool id belongs to a cluster's pool configuration
pub fn in_pool(id: &str, pools: &[NodePoolConfig]) -> bool {
    pools.iter().any(|pool| pool.id == id)
}

/// Error for one attempt of [`wait_for_application`]
#[derive(Debug, Error)]
#[error("application {name} not present in marketplace catalog")]
pub struct ApplicationMissing {
    name: String,
}

/// Block until the named application shows up in the marketplace listing
///
/// Retries the membership check at the policy's fixed interval until it
/// passes or the deadline is reached. The calling thread is blocked for the
/// whole wait.
pub fn wait_for_application(
    name: &str,
    catalog: &dyn ApplicationCatalog,
    policy: &RetryPolicy,
) -> Result<(), RetryError<ApplicationMissing>> {
    let retrier = DeadlineRetrier::new(policy.clone())
        .with_observer(TracingObserver::new("wait-for-application"));

    retrier.execute(|| {
        if is_catalog_application(name, catalog) {
            Ok(())
        } else {
            Err(ApplicationMissing {
                name: name.to_string(),
            })
        }
    })
}
