//! Provider factory functions.

use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::providers::DnsimpleProvider;
use crate::traits::RecordProvider;

/// Creates a [`RecordProvider`] from host configuration.
///
/// Placeholders in the config are resolved first (see [`ProviderConfig::provision`]).
/// The returned provider is wrapped in `Arc<dyn RecordProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dnsimple_provider::{create_provider, ProviderConfig};
///
/// let provider = create_provider(ProviderConfig::new("{env.DNSIMPLE_TOKEN}", "1010")).unwrap();
/// ```
pub fn create_provider(config: ProviderConfig) -> Result<Arc<dyn RecordProvider>> {
    let config = config.provision();
    log::debug!("Creating provider with {config:?}");
    Ok(Arc::new(DnsimpleProvider::new(config)?))
}
