//! DNSimple DNS Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) use http::DnsimpleClient;
pub(crate) use types::{DnsimpleRecord, DnsimpleResponse};

pub(crate) const PROVIDER_NAME: &str = "dnsimple";

/// DNSimple DNS Provider
///
/// Holds the immutable account configuration and a pooled HTTP client. Every
/// operation borrows a short-lived [`DnsimpleClient`] built from them.
pub struct DnsimpleProvider {
    pub(crate) client: Client,
    pub(crate) config: ProviderConfig,
}

impl DnsimpleProvider {
    /// Builds a provider with the default HTTP client (10 s connect, 30 s request timeout).
    ///
    /// The config is used as given; call [`ProviderConfig::provision`] first to
    /// resolve placeholders.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        Ok(Self::with_client(config, create_http_client(PROVIDER_NAME)?))
    }

    /// Builds a provider around a caller-supplied `reqwest::Client`.
    pub fn with_client(config: ProviderConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub(crate) fn api(&self) -> DnsimpleClient<'_> {
        DnsimpleClient {
            http: &self.client,
            base_url: self.config.base_url(),
            api_token: &self.config.api_token,
            account_id: &self.config.account_id,
        }
    }
}
