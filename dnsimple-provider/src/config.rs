//! Provider configuration as supplied by the host.
//!
//! Hosts deserialize [`ProviderConfig`] from their own configuration file and call
//! [`ProviderConfig::provision`] once at startup to resolve `{env.NAME}` placeholders.

use serde::{Deserialize, Serialize};

/// Module identifier under which hosts register this provider.
pub const MODULE_ID: &str = "dns.providers.dnsimple";

/// Production API endpoint.
pub const DNSIMPLE_API_BASE: &str = "https://api.dnsimple.com";

/// Sandbox API endpoint, useful for live tests.
pub const DNSIMPLE_SANDBOX_API_BASE: &str = "https://api.sandbox.dnsimple.com";

/// Credentials and endpoint for a DNSimple account.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API access token, sent as a bearer token.
    #[serde(default)]
    pub api_token: String,
    /// Numeric account identifier used in every request path.
    #[serde(default)]
    pub account_id: String,
    /// API endpoint override. Defaults to [`DNSIMPLE_API_BASE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    pub fn new(api_token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            account_id: account_id.into(),
            base_url: None,
        }
    }

    /// Points the provider at another endpoint (sandbox, mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The endpoint without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DNSIMPLE_API_BASE)
            .trim_end_matches('/')
    }

    /// Resolves `{env.NAME}` placeholders in the token and account id.
    #[must_use]
    pub fn provision(self) -> Self {
        Self {
            api_token: expand_placeholders(&self.api_token),
            account_id: expand_placeholders(&self.account_id),
            base_url: self.base_url,
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("base_url", &self.base_url())
            .finish()
    }
}

/// Replaces every `{env.NAME}` with the value of the environment variable `NAME`.
///
/// Unset variables expand to the empty string. Other `{...}` groups and unterminated
/// braces are kept as written.
pub fn expand_placeholders(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };

        let key = &tail[1..end];
        match key.strip_prefix("env.") {
            Some(var) if !var.is_empty() => {
                out.push_str(&std::env::var(var).unwrap_or_default());
            }
            _ => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}
