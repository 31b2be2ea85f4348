//! # dnsimple-provider
//!
//! Manage DNS records in a [DNSimple](https://dnsimple.com/) account through the
//! DNSimple v2 API, using a provider-agnostic [`Record`] model. Built for DNS-01
//! challenge solvers and other hosts that need to add and remove records in a zone.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use dnsimple_provider::{create_provider, ProviderConfig, Record};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderConfig::new("{env.DNSIMPLE_TOKEN}", "1010"))?;
//!
//!     let challenge = Record::new("TXT", "_acme-challenge", "token-value")
//!         .with_ttl(Duration::from_secs(60));
//!     let created = provider.append_records("example.com.", &[challenge]).await?;
//!
//!     for record in provider.get_records("example.com").await? {
//!         println!("{} {} {}", record.name, record.record_type, record.value);
//!     }
//!
//!     provider.delete_records("example.com", &created).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Nothing is
//! retried, and multi-record operations stop at the first failure without undoing
//! the records already processed.
//!
//! - [`ProviderError::HttpStatus`]: the API answered outside `2xx` (including 401/403)
//! - [`ProviderError::InvalidRecordId`]: a record passed to delete has a non-numeric id
//! - [`ProviderError::NotImplemented`]: `set_records` is not supported
//!
//! Cancellation follows Rust futures: dropping an operation's future aborts the
//! request in flight.

mod config;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export configuration
pub use config::{
    DNSIMPLE_API_BASE, DNSIMPLE_SANDBOX_API_BASE, MODULE_ID, ProviderConfig, expand_placeholders,
};

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::RecordProvider;

// Re-export types
pub use types::Record;

// Re-export utils module
pub use utils::datetime;

// Re-export concrete provider
pub use providers::DnsimpleProvider;
