//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod dnsimple;

pub use dnsimple::DnsimpleProvider;
