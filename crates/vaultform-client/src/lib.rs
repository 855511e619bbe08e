//! Async vault API client
//!
//! The [`VaultClient`] trait is the seam between the provider layer and the
//! remote vault: create, fetch, update and delete credential entries.
//! [`HttpVaultClient`] is the production implementation over the vault's
//! REST API; tests substitute an in-memory mock.
//!
//! "Not found" is a first-class outcome here, not a generic failure:
//! [`ClientError::NotFound`] lets callers treat an externally deleted entry
//! as a normal state transition instead of string-matching error text.

mod client;
mod config;
mod error;
mod http;

pub use client::VaultClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::HttpVaultClient;
