//! End-to-end test utilities for the Vaultform provider layer
//!
//! This crate provides an in-memory vault backend so the full
//! resource/data-source lifecycle can be exercised without a real vault
//! server.

pub mod mock_vault;

pub use mock_vault::MockVault;

/// Initialize tracing for tests. Safe to call from every test; only the
/// first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
