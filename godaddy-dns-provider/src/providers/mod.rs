//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

pub mod godaddy;

pub use godaddy::GodaddyProvider;
