//! Utility modules.

/// Duration parsing and serialization helpers for configuration.
pub mod duration;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
