//! # godaddy-dns-provider
//!
//! GoDaddy DNS record adapter for hosts that solve ACME DNS-01 challenges.
//!
//! It lists, appends, deletes and replaces records in a GoDaddy-managed zone
//! through the GoDaddy Domains REST API.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use godaddy_dns_provider::{
//!     GodaddyProvider, ProviderConfig, Record, RecordAppender, RecordDeleter, RecordGetter,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build the provider; missing credentials fail here, before any request
//!     let config = ProviderConfig::from_directives(
//!         "godaddy {\n  api_key my-key\n  api_secret my-secret\n  http_timeout 45s\n}",
//!     )?;
//!     let provider = GodaddyProvider::new(config)?;
//!
//!     // 2. Publish a challenge record
//!     let challenge = Record::txt("_acme-challenge.example.com", "token", 600);
//!     provider.append_records("example.com.", &[challenge.clone()]).await?;
//!
//!     // 3. Inspect the zone
//!     for record in provider.get_records("example.com.").await? {
//!         println!("{record}");
//!     }
//!
//!     // 4. Clean up
//!     provider.delete_records("example.com.", &[challenge]).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Single operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::Configuration`]: missing credential or invalid configuration
//! - [`ProviderError::Transport`]: no response (connection refused, DNS, TLS)
//! - [`ProviderError::Timeout`]: the per-request `http_timeout` elapsed
//! - [`ProviderError::Api`]: the API answered with an unexpected status
//! - [`ProviderError::Decode`]: the response body was not the expected JSON
//!
//! Batch operations return a [`BatchError`] carrying the records processed
//! before the failure. Nothing is retried; [`ProviderError::is_transient`] helps
//! callers decide whether to retry themselves.
//!
//! ## Cancellation
//!
//! Operations run their requests one after another. Dropping the returned
//! future (for example through `tokio::time::timeout` or `tokio::select!`)
//! aborts the request in flight and issues no further ones.
//!
//! ## Consistency
//!
//! [`RecordSetter::set_records`] deletes before it appends and is not atomic. A
//! failure part-way can leave the zone partially modified; retry the call.

mod config;
mod error;
mod http_client;
mod providers;
mod registry;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{BatchError, BatchResult, ProviderError, Result};

// Re-export configuration
pub use config::{DEFAULT_HTTP_TIMEOUT, ProviderConfig};

// Re-export capability traits (internal traits are not exported)
pub use traits::{DnsRecordProvider, RecordAppender, RecordDeleter, RecordGetter, RecordSetter};

// Re-export types
pub use types::{Capability, Record};

// Re-export registry
pub use registry::{ProviderConstructor, ProviderRegistry};

// Re-export the GoDaddy provider
pub use providers::GodaddyProvider;
pub use providers::godaddy::{
    GODADDY_API_BASE, GODADDY_OTE_API_BASE, GODADDY_PROVIDER_ID, register,
};

// Re-export utils module
pub use utils::duration;
