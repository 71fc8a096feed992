//! Explicit provider registry
//!
//! The host builds a registry, asks each adapter crate to register itself, and
//! then creates providers by identifier:
//!
//! ```rust,no_run
//! use godaddy_dns_provider::{
//!     DnsRecordProvider, GODADDY_PROVIDER_ID, ProviderConfig, ProviderRegistry,
//! };
//!
//! # fn main() -> godaddy_dns_provider::Result<()> {
//! let mut registry = ProviderRegistry::new();
//! godaddy_dns_provider::register(&mut registry)?;
//!
//! let provider = registry.create(GODADDY_PROVIDER_ID, ProviderConfig::new("key", "secret"))?;
//! assert_eq!(provider.id(), GODADDY_PROVIDER_ID);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::traits::DnsRecordProvider;
use crate::types::Capability;

/// Builds a provider from its configuration.
pub type ProviderConstructor = fn(ProviderConfig) -> Result<Arc<dyn DnsRecordProvider>>;

struct RegisteredProvider {
    constructor: ProviderConstructor,
    capabilities: Vec<Capability>,
}

/// Maps provider identifiers to constructors and declared capabilities.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, RegisteredProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider under `id`.
    ///
    /// # Errors
    /// `ProviderError::Configuration` if `id` is already registered or
    /// `capabilities` is empty.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        constructor: ProviderConstructor,
        capabilities: &[Capability],
    ) -> Result<()> {
        let id = id.into();
        if capabilities.is_empty() {
            return Err(registry_error(&id, "provider declares no capabilities"));
        }
        if self.providers.contains_key(&id) {
            return Err(registry_error(&id, "provider is already registered"));
        }

        let mut capabilities = capabilities.to_vec();
        capabilities.sort_unstable();
        capabilities.dedup();

        log::debug!("Registered DNS provider '{id}' with {capabilities:?}");
        self.providers.insert(
            id,
            RegisteredProvider {
                constructor,
                capabilities,
            },
        );
        Ok(())
    }

    /// Builds the provider registered under `id`.
    ///
    /// Constructor errors (such as missing credentials) are returned unchanged.
    pub fn create(&self, id: &str, config: ProviderConfig) -> Result<Arc<dyn DnsRecordProvider>> {
        let entry = self
            .providers
            .get(id)
            .ok_or_else(|| registry_error(id, "unknown DNS provider"))?;
        (entry.constructor)(config)
    }

    /// Capabilities declared for `id`, sorted, or `None` if unknown.
    pub fn capabilities(&self, id: &str) -> Option<&[Capability]> {
        self.providers.get(id).map(|p| p.capabilities.as_slice())
    }

    pub fn supports(&self, id: &str, capability: Capability) -> bool {
        self.capabilities(id)
            .is_some_and(|caps| caps.contains(&capability))
    }

    /// Registered identifiers in lexical order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

fn registry_error(id: &str, detail: &str) -> ProviderError {
    ProviderError::Configuration {
        provider: id.to_string(),
        detail: detail.to_string(),
    }
}
