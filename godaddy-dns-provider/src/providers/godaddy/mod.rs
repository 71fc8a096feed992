//! GoDaddy DNS Provider
//!
//! Talks to the GoDaddy Domains REST API (`/v1/domains/{domain}/records`):
//! list, additive `PATCH`, and delete by `(type, name)`.

mod error;
mod http;
mod provider;
mod types;

use std::sync::Arc;

use reqwest::{Client, Url};

use crate::config::ProviderConfig;
use crate::error::{ProviderError, Result};
use crate::providers::common::create_http_client;
use crate::registry::ProviderRegistry;
use crate::traits::DnsRecordProvider;
use crate::types::Capability;

pub(crate) use types::{GodaddyApiError, GodaddyRecord};

/// Name used in logs and error messages.
pub(crate) const PROVIDER_NAME: &str = "godaddy";

/// Registry identifier of the GoDaddy adapter.
pub const GODADDY_PROVIDER_ID: &str = "dns.providers.godaddy";

/// Production API endpoint.
pub const GODADDY_API_BASE: &str = "https://api.godaddy.com";

/// GoDaddy OTE (test environment) endpoint.
pub const GODADDY_OTE_API_BASE: &str = "https://api.ote-godaddy.com";

/// GoDaddy DNS Provider
///
/// Cheap to share behind an `Arc`: it holds a pooled `reqwest::Client` and an
/// immutable, already provisioned configuration.
pub struct GodaddyProvider {
    pub(crate) client: Client,
    pub(crate) config: ProviderConfig,
    pub(crate) base_url: Url,
}

impl GodaddyProvider {
    /// Provisions `config` and builds the provider.
    ///
    /// Fails with [`ProviderError::Configuration`] when the API key or secret is
    /// empty. No request is sent.
    pub fn new(mut config: ProviderConfig) -> Result<Self> {
        config.provision()?;
        let base_url = parse_base_url(GODADDY_API_BASE)?;
        Ok(Self {
            client: create_http_client(PROVIDER_NAME, config.timeout())?,
            config,
            base_url,
        })
    }

    /// Points the provider at another endpoint, e.g. [`GODADDY_OTE_API_BASE`].
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Effective configuration (credentials redacted in `Debug`).
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url).map_err(|e| ProviderError::Configuration {
        provider: PROVIDER_NAME.to_string(),
        detail: format!("invalid base URL '{base_url}': {e}"),
    })?;
    if url.cannot_be_a_base() {
        return Err(ProviderError::Configuration {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("invalid base URL '{base_url}': not a hierarchical URL"),
        });
    }
    Ok(url)
}

fn construct(config: ProviderConfig) -> Result<Arc<dyn DnsRecordProvider>> {
    Ok(Arc::new(GodaddyProvider::new(config)?))
}

/// Registers the GoDaddy adapter under [`GODADDY_PROVIDER_ID`].
pub fn register(registry: &mut ProviderRegistry) -> Result<()> {
    registry.register(GODADDY_PROVIDER_ID, construct, &Capability::ALL)
}
