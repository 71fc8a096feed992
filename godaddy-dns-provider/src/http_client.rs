//! Generic HTTP client tools
//!
//! Request sending and JSON decoding shared by provider implementations.
//! Providers build their own `RequestBuilder` (URL, auth headers, timeout) and
//! hand it over here.
//!
//! Nothing in this module retries: every failure is returned to the caller as-is.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body, timeout)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", "PATCH", used for logs)
    /// * `url` - request URL (for logs)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any status, including non-2xx
    /// * `Err(ProviderError::Timeout)` - the per-request timeout elapsed
    /// * `Err(ProviderError::Transport)` - no response could be obtained
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(&e, provider_name))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| transport_error(&e, provider_name))?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::Decode)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::Decode {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// Classify a `reqwest` failure that happened before a full response was read
fn transport_error(error: &reqwest::Error, provider_name: &str) -> ProviderError {
    if error.is_timeout() {
        log::error!("[{provider_name}] Request timed out: {error}");
        ProviderError::Timeout {
            provider: provider_name.to_string(),
            detail: error.to_string(),
        }
    } else {
        log::error!("[{provider_name}] Request failed: {error}");
        ProviderError::Transport {
            provider: provider_name.to_string(),
            detail: error.to_string(),
        }
    }
}
