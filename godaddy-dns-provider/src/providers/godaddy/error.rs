//! GoDaddy error mapping

use crate::error::ProviderError;
use crate::traits::ProviderErrorMapper;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{GodaddyApiError, GodaddyProvider, PROVIDER_NAME};

/// GoDaddy reports failures as `{"code": "...", "message": "..."}` next to the
/// HTTP status. The status decides the error; the code only feeds the log line.
/// Reference: <https://developer.godaddy.com/doc/endpoint/domains>
impl ProviderErrorMapper for GodaddyProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_status(&self, status: u16, body: String) -> ProviderError {
        let summary = match serde_json::from_str::<GodaddyApiError>(&body) {
            Ok(api) => format!("{} {}", api.code, api.message),
            Err(_) => truncate_for_log(&body),
        };

        let error = ProviderError::Api {
            provider: self.provider_name().to_string(),
            status,
            body,
        };
        if error.is_expected() {
            log::warn!("[{PROVIDER_NAME}] API request failed: HTTP {status} {summary}");
        } else {
            log::error!("[{PROVIDER_NAME}] API request failed: HTTP {status} {summary}");
        }
        error
    }
}
