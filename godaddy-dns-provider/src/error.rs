use serde::{Deserialize, Serialize};

use crate::types::Record;

/// Unified error type for all GoDaddy record operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Transient Errors
///
/// [`Transport`](Self::Transport) and [`Timeout`](Self::Timeout) happen before a response
/// is obtained and may succeed when the caller tries again. Nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The provider configuration is invalid (missing credential, unparsable option, etc.).
    ///
    /// Raised before any network activity takes place.
    Configuration {
        /// Provider that produced the error.
        provider: String,
        /// What is wrong with the configuration.
        detail: String,
    },

    /// The request could not be delivered (DNS resolution failure, connection refused, etc.).
    Transport {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The configured per-request timeout elapsed before a response arrived.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The upstream API answered with a status code outside the accepted set.
    Api {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code returned by the API.
        status: u16,
        /// Raw response body, kept verbatim for diagnostics.
        body: String,
    },

    /// The response body does not have the expected JSON shape.
    Decode {
        /// Provider that produced the error.
        provider: String,
        /// Details about the decode failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    Serialization {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// 请求未到达或未得到响应（可由上层重试）
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }

    /// 是否为预期行为（API 4xx、配置错误），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration { .. } => true,
            Self::Api { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// HTTP status of an [`Api`](Self::Api) error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration { provider, detail } => {
                write!(f, "[{provider}] Configuration error: {detail}")
            }
            Self::Transport { provider, detail } => {
                write!(f, "[{provider}] Transport error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::Api {
                provider,
                status,
                body,
            } => {
                if body.is_empty() {
                    write!(f, "[{provider}] API request failed: {status}")
                } else {
                    write!(f, "[{provider}] API request failed: {status} {body}")
                }
            }
            Self::Decode { provider, detail } => {
                write!(f, "[{provider}] Decode error: {detail}")
            }
            Self::Serialization { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Failure of a batch operation, together with the work that already happened.
///
/// Batch operations stop at the first failing record. `completed` holds the records
/// processed before it, in input order; they are not rolled back.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{source} ({} record(s) completed before the failure)", .completed.len())]
pub struct BatchError {
    /// Records successfully processed before the failure.
    pub completed: Vec<Record>,
    /// The first error encountered.
    #[source]
    pub source: ProviderError,
}

impl BatchError {
    /// A failure that happened before any record was processed.
    pub fn before_start(source: ProviderError) -> Self {
        Self {
            completed: Vec::new(),
            source,
        }
    }
}

impl From<ProviderError> for BatchError {
    fn from(source: ProviderError) -> Self {
        Self::before_start(source)
    }
}

/// Result type of the batch operations.
pub type BatchResult = std::result::Result<Vec<Record>, BatchError>;
