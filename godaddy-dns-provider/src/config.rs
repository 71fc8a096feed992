//! Provider configuration
//!
//! The option names (`api_key`, `api_secret`, `http_timeout`) are shared with the
//! host's JSON configuration and must not change.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::providers::godaddy::PROVIDER_NAME;
use crate::utils::duration::parse_duration;
use crate::utils::log_sanitizer::mask_secret;

/// Timeout applied to every request when `http_timeout` is unset or zero.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and transport settings of the GoDaddy adapter.
///
/// Construct it in code, from host JSON ([`from_json`](Self::from_json)) or from a
/// directive block ([`from_directives`](Self::from_directives)). Parsing does not
/// validate; [`provision`](Self::provision) does, and
/// [`GodaddyProvider::new`](crate::GodaddyProvider::new) calls it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// GoDaddy API key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    /// GoDaddy API secret.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_secret: String,
    /// Per-request HTTP timeout. `None` or zero means [`DEFAULT_HTTP_TIMEOUT`].
    #[serde(
        default,
        with = "crate::utils::duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub http_timeout: Option<Duration>,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            http_timeout: None,
        }
    }

    #[must_use]
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = Some(timeout);
        self
    }

    /// Effective per-request timeout.
    pub fn timeout(&self) -> Duration {
        match self.http_timeout {
            Some(timeout) if !timeout.is_zero() => timeout,
            _ => DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Check that both credentials are present. Whitespace-only values count as empty.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(config_error("GoDaddy API key cannot be empty"));
        }
        if self.api_secret.trim().is_empty() {
            return Err(config_error("GoDaddy API secret cannot be empty"));
        }
        Ok(())
    }

    /// Validate the credentials and fill in the default timeout.
    ///
    /// Performs no network activity.
    pub fn provision(&mut self) -> Result<()> {
        self.validate()?;
        if self.http_timeout.is_none_or(|t| t.is_zero()) {
            self.http_timeout = Some(DEFAULT_HTTP_TIMEOUT);
        }
        Ok(())
    }

    /// Value of the `Authorization` header.
    pub(crate) fn authorization(&self) -> String {
        format!("sso-key {}:{}", self.api_key, self.api_secret)
    }

    /// Parse the host's JSON representation.
    ///
    /// `http_timeout` accepts a duration string (`"45s"`) or integer nanoseconds.
    /// Unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| config_error(format!("invalid JSON: {e}")))
    }

    /// Parse a directive block:
    ///
    /// ```text
    /// godaddy {
    ///     api_key      <key>
    ///     api_secret   <secret>
    ///     http_timeout 45s
    /// }
    /// ```
    ///
    /// The block is optional (`godaddy` alone yields an empty config). Each option takes
    /// exactly one value; values may be double-quoted. `#` starts a comment.
    pub fn from_directives(input: &str) -> Result<Self> {
        let lines = tokenize(input)?;
        let mut lines = lines.into_iter();

        let Some(head) = lines.next() else {
            return Err(config_error("missing provider directive"));
        };
        let directive = &head.tokens[0];
        match &head.tokens[1..] {
            [] => {
                if let Some(extra) = lines.next() {
                    return Err(config_error(format!(
                        "line {}: unexpected '{}' after '{directive}'",
                        extra.number, extra.tokens[0]
                    )));
                }
                return Ok(Self::default());
            }
            [brace] if brace == "{" => {}
            _ => {
                return Err(config_error(format!(
                    "line {}: wrong argument count or unexpected line ending after '{directive}'",
                    head.number
                )));
            }
        }

        let mut config = Self::default();
        let mut closed = false;
        for line in lines.by_ref() {
            let option = line.tokens[0].as_str();
            if option == "}" && line.tokens.len() == 1 {
                closed = true;
                break;
            }
            let [_, value] = line.tokens.as_slice() else {
                return Err(config_error(format!(
                    "line {}: wrong argument count or unexpected line ending after '{option}'",
                    line.number
                )));
            };
            match option {
                "api_key" => config.api_key.clone_from(value),
                "api_secret" => config.api_secret.clone_from(value),
                "http_timeout" => {
                    let timeout = parse_duration(value).map_err(|e| {
                        config_error(format!("failed to parse http_timeout: {e}"))
                    })?;
                    config.http_timeout = Some(timeout);
                }
                other => {
                    return Err(config_error(format!(
                        "line {}: unknown configuration option: {other}",
                        line.number
                    )));
                }
            }
        }

        if !closed {
            return Err(config_error(format!("unclosed block for '{directive}'")));
        }
        if let Some(extra) = lines.next() {
            return Err(config_error(format!(
                "line {}: unexpected '{}' after closing brace",
                extra.number, extra.tokens[0]
            )));
        }
        Ok(config)
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_secret", &mask_secret(&self.api_secret))
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

fn config_error(detail: impl Into<String>) -> ProviderError {
    ProviderError::Configuration {
        provider: PROVIDER_NAME.to_string(),
        detail: detail.into(),
    }
}

/// A non-empty line of the directive block.
struct DirectiveLine {
    number: usize,
    tokens: Vec<String>,
}

fn tokenize(input: &str) -> Result<Vec<DirectiveLine>> {
    let mut lines = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let number = index + 1;
        let tokens = tokenize_line(raw)
            .map_err(|detail| config_error(format!("line {number}: {detail}")))?;
        if !tokens.is_empty() {
            lines.push(DirectiveLine { number, tokens });
        }
    }
    Ok(lines)
}

fn tokenize_line(raw: &str) -> std::result::Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut chars = raw.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '#' {
            break;
        } else if c == '"' {
            chars.next();
            let mut token = String::new();
            loop {
                match chars.next() {
                    Some('\\') => match chars.next() {
                        Some(escaped) => token.push(escaped),
                        None => return Err("unterminated quoted string".to_string()),
                    },
                    Some('"') => break,
                    Some(other) => token.push(other),
                    None => return Err("unterminated quoted string".to_string()),
                }
            }
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() {
                    break;
                }
                token.push(next);
                chars.next();
            }
            tokens.push(token);
        }
    }
    Ok(tokens)
}
