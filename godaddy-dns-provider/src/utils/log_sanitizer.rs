//! Log sanitization utilities
//!
//! Keeps API credentials and large response bodies out of debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible.
const VISIBLE_SECRET_CHARS: usize = 4;

/// Truncate a response body for safe logging.
///
/// Bodies within the limit are returned unchanged; longer ones are cut at a
/// char boundary and suffixed with their total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// Mask a credential, keeping only a short prefix.
///
/// `"abcdef123456"` -> `"abcd********"`. Secrets no longer than the visible
/// prefix are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= VISIBLE_SECRET_CHARS {
        return "*".repeat(count);
    }
    let prefix: String = secret.chars().take(VISIBLE_SECRET_CHARS).collect();
    format!("{prefix}{}", "*".repeat(count - VISIBLE_SECRET_CHARS))
}
