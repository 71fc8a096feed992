//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// 创建 HTTP Client
///
/// 建立连接同样受 `timeout` 限制；整个请求的超时按请求设置（见 `GodaddyProvider::request`）。
pub fn create_http_client(provider: &str, timeout: Duration) -> Result<Client> {
    Client::builder()
        .connect_timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Configuration {
            provider: provider.to_string(),
            detail: format!("failed to build HTTP client: {e}"),
        })
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// 将记录名称转换为 API 使用的相对名称
/// 如: "www.example.com" + "example.com" -> "www"
/// 如: "example.com" + "example.com" -> "@"
/// 如: "www" + "example.com" -> "www"（已是相对名称）
/// 如: "" + "example.com" -> "@"
pub fn full_name_to_relative(name: &str, zone_name: &str) -> String {
    let full = normalize_domain_name(name);
    let zone = normalize_domain_name(zone_name);

    if full.is_empty() || full == "@" || full.eq_ignore_ascii_case(zone) {
        return "@".to_string();
    }

    match full.len().checked_sub(zone.len() + 1) {
        Some(split)
            if full.is_char_boundary(split)
                && full[split..].starts_with('.')
                && full[split + 1..].eq_ignore_ascii_case(zone) =>
        {
            full[..split].to_string()
        }
        _ => full.to_string(),
    }
}

/// `(type, name)` 比较键：类型大写，名称相对化
pub fn rrset_key(record_type: &str, name: &str, zone_name: &str) -> (String, String) {
    (
        record_type.to_ascii_uppercase(),
        full_name_to_relative(name, zone_name).to_ascii_lowercase(),
    )
}
