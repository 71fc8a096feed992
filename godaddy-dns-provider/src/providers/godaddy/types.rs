//! GoDaddy API 类型定义

use serde::{Deserialize, Serialize};

use crate::types::Record;

/// GoDaddy DNS Record 结构（请求与响应共用）
///
/// 响应中的 `port`、`priority`、`weight` 等字段不会被读取。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GodaddyRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub data: String,
    pub ttl: u32,
}

impl GodaddyRecord {
    /// 构造请求体记录，`name` 需已转换为相对名称
    pub fn from_record(record: &Record, name: String) -> Self {
        Self {
            record_type: record.record_type.clone(),
            name,
            data: record.data.clone(),
            ttl: record.ttl,
        }
    }
}

impl From<GodaddyRecord> for Record {
    fn from(r: GodaddyRecord) -> Self {
        Self {
            record_type: r.record_type,
            name: r.name,
            data: r.data,
            ttl: r.ttl,
        }
    }
}

/// GoDaddy 错误响应体
#[derive(Debug, Deserialize)]
pub struct GodaddyApiError {
    pub code: String,
    #[serde(default)]
    pub message: String,
}
