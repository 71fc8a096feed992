use async_trait::async_trait;

use crate::error::{BatchResult, ProviderError, Result};
use crate::types::{Capability, Record};

/// 错误映射 Trait（内部使用）
/// Provider 实现此 trait 以将 HTTP 层结果映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将非成功状态码映射到统一错误类型
    fn map_status(&self, status: u16, body: String) -> ProviderError;

    /// 快捷方法：配置错误
    fn config_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::Configuration {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：请求体序列化错误
    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::Serialization {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Lists the records of a zone.
#[async_trait]
pub trait RecordGetter: Send + Sync {
    /// Returns every record currently stored upstream for `zone`.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;
}

/// Adds records to a zone.
#[async_trait]
pub trait RecordAppender: Send + Sync {
    /// Creates `records` in input order and returns the ones created.
    ///
    /// Stops at the first failure; the [`BatchError`](crate::BatchError) carries the
    /// records created before it.
    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}

/// Removes records from a zone.
#[async_trait]
pub trait RecordDeleter: Send + Sync {
    /// Deletes `records` in input order and returns the ones deleted.
    ///
    /// Stops at the first failure; the [`BatchError`](crate::BatchError) carries the
    /// records deleted before it.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}

/// Replaces the records of the `(type, name)` pairs present in the input.
#[async_trait]
pub trait RecordSetter: Send + Sync {
    /// Makes the upstream records for every `(type, name)` in `records` equal to
    /// `records`, leaving other pairs untouched. Returns the records written.
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}

/// A provider offering all four record capabilities.
///
/// This is the object type the [`ProviderRegistry`](crate::ProviderRegistry) hands out.
pub trait DnsRecordProvider: RecordGetter + RecordAppender + RecordDeleter + RecordSetter {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Capabilities implemented by this provider.
    fn capabilities(&self) -> &'static [Capability] {
        &Capability::ALL
    }
}
