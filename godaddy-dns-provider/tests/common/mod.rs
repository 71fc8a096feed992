//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::{Arc, Mutex};

use godaddy_dns_provider::{GodaddyProvider, ProviderConfig, Record};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// 测试用 zone（带末尾点，与宿主传入的形式一致）
pub const ZONE: &str = "example.com.";

/// `ZONE` 对应的记录 API 路径
pub const RECORDS_PATH: &str = "/v1/domains/example.com/records";

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_API_SECRET: &str = "test-secret";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 指向 mock server 的 Provider
pub fn test_provider(server: &MockServer) -> GodaddyProvider {
    test_provider_with(server, ProviderConfig::new(TEST_API_KEY, TEST_API_SECRET))
}

/// 指向 mock server、使用自定义配置的 Provider
pub fn test_provider_with(server: &MockServer, config: ProviderConfig) -> GodaddyProvider {
    GodaddyProvider::new(config)
        .expect("provider should build")
        .with_base_url(&server.uri())
        .expect("mock server URI should be a valid base URL")
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 已记录请求的 `METHOD path` 列表，按到达顺序
pub async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| format!("{} {}", r.method, r.url.path()))
        .collect()
}

/// 有状态的 GoDaddy zone 模拟
///
/// - `GET    .../records`              -> 200 + 当前记录
/// - `PATCH  .../records`              -> 追加请求体中的记录，200
/// - `DELETE .../records/{type}/{name}` -> 删除该 (type, name) 的全部记录，204；
///   不存在时 404
#[derive(Clone, Default)]
pub struct FakeZone {
    records: Arc<Mutex<Vec<Record>>>,
}

impl FakeZone {
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// 当前 zone 内容
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().expect("zone lock poisoned").clone()
    }

    pub async fn mount(&self, server: &MockServer) {
        Mock::given(path_regex(r"^/v1/domains/example\.com/records(/.*)?$"))
            .respond_with(self.clone())
            .mount(server)
            .await;
    }
}

impl Respond for FakeZone {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut records = self.records.lock().expect("zone lock poisoned");
        let segments: Vec<String> = request
            .url
            .path_segments()
            .map(|s| s.skip(4).map(str::to_string).collect())
            .unwrap_or_default();

        match (request.method.as_str(), segments.as_slice()) {
            ("GET", []) => ResponseTemplate::new(200).set_body_json(&*records),
            ("PATCH", []) => match serde_json::from_slice::<Vec<Record>>(&request.body) {
                Ok(added) => {
                    records.extend(added);
                    ResponseTemplate::new(200)
                }
                Err(e) => ResponseTemplate::new(422).set_body_json(serde_json::json!({
                    "code": "INVALID_BODY",
                    "message": e.to_string(),
                })),
            },
            ("DELETE", [record_type, name]) => {
                let before = records.len();
                records.retain(|r| !(r.record_type == *record_type && r.name == *name));
                if records.len() == before {
                    ResponseTemplate::new(404).set_body_json(serde_json::json!({
                        "code": "NOT_FOUND",
                        "message": format!("No {record_type} records named {name}"),
                    }))
                } else {
                    ResponseTemplate::new(204)
                }
            }
            _ => ResponseTemplate::new(405),
        }
    }
}

/// 真实 API 测试上下文
pub struct LiveContext {
    pub provider: GodaddyProvider,
    pub zone: String,
}

impl LiveContext {
    /// 从环境变量创建；设置 `GODADDY_BASE_URL` 时指向该地址（如 OTE 环境 `https://api.ote-godaddy.com`）
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("GODADDY_API_KEY").ok()?;
        let api_secret = env::var("GODADDY_API_SECRET").ok()?;
        let zone = env::var("TEST_DOMAIN").ok()?;
        let mut provider = GodaddyProvider::new(ProviderConfig::new(api_key, api_secret)).ok()?;
        if let Ok(base_url) = env::var("GODADDY_BASE_URL") {
            provider = provider.with_base_url(&base_url).ok()?;
        }

        Some(Self { provider, zone })
    }
}
