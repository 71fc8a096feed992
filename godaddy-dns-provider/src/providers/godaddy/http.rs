//! GoDaddy HTTP 请求方法

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::normalize_domain_name;
use crate::traits::ProviderErrorMapper;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{GodaddyProvider, PROVIDER_NAME};

const APPLICATION_JSON: &str = "application/json";

impl GodaddyProvider {
    /// 构造带认证头和超时的请求，所有请求均经由此处
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, self.config.authorization())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .timeout(self.config.timeout())
    }

    /// `{base}/v1/domains/{domain}/records[/{segment}...]`
    ///
    /// 每个路径段单独做百分号编码。
    pub(crate) fn records_url(&self, zone: &str, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| self.config_error("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["v1", "domains", normalize_domain_name(zone), "records"])
            .extend(segments);
        Ok(url)
    }

    /// 发送请求，只接受 `accepted` 中的状态码
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
        accepted: &[u16],
    ) -> Result<String> {
        let method_name = method.to_string();
        let url_str = url.to_string();

        let mut builder = self.request(method, url);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let (status, response_text) =
            HttpUtils::execute_request(builder, PROVIDER_NAME, &method_name, &url_str).await?;

        if accepted.contains(&status) {
            Ok(response_text)
        } else {
            Err(self.map_status(status, response_text))
        }
    }

    /// GET，仅 200 视为成功，响应体按 JSON 解析
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response_text = self.send(Method::GET, url, None, &[200]).await?;
        HttpUtils::parse_json(&response_text, PROVIDER_NAME)
    }

    /// PATCH，仅 200 视为成功（201、204 均为错误）
    pub(crate) async fn patch_json<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<()> {
        let body = serde_json::to_string(body).map_err(|e| self.serialization_error(e))?;
        log::debug!("[{PROVIDER_NAME}] Request Body: {}", truncate_for_log(&body));
        self.send(Method::PATCH, url, Some(body), &[200]).await?;
        Ok(())
    }

    /// DELETE，200 与 204 视为成功
    pub(crate) async fn delete(&self, url: Url) -> Result<()> {
        self.send(Method::DELETE, url, None, &[200, 204]).await?;
        Ok(())
    }
}
