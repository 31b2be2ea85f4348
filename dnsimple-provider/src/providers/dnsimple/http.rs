//! DNSimple HTTP 请求方法
//!
//! One method per API call. Each performs a single request and never retries.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::ProviderErrorMapper;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{DnsimpleRecord, DnsimpleResponse};

/// Borrowed view of a provider's configuration, built per operation.
pub struct DnsimpleClient<'a> {
    pub(crate) http: &'a Client,
    pub(crate) base_url: &'a str,
    pub(crate) api_token: &'a str,
    pub(crate) account_id: &'a str,
}

impl DnsimpleClient<'_> {
    /// `{base}/v2/{account}/zones/{zone}/records`
    fn records_url(&self, zone: &str) -> String {
        format!(
            "{}/v2/{}/zones/{}/records",
            self.base_url,
            urlencoding::encode(self.account_id),
            urlencoding::encode(zone)
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Accept", "application/json")
    }

    /// 执行请求并解析 `{"data": ...}` 信封
    async fn request<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<T> {
        let (_status, response_text) =
            HttpUtils::execute_request(self.authorized(builder), self.provider_name(), method, url)
                .await?;

        let response: DnsimpleResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;
        Ok(response.data)
    }

    /// 获取 zone 内全部记录
    pub async fn list_records(&self, zone: &str) -> Result<Vec<DnsimpleRecord>> {
        let url = self.records_url(zone);
        self.request(self.http.get(&url), "GET", &url).await
    }

    /// 创建记录，返回服务端保存后的记录（含 id 与时间戳）
    pub async fn create_record(
        &self,
        zone: &str,
        record: &DnsimpleRecord,
    ) -> Result<DnsimpleRecord> {
        let payload = serde_json::to_string(record).map_err(|e| self.serialization_error(e))?;
        log::debug!("Request Body: {}", truncate_for_log(&payload));

        let url = self.records_url(zone);
        let builder = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .body(payload);

        self.request(builder, "POST", &url).await
    }

    /// 删除记录。响应体被忽略。
    pub async fn delete_record(&self, zone: &str, id: u64) -> Result<()> {
        let url = format!("{}/{id}", self.records_url(zone));
        HttpUtils::execute_request(
            self.authorized(self.http.delete(&url)),
            self.provider_name(),
            "DELETE",
            &url,
        )
        .await?;
        Ok(())
    }
}
