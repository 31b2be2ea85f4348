//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;
use std::time::Duration;

use dnsimple_provider::{
    DNSIMPLE_SANDBOX_API_BASE, DnsimpleProvider, ProviderConfig, Record, RecordProvider,
    create_provider,
};
use wiremock::MockServer;

/// Token and account used against mock servers.
pub const TEST_TOKEN: &str = "test-token-12345";
pub const TEST_ACCOUNT: &str = "1010";

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

/// Provider pointed at a wiremock server.
pub fn mock_provider(server: &MockServer) -> DnsimpleProvider {
    let config = ProviderConfig::new(TEST_TOKEN, TEST_ACCOUNT).with_base_url(server.uri());
    DnsimpleProvider::new(config).expect("HTTP client should build")
}

/// Collection path for a zone on the mock server.
pub fn records_path(zone: &str) -> String {
    format!("/v2/{TEST_ACCOUNT}/zones/{zone}/records")
}

/// DNSimple-shaped stored record.
pub fn stored_record(
    id: u64,
    record_type: &str,
    name: &str,
    content: &str,
    ttl: u32,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "zone_id": "example.com",
        "parent_id": null,
        "name": name,
        "content": content,
        "ttl": ttl,
        "priority": null,
        "type": record_type,
        "regions": ["global"],
        "system_record": false,
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z"
    })
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 Provider 和测试域名（DNSimple sandbox）
pub struct TestContext {
    pub provider: Arc<dyn RecordProvider>,
    pub zone: String,
}

impl TestContext {
    /// 从环境变量创建 sandbox 测试上下文
    pub fn sandbox() -> Option<Self> {
        let api_token = env::var("DNSIMPLE_API_TOKEN").ok()?;
        let account_id = env::var("DNSIMPLE_ACCOUNT_ID").ok()?;
        let zone = env::var("TEST_DOMAIN").ok()?;

        let config =
            ProviderConfig::new(api_token, account_id).with_base_url(DNSIMPLE_SANDBOX_API_BASE);
        let provider = create_provider(config).ok()?;

        Some(Self { provider, zone })
    }

    /// 生成一条 TXT 测试记录
    pub fn test_record(&self) -> Record {
        Record::new("TXT", generate_test_record_name(), "integration-test")
            .with_ttl(Duration::from_secs(600))
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self) {
        if let Ok(records) = self.provider.get_records(&self.zone).await {
            let leftovers: Vec<Record> = records
                .into_iter()
                .filter(|r| r.name.starts_with("_test-"))
                .collect();
            let _ = self.provider.delete_records(&self.zone, &leftovers).await;
        }
    }
}
