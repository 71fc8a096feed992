//! GoDaddy Provider 真实 API 测试
//!
//! 运行方式（建议使用 OTE 测试环境）:
//! ```bash
//! GODADDY_API_KEY=xxx GODADDY_API_SECRET=xxx TEST_DOMAIN=example.com \
//! GODADDY_BASE_URL=https://api.ote-godaddy.com \
//!     cargo test -p godaddy-dns-provider --test godaddy_live_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{LiveContext, generate_test_record_name};
use godaddy_dns_provider::{Record, RecordAppender, RecordDeleter, RecordGetter, RecordSetter};

#[tokio::test]
#[ignore]
async fn test_godaddy_get_records() {
    skip_if_no_credentials!("GODADDY_API_KEY", "GODADDY_API_SECRET", "TEST_DOMAIN");

    let ctx = LiveContext::from_env().expect("创建测试上下文失败");
    let records = require_ok!(ctx.provider.get_records(&ctx.zone).await, "get_records 调用失败");

    println!("✓ get_records 测试通过，共 {} 条记录", records.len());
}

#[tokio::test]
#[ignore]
async fn test_godaddy_append_and_delete_txt() {
    skip_if_no_credentials!("GODADDY_API_KEY", "GODADDY_API_SECRET", "TEST_DOMAIN");

    let ctx = LiveContext::from_env().expect("创建测试上下文失败");
    let record = Record::txt(generate_test_record_name(), "live-test-value", 600);

    let appended = require_ok!(
        ctx.provider
            .append_records(&ctx.zone, std::slice::from_ref(&record))
            .await,
        "append_records 调用失败"
    );
    assert_eq!(appended, vec![record.clone()]);

    let records = require_ok!(ctx.provider.get_records(&ctx.zone).await);
    assert!(
        records.iter().any(|r| r.same_rrset(&record, &ctx.zone) && r.data == record.data),
        "新建记录未出现在列表中"
    );

    let deleted = require_ok!(
        ctx.provider
            .delete_records(&ctx.zone, std::slice::from_ref(&record))
            .await,
        "delete_records 调用失败"
    );
    assert_eq!(deleted.len(), 1);

    println!("✓ append/delete 测试通过: {record}");
}

#[tokio::test]
#[ignore]
async fn test_godaddy_set_records_replaces_value() {
    skip_if_no_credentials!("GODADDY_API_KEY", "GODADDY_API_SECRET", "TEST_DOMAIN");

    let ctx = LiveContext::from_env().expect("创建测试上下文失败");
    let name = generate_test_record_name();
    let first = Record::txt(name.clone(), "value-1", 600);
    let second = Record::txt(name, "value-2", 600);

    require_ok!(
        ctx.provider
            .append_records(&ctx.zone, std::slice::from_ref(&first))
            .await
    );
    require_ok!(
        ctx.provider
            .set_records(&ctx.zone, std::slice::from_ref(&second))
            .await,
        "set_records 调用失败"
    );

    let records = require_ok!(ctx.provider.get_records(&ctx.zone).await);
    let values: Vec<&str> = records
        .iter()
        .filter(|r| r.same_rrset(&second, &ctx.zone))
        .map(|r| r.data.as_str())
        .collect();
    assert_eq!(values, vec!["value-2"]);

    // 清理
    let cleanup = ctx
        .provider
        .delete_records(&ctx.zone, std::slice::from_ref(&second))
        .await;
    assert!(cleanup.is_ok(), "清理失败: {cleanup:?}");

    println!("✓ set_records 测试通过");
}
