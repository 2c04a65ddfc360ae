//! 执行一个测试单并增量打印日志，直到执行结束
//!
//! 用法: `task_runner <task_id>`，需要先用 env_overview 登录。

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use envdesk_api::ConsoleApi;
use envdesk_common::{AuthState, ConsoleConfig, FileAuthStore, Transport};

/// 测试单的终止状态
const FINISHED: &[&str] = &["已完成", "执行失败", "已取消"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let task_id: i64 = std::env::args()
        .nth(1)
        .context("usage: task_runner <task_id>")?
        .parse()
        .context("task_id must be an integer")?;

    let session_path =
        std::env::var("ENVDESK_SESSION").unwrap_or_else(|_| ".envdesk-session.json".to_string());
    let store = Arc::new(FileAuthStore::open(&session_path)?);
    if !store.is_authenticated() {
        anyhow::bail!("not logged in, run env_overview first");
    }

    let transport = Transport::builder(ConsoleConfig::active().base_url)
        .auth(store as Arc<dyn AuthState>)
        .build()?;
    let api = ConsoleApi::with_transport(Arc::new(transport));

    api.execute_test_task(task_id).await?;
    println!("=== 测试单 {} 已开始执行 ===", task_id);

    let mut offset = 0u64;
    loop {
        let log = api.get_test_task_log(task_id, offset).await?;
        if let Some(content) = log.get("content").and_then(|c| c.as_str()) {
            print!("{}", content);
        }
        if let Some(next) = log.get("offset").and_then(|o| o.as_u64()) {
            offset = next;
        }

        let progress = api.get_task_progress(task_id).await?;
        let status = progress
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or_default();
        if FINISHED.contains(&status) {
            println!("\n=== 执行结束: {} ===", status);
            break;
        }

        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    let reports = api.get_task_reports(task_id).await?;
    println!("报告:\n{}", serde_json::to_string_pretty(&reports)?);

    Ok(())
}
