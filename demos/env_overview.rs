//! 登录控制台并打印所有项目的环境与版本
//!
//! 凭证保存在 `ENVDESK_SESSION` 指定的文件里（默认 `.envdesk-session.json`），
//! 再次运行时如果文件里已有凭证就跳过登录。

use std::sync::Arc;

use async_trait::async_trait;
use envdesk_api::{ConsoleApi, LoginForm, Session};
use envdesk_common::{
    AuthState, ConsoleConfig, ConsoleInterceptor, FileAuthStore, RequestOptions, Transport,
};
use serde_json::json;

/// 记录每个响应的状态码
struct StatusLogger;

#[async_trait]
impl ConsoleInterceptor for StatusLogger {
    async fn before_request(
        &self,
        request: reqwest::RequestBuilder,
    ) -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(request.header("X-Client", "envdesk-demos"))
    }

    async fn after_response(
        &self,
        response: reqwest::Response,
    ) -> anyhow::Result<reqwest::Response> {
        log::info!("{} -> {}", response.url().path(), response.status());
        Ok(response)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ConsoleConfig::active();
    println!("=== envdesk 环境概览 ({} @ {}) ===\n", config.env, config.base_url);

    let session_path =
        std::env::var("ENVDESK_SESSION").unwrap_or_else(|_| ".envdesk-session.json".to_string());
    let store = Arc::new(FileAuthStore::open(&session_path)?);

    let transport = Transport::builder(config.base_url.clone())
        .auth(store.clone() as Arc<dyn AuthState>)
        .interceptor(Arc::new(StatusLogger))
        .build()?;
    let api = ConsoleApi::with_transport(Arc::new(transport));
    let session = Session::new(api.clone());

    if !session.is_authenticated() {
        let username = std::env::var("ENVDESK_USER").unwrap_or_else(|_| "admin".to_string());
        let password = std::env::var("ENVDESK_PASSWORD").unwrap_or_default();
        let profile = session.login(&LoginForm::new(username, password)).await?;
        println!("已登录: {} (id={})\n", profile.username, profile.user_id);
    }

    let projects = api.get_project_env().await?;
    println!("项目与环境:\n{}\n", serde_json::to_string_pretty(&projects)?);

    let envs = api.get_env_data(&json!({"page": 1, "size": 20})).await?;
    println!("环境列表:\n{}\n", serde_json::to_string_pretty(&envs)?);

    // 未声明在目录里的接口走通用入口
    let menu = api
        .transport()
        .request(RequestOptions::new("api/user/get_menu").method("get"))
        .await?;
    println!("菜单:\n{}", serde_json::to_string_pretty(&menu)?);

    Ok(())
}
