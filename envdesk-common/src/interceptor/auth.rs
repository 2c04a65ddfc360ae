use async_trait::async_trait;
use std::sync::Arc;

use super::ConsoleInterceptor;
use crate::auth::AuthState;

/// 认证拦截器
///
/// 每次请求发出前读取当前凭证，存在时加上 `Authorization: Bearer <token>`，
/// 不存在时不改动请求头。从不阻塞，也从不让请求失败。
pub struct BearerAuthInterceptor {
    auth: Arc<dyn AuthState>,
}

impl BearerAuthInterceptor {
    pub fn new(auth: Arc<dyn AuthState>) -> Self {
        Self { auth }
    }
}

#[async_trait]
impl ConsoleInterceptor for BearerAuthInterceptor {
    async fn before_request(
        &self,
        request: reqwest::RequestBuilder,
    ) -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(match self.auth.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }
}
