use async_trait::async_trait;

/// 请求/响应拦截器
///
/// 每个请求发出前依次经过 `before_request`，拿到响应后按相反顺序经过
/// `after_response`。任一拦截器返回错误，本次调用以请求构造错误结束。
#[async_trait]
pub trait ConsoleInterceptor: Send + Sync {
    /// 请求前处理
    async fn before_request(
        &self,
        request: reqwest::RequestBuilder,
    ) -> anyhow::Result<reqwest::RequestBuilder>;

    /// 响应后处理，默认原样返回
    async fn after_response(
        &self,
        response: reqwest::Response,
    ) -> anyhow::Result<reqwest::Response> {
        Ok(response)
    }
}
