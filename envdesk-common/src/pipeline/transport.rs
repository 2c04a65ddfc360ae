use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::classify::{classify_status, unwrap_envelope};
use super::failure::FailureHandler;
use super::notify::{LogNotifier, Notifier};
use super::request::{OutgoingRequest, RequestOptions, query_pairs};
use super::unauthorized::{LoginRedirect, UnauthorizedHandler};
use crate::auth::{AuthState, MemoryAuthStore};
use crate::config::ConsoleConfig;
use crate::error::{ApiError, ApiResult};
use crate::interceptor::{BearerAuthInterceptor, ConsoleInterceptor};
use crate::types::ContentType;

/// 传输客户端
///
/// 进程启动时绑定一个基础地址，之后每次调用只发起一次请求，不重试、不设超时。
/// 所有目录接口都经由 [`Transport::send`] 发出。
pub struct Transport {
    client: reqwest::Client,
    base_url: String,
    auth: Arc<dyn AuthState>,
    interceptors: Vec<Arc<dyn ConsoleInterceptor>>,
    failures: FailureHandler,
}

impl Transport {
    pub fn builder(base_url: impl Into<String>) -> TransportBuilder {
        TransportBuilder::new(base_url)
    }

    /// 按构建时选定的环境创建，使用默认的内存凭证、日志提示与登录跳转
    pub fn for_config(config: &ConsoleConfig) -> ApiResult<Self> {
        Self::builder(config.base_url.clone()).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth(&self) -> &Arc<dyn AuthState> {
        &self.auth
    }

    /// 拼接完整地址，兼容带或不带前导斜杠的路径
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// 组装最终请求：放置数据、执行请求拦截器（首个是认证拦截器）
    pub async fn prepare(&self, request: &OutgoingRequest) -> ApiResult<reqwest::Request> {
        let mut builder = self
            .client
            .request(request.method.to_reqwest(), self.url_for(&request.path));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = match request.content_type {
                ContentType::Json => builder.json(body),
                ContentType::FormUrlEncoded => builder.form(&query_pairs(body)?),
            };
        }

        for interceptor in &self.interceptors {
            builder = interceptor.before_request(builder).await.map_err(|e| {
                ApiError::request(format!("Interceptor before_request failed: {}", e))
            })?;
        }

        builder
            .build()
            .map_err(|e| ApiError::request(format!("Failed to build request: {}", e)))
    }

    /// 发出请求并返回解包后的 `data`
    pub async fn send(&self, request: OutgoingRequest) -> ApiResult<Value> {
        let operation = request.operation;
        let prepared = match self.prepare(&request).await {
            Ok(prepared) => prepared,
            Err(e) => return Err(self.failures.handle(operation, e)),
        };

        log::debug!("{} {} {}", operation, prepared.method(), prepared.url());

        let mut response = match self.client.execute(prepared).await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("{} got no response: {}", operation, e);
                return Err(self.failures.handle(operation, ApiError::network()));
            }
        };

        for interceptor in self.interceptors.iter().rev() {
            response = match interceptor.after_response(response).await {
                Ok(response) => response,
                Err(e) => {
                    let error =
                        ApiError::request(format!("Interceptor after_response failed: {}", e));
                    return Err(self.failures.handle(operation, error));
                }
            };
        }

        let status = response.status();
        let outcome = if status.is_success() {
            match response.bytes().await {
                Ok(body) => unwrap_envelope(&body),
                Err(e) => {
                    log::debug!("{} failed to read response body: {}", operation, e);
                    Err(ApiError::network())
                }
            }
        } else {
            // 状态码已经确定分类，读不到响应体时按空体处理
            let body = match response.bytes().await {
                Ok(body) => body.to_vec(),
                Err(e) => {
                    log::debug!("{} failed to read {} response body: {}", operation, status, e);
                    Vec::new()
                }
            };
            Err(classify_status(status.as_u16(), &body))
        };

        match outcome {
            Ok(data) => {
                log::debug!("{} -> {}", operation, data);
                Ok(data)
            }
            Err(e) => Err(self.failures.handle(operation, e)),
        }
    }

    /// 发出请求并把 `data` 转换为指定类型
    pub async fn call<T: DeserializeOwned>(&self, request: OutgoingRequest) -> ApiResult<T> {
        let data = self.send(request).await?;
        decode_data(data)
    }

    /// 未经目录声明的通用调用
    pub async fn request(&self, options: RequestOptions) -> ApiResult<Value> {
        let request = options.into_request()?;
        self.send(request).await
    }
}

/// 把 `data` 转换为调用方期望的类型
pub fn decode_data<T: DeserializeOwned>(data: Value) -> ApiResult<T> {
    serde_json::from_value(data)
        .map_err(|e| ApiError::decode(format!("Failed to decode response data: {}", e)))
}

pub fn join_url(base_url: &str, path: &str) -> String {
    if path.is_empty() {
        return base_url.trim_end_matches('/').to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// 传输客户端构建器
pub struct TransportBuilder {
    base_url: String,
    client: Option<reqwest::Client>,
    auth: Option<Arc<dyn AuthState>>,
    notifier: Option<Arc<dyn Notifier>>,
    on_unauthorized: Option<Arc<dyn UnauthorizedHandler>>,
    interceptors: Vec<Arc<dyn ConsoleInterceptor>>,
}

impl TransportBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: None,
            auth: None,
            notifier: None,
            on_unauthorized: None,
            interceptors: Vec::new(),
        }
    }

    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn auth(mut self, auth: Arc<dyn AuthState>) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn on_unauthorized(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    /// 追加拦截器，排在认证拦截器之后
    pub fn interceptor(mut self, interceptor: Arc<dyn ConsoleInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> ApiResult<Transport> {
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .build()
                .map_err(|e| ApiError::request(format!("Failed to create HTTP client: {}", e)))?,
        };
        let auth = self
            .auth
            .unwrap_or_else(|| Arc::new(MemoryAuthStore::new()) as Arc<dyn AuthState>);
        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(LogNotifier) as Arc<dyn Notifier>);
        let on_unauthorized = self
            .on_unauthorized
            .unwrap_or_else(|| Arc::new(LoginRedirect) as Arc<dyn UnauthorizedHandler>);

        let mut interceptors: Vec<Arc<dyn ConsoleInterceptor>> =
            vec![Arc::new(BearerAuthInterceptor::new(auth.clone()))];
        interceptors.extend(self.interceptors);

        Ok(Transport {
            client,
            base_url: self.base_url,
            failures: FailureHandler::new(auth.clone(), notifier, on_unauthorized),
            auth,
            interceptors,
        })
    }
}
