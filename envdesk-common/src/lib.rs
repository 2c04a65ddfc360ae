//! envdesk 控制台客户端的公共部分
//!
//! 包含所有接口共用的请求/响应管道（参数路由、认证注入、信封解包、失败处理）、
//! 凭证存储、环境配置表，以及 `envdesk-macro` 使用的宏参数解析。

pub mod auth;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod parsing;
pub mod pipeline;
pub mod types;

pub use auth::{AuthState, FileAuthStore, MemoryAuthStore, TOKEN_KEY, USER_INFO_KEY};
pub use config::{ConsoleConfig, ENVIRONMENTS, Environment};
pub use error::{ApiError, ApiResult, ErrorKind};
pub use interceptor::{BearerAuthInterceptor, ConsoleInterceptor};
pub use parsing::{parse_console_client_args, parse_handler_args};
pub use pipeline::{
    LOGIN_ROUTE, LogNotifier, LoginRedirect, Notifier, OutgoingRequest, RequestOptions,
    Transport, TransportBuilder, UnauthorizedHandler, decode_data,
};
pub use types::{
    ConsoleClientArgs, ContentType, HandlerArgs, HttpMethod, OperationDescriptor,
    PayloadLocation, extract_placeholders,
};
