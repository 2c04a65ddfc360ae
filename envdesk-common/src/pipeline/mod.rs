//! 请求/响应管道
//!
//! 目录接口 → 参数路由 → 认证拦截 → 发送 → 信封解包或失败处理。

pub mod classify;
pub mod failure;
pub mod notify;
pub mod request;
pub mod transport;
pub mod unauthorized;

pub use classify::{Envelope, SUCCESS_CODE, classify_status, unwrap_envelope};
pub use failure::FailureHandler;
pub use notify::{LogNotifier, Notifier};
pub use request::{OutgoingRequest, RequestOptions, Routed, resolve_method, route_data};
pub use transport::{Transport, TransportBuilder, decode_data, join_url};
pub use unauthorized::{LOGIN_ROUTE, LoginRedirect, UnauthorizedHandler};
