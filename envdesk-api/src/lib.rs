//! envdesk 管理控制台的接口目录
//!
//! 每个接口都是 [`ConsoleApi`] 上的一个异步方法，由 `envdesk-macro` 根据
//! 方法、URL 和参数名生成实现，统一经过 `envdesk-common` 的请求管道。

use envdesk_macro::console_client;

pub mod console;
pub mod models;
pub mod session;
pub mod uitest;

pub use envdesk_common::{ApiError, ApiResult, ErrorKind};
pub use models::{
    BatchStatusUpdate, LoginData, LoginForm, PageQuery, StatusUpdate, TaskItemType, UserProfile,
};
pub use session::Session;

/// 控制台客户端
///
/// 克隆开销很小，所有克隆共享同一个传输客户端和凭证存储。
#[console_client]
pub struct ConsoleApi;
