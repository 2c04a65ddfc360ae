/// 失败分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 响应信封 `code != 200`
    Domain,
    /// HTTP 401
    Unauthorized,
    /// 其他非 2xx 状态码
    Status(u16),
    /// 没有拿到任何响应
    Network,
    /// 请求构造失败（序列化、拦截器、请求头）
    Request,
    /// `data` 无法转换为调用方期望的类型
    Decode,
}

impl ErrorKind {
    /// 是否需要向用户弹出提示
    ///
    /// 401 以跳转登录页作为反馈；请求构造与解码错误原样交还调用方。
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            ErrorKind::Domain | ErrorKind::Status(_) | ErrorKind::Network
        )
    }
}

/// 管道返回的错误
///
/// `Display` 输出即面向用户的消息文本。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// 信封失败且没有 `msg` 时的提示
pub const NETWORK_ERROR: &str = "network error";
/// 401 的拒绝标记
pub const UNAUTHORIZED: &str = "unauthorized";
/// 完全没有响应时的提示
pub const CONNECTION_FAILED: &str = "network connection failed";

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn domain(msg: Option<&str>) -> Self {
        let message = match msg {
            Some(m) if !m.is_empty() => m,
            _ => NETWORK_ERROR,
        };
        Self::new(ErrorKind::Domain, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized, UNAUTHORIZED)
    }

    pub fn status(status: u16, msg: Option<&str>) -> Self {
        let message = match msg {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => format!("request failed, status: {}", status),
        };
        Self::new(ErrorKind::Status(status), message)
    }

    pub fn network() -> Self {
        Self::new(ErrorKind::Network, CONNECTION_FAILED)
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Request, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }
}
