use std::sync::Arc;

use super::notify::Notifier;
use super::unauthorized::UnauthorizedHandler;
use crate::auth::AuthState;
use crate::error::{ApiError, ErrorKind};

/// 失败处理
///
/// 分类在 `classify` 中完成，这里只执行副作用：
/// - 401：清除凭证与用户信息，触发未授权回调，不弹提示；
/// - 业务失败、其他状态码、网络失败：弹出一次提示；
/// - 请求构造与解码错误：原样返回。
pub struct FailureHandler {
    auth: Arc<dyn AuthState>,
    notifier: Arc<dyn Notifier>,
    on_unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl FailureHandler {
    pub fn new(
        auth: Arc<dyn AuthState>,
        notifier: Arc<dyn Notifier>,
        on_unauthorized: Arc<dyn UnauthorizedHandler>,
    ) -> Self {
        Self {
            auth,
            notifier,
            on_unauthorized,
        }
    }

    pub fn handle(&self, operation: &str, error: ApiError) -> ApiError {
        match error.kind {
            ErrorKind::Unauthorized => {
                log::warn!("{} rejected with 401, clearing credentials", operation);
                self.auth.clear();
                self.on_unauthorized.on_unauthorized();
            }
            kind if kind.is_user_visible() => {
                log::warn!("{} failed: {}", operation, error.message);
                self.notifier.error(&error.message);
            }
            _ => {
                log::debug!("{} failed before reaching the server: {}", operation, error.message);
            }
        }
        error
    }
}
