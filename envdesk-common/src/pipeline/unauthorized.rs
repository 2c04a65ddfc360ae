/// 登录页路由
pub const LOGIN_ROUTE: &str = "/login";

/// 收到 401 时的回调
///
/// 由宿主应用提供，通常是跳转到登录页。凭证在回调之前已被清除。
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self);
}

impl<F> UnauthorizedHandler for F
where
    F: Fn() + Send + Sync,
{
    fn on_unauthorized(&self) {
        self()
    }
}

/// 默认实现，只记录需要跳转的登录路由
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginRedirect;

impl UnauthorizedHandler for LoginRedirect {
    fn on_unauthorized(&self) {
        log::warn!("Session is no longer authorized, redirecting to {}", LOGIN_ROUTE);
    }
}
