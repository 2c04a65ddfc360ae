//! 登录凭证存储
//!
//! 凭证与用户信息是两条扁平字符串记录，登录时写入，登出或收到 401 时一起清除。
//! 请求期间只读取凭证。

pub mod file;
pub mod memory;

pub use file::FileAuthStore;
pub use memory::MemoryAuthStore;

/// 凭证记录的键名
pub const TOKEN_KEY: &str = "token";
/// 用户信息记录的键名
pub const USER_INFO_KEY: &str = "userInfo";

/// 凭证状态
///
/// 读取返回写入前或写入后的完整值，不会出现中间状态；
/// 写入之后发出的请求一定能看到新值。
pub trait AuthState: Send + Sync {
    /// 当前的 bearer 凭证，`None` 表示未登录
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: String);

    /// 序列化后的用户信息
    fn user_info(&self) -> Option<String>;

    fn set_user_info(&self, info: String);

    /// 同时清除凭证与用户信息
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
