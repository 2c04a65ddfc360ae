//! 登录会话
//!
//! 登录成功后把凭证和用户信息写进传输客户端的凭证存储；登出时无论后端是否成功都清空。

use envdesk_common::{ApiError, ApiResult, AuthState};

use crate::ConsoleApi;
use crate::models::{LoginForm, UserProfile};

pub struct Session {
    api: ConsoleApi,
}

impl Session {
    pub fn new(api: ConsoleApi) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ConsoleApi {
        &self.api
    }

    fn auth(&self) -> &dyn AuthState {
        self.api.transport().auth().as_ref()
    }

    /// 登录并保存凭证；失败时什么也不写
    pub async fn login(&self, form: &LoginForm) -> ApiResult<UserProfile> {
        let data = self.api.login(form).await?;
        let profile = UserProfile::from(&data);
        let info = serde_json::to_string(&profile)
            .map_err(|e| ApiError::decode(format!("Failed to encode user info: {}", e)))?;

        let auth = self.auth();
        auth.set_token(data.access_token);
        auth.set_user_info(info);
        log::info!("user {} logged in", profile.username);

        Ok(profile)
    }

    /// 登出，先清空本地会话再返回后端调用的结果
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self.api.logout().await;
        self.auth().clear();
        log::info!("session cleared");
        result
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth().is_authenticated()
    }

    /// 缓存的用户信息，无法解析时视为没有
    pub fn profile(&self) -> Option<UserProfile> {
        let info = self.auth().user_info()?;
        serde_json::from_str(&info).ok()
    }
}
