//! 环境信息与用户管理接口

use envdesk_common::ApiResult;
use envdesk_macro::{delete, get, post};
use serde_json::Value;

use crate::ConsoleApi;
use crate::models::{LoginData, LoginForm};

impl ConsoleApi {
    /// 当前用户可见的菜单
    #[get(url = "api/user/get_menu")]
    pub async fn get_menu_data(&self) -> ApiResult<Value> {}

    /// 环境列表，筛选条件放在查询字符串里
    #[get(url = "api/env/envs")]
    pub async fn get_env_data(&self, data: &Value) -> ApiResult<Value> {}

    #[get(url = "api/user/info")]
    pub async fn get_user_data(&self, data: &Value) -> ApiResult<Value> {}

    #[post(url = "api/user/add_user")]
    pub async fn add_user(&self, data: &Value) -> ApiResult<Value> {}

    #[delete(url = "api/user/delete_user")]
    pub async fn delete_user(&self, data: &Value) -> ApiResult<Value> {}

    #[post(url = "api/user/reset_password")]
    pub async fn reset_password(&self, data: &Value) -> ApiResult<Value> {}

    /// OAuth2 密码模式登录，表单提交
    ///
    /// 只返回凭证，不写入存储；需要保存会话时使用 [`crate::Session::login`]。
    #[post(url = "api/login", content_type = form_urlencoded)]
    pub async fn login(&self, data: &LoginForm) -> ApiResult<LoginData> {}

    #[post(url = "api/logout")]
    pub async fn logout(&self) -> ApiResult<()> {}

    /// 所有项目名称
    #[get(url = "api/env/projects")]
    pub async fn get_project_name(&self) -> ApiResult<Value> {}

    /// 所有项目及其环境
    #[get(url = "api/env/project_envs")]
    pub async fn get_project_env(&self) -> ApiResult<Value> {}

    /// 环境当前的版本信息
    #[get(url = "api/env/env_versions")]
    pub async fn get_version_data(&self, data: &Value) -> ApiResult<Value> {}

    /// 强制刷新环境版本信息
    #[post(url = "api/env/refresh_env_versions")]
    pub async fn refresh_version(&self, data: &Value) -> ApiResult<Value> {}
}
