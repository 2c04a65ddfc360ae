use serde::{Deserialize, Serialize};

/// 登录表单，以 `application/x-www-form-urlencoded` 提交
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// 登录成功后返回的数据
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user_id: i64,
    pub username: String,
}

/// 缓存在凭证存储里的用户信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub username: String,
}

impl From<&LoginData> for UserProfile {
    fn from(data: &LoginData) -> Self {
        Self {
            user_id: data.user_id,
            username: data.username.clone(),
        }
    }
}

/// UI 测试平台列表接口的分页参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, page_size: 20 }
    }
}

/// 产品状态，例如 "启用" / "禁用"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: String,
}

impl StatusUpdate {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// 批量更新用例状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchStatusUpdate {
    pub case_ids: Vec<i64>,
    pub status: String,
}

/// 测试单内容的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskItemType {
    Case,
    Suite,
}
