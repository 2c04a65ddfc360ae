use envdesk_common::ApiResult;
use envdesk_macro::{delete, get, post, put};
use serde_json::Value;

use crate::ConsoleApi;

impl ConsoleApi {
    #[post(url = "/api/ui-test/test-users")]
    pub async fn create_test_user(&self, data: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-users")]
    pub async fn get_test_users(&self, params: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-users/{user_id}")]
    pub async fn get_test_user_detail(&self, user_id: i64) -> ApiResult<Value> {}

    #[put(url = "/api/ui-test/test-users/{user_id}")]
    pub async fn update_test_user(&self, user_id: i64, data: &Value) -> ApiResult<Value> {}

    /// `force` 为 true 时连同引用一起删除
    #[delete(url = "/api/ui-test/test-users/{user_id}")]
    pub async fn delete_test_user(&self, user_id: i64, force: bool) -> ApiResult<()> {}

    /// 测试用户可选的产品
    #[get(url = "/api/ui-test/test-users/products/list")]
    pub async fn get_products(&self) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-users/roles/list")]
    async fn fetch_roles(&self, product: Option<&str>) -> ApiResult<Value> {}

    /// 角色列表，`product` 为空时返回全部
    pub async fn get_roles(&self, product: Option<&str>) -> ApiResult<Value> {
        self.fetch_roles(product.filter(|p| !p.is_empty())).await
    }
}
