use envdesk_common::ApiResult;
use envdesk_macro::{delete, get, post, put};
use serde_json::Value;

use crate::ConsoleApi;

impl ConsoleApi {
    #[post(url = "/api/ui-test/elements")]
    pub async fn create_element(&self, data: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/elements")]
    pub async fn get_elements(&self, params: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/elements/{element_id}")]
    pub async fn get_element_detail(&self, element_id: i64) -> ApiResult<Value> {}

    #[put(url = "/api/ui-test/elements/{element_id}")]
    pub async fn update_element(&self, element_id: i64, data: &Value) -> ApiResult<Value> {}

    #[delete(url = "/api/ui-test/elements/{element_id}")]
    pub async fn delete_element(&self, element_id: i64) -> ApiResult<()> {}

    #[post(url = "/api/ui-test/elements/batch")]
    pub async fn batch_create_elements(&self, data: &[Value]) -> ApiResult<Value> {}

    /// 引用了该元素的测试用例
    #[get(url = "/api/ui-test/elements/{element_id}/related-cases")]
    pub async fn get_element_related_cases(&self, element_id: i64) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/elements/{element_id}/permissions")]
    pub async fn get_element_permissions(&self, element_id: i64) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/elements/{element_id}/permissions")]
    pub async fn set_element_permissions(&self, element_id: i64, data: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/elements/pages/list")]
    pub async fn get_pages(&self) -> ApiResult<Value> {}
}
