use envdesk_common::ApiResult;
use envdesk_macro::{delete, get, patch, post, put};
use serde_json::Value;

use crate::ConsoleApi;
use crate::models::StatusUpdate;

impl ConsoleApi {
    #[post(url = "/api/products")]
    pub async fn create_product(&self, data: &Value) -> ApiResult<Value> {}

    /// 产品列表（分页）
    #[get(url = "/api/products")]
    pub async fn get_product_list(&self, params: &Value) -> ApiResult<Value> {}

    /// 所有启用的产品，不分页
    #[get(url = "/api/products/all")]
    pub async fn get_all_products(&self) -> ApiResult<Vec<Value>> {}

    #[get(url = "/api/products/{product_id}")]
    pub async fn get_product_detail(&self, product_id: i64) -> ApiResult<Value> {}

    #[put(url = "/api/products/{product_id}")]
    pub async fn update_product(&self, product_id: i64, data: &Value) -> ApiResult<Value> {}

    #[delete(url = "/api/products/{product_id}")]
    pub async fn delete_product(&self, product_id: i64) -> ApiResult<()> {}

    #[patch(url = "/api/products/{product_id}/status")]
    pub async fn update_product_status(&self, product_id: i64, data: &StatusUpdate) -> ApiResult<Value> {}
}
