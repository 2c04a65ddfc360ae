use envdesk_common::ApiResult;
use envdesk_macro::{delete, get, patch, post, put};
use serde_json::Value;

use crate::ConsoleApi;
use crate::models::{BatchStatusUpdate, PageQuery};

impl ConsoleApi {
    #[get(url = "/api/ui-test/test-cases/modules/list")]
    pub async fn get_modules(&self) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/test-cases")]
    pub async fn create_test_case(&self, data: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-cases")]
    pub async fn get_test_cases(&self, params: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-cases/{case_id}")]
    pub async fn get_test_case_detail(&self, case_id: i64) -> ApiResult<Value> {}

    #[put(url = "/api/ui-test/test-cases/{case_id}")]
    pub async fn update_test_case(&self, case_id: i64, data: &Value) -> ApiResult<Value> {}

    #[delete(url = "/api/ui-test/test-cases/{case_id}")]
    pub async fn delete_test_case(&self, case_id: i64, force: bool) -> ApiResult<()> {}

    #[post(url = "/api/ui-test/test-cases/{case_id}/copy")]
    pub async fn copy_test_case(&self, case_id: i64) -> ApiResult<Value> {}

    /// 状态通过查询参数传递，请求体为空
    #[patch(url = "/api/ui-test/test-cases/{case_id}/status")]
    pub async fn update_case_status(&self, case_id: i64, status: &str) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-cases/{case_id}/steps")]
    pub async fn get_test_steps(&self, case_id: i64) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/test-cases/{case_id}/steps")]
    pub async fn create_test_step(&self, case_id: i64, data: &Value) -> ApiResult<Value> {}

    #[put(url = "/api/ui-test/test-cases/steps/{step_id}")]
    pub async fn update_test_step(&self, step_id: i64, data: &Value) -> ApiResult<Value> {}

    #[delete(url = "/api/ui-test/test-cases/steps/{step_id}")]
    pub async fn delete_test_step(&self, step_id: i64) -> ApiResult<()> {}

    /// 按给定的步骤 id 顺序重排
    #[post(url = "/api/ui-test/test-cases/{case_id}/steps/reorder")]
    pub async fn reorder_steps(&self, case_id: i64, data: &[i64]) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-cases/{case_id}/permissions")]
    pub async fn get_case_permissions(&self, case_id: i64) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/test-cases/{case_id}/permissions")]
    pub async fn set_case_permissions(&self, case_id: i64, data: &[String]) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-cases/{case_id}/executions")]
    pub async fn get_case_executions(&self, case_id: i64, params: &PageQuery) -> ApiResult<Value> {}

    /// 最近 `days` 天的执行趋势
    #[get(url = "/api/ui-test/test-cases/{case_id}/execution-trend")]
    pub async fn get_execution_trend(&self, case_id: i64, days: u32) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/test-cases/batch-update-status")]
    pub async fn batch_update_case_status(&self, data: &BatchStatusUpdate) -> ApiResult<Value> {}
}
