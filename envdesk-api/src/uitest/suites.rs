use envdesk_common::ApiResult;
use envdesk_macro::{delete, get, post, put};
use serde_json::Value;

use crate::ConsoleApi;

impl ConsoleApi {
    #[post(url = "/api/ui-test/test-suites")]
    pub async fn create_test_suite(&self, data: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-suites")]
    pub async fn get_test_suites(&self, params: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-suites/{suite_id}")]
    pub async fn get_test_suite_detail(&self, suite_id: i64) -> ApiResult<Value> {}

    #[put(url = "/api/ui-test/test-suites/{suite_id}")]
    pub async fn update_test_suite(&self, suite_id: i64, data: &Value) -> ApiResult<Value> {}

    #[delete(url = "/api/ui-test/test-suites/{suite_id}")]
    pub async fn delete_test_suite(&self, suite_id: i64, force: bool) -> ApiResult<()> {}

    /// 按筛选条件预览会匹配到的用例
    #[post(url = "/api/ui-test/test-suites/{suite_id}/preview")]
    pub async fn preview_matched_cases(&self, suite_id: i64, data: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-suites/{suite_id}/cases")]
    pub async fn get_suite_cases(&self, suite_id: i64) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/test-suites/{suite_id}/cases")]
    pub async fn add_cases_to_suite(&self, suite_id: i64, data: &[i64]) -> ApiResult<Value> {}

    #[delete(url = "/api/ui-test/test-suites/{suite_id}/cases/{case_id}")]
    pub async fn remove_case_from_suite(&self, suite_id: i64, case_id: i64) -> ApiResult<()> {}

    #[post(url = "/api/ui-test/test-suites/{suite_id}/cases/reorder")]
    pub async fn reorder_suite_cases(&self, suite_id: i64, data: &[i64]) -> ApiResult<Value> {}

    /// 按套件的筛选条件重新同步用例
    #[post(url = "/api/ui-test/test-suites/{suite_id}/sync")]
    pub async fn sync_suite_cases(&self, suite_id: i64) -> ApiResult<Value> {}
}
