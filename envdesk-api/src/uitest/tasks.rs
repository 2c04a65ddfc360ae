use envdesk_common::ApiResult;
use envdesk_macro::{delete, get, post, put};
use serde_json::Value;

use crate::ConsoleApi;
use crate::models::TaskItemType;

impl ConsoleApi {
    #[post(url = "/api/ui-test/test-tasks")]
    pub async fn create_test_task(&self, data: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-tasks")]
    pub async fn get_test_tasks(&self, params: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-tasks/{task_id}")]
    pub async fn get_test_task_detail(&self, task_id: i64) -> ApiResult<Value> {}

    #[put(url = "/api/ui-test/test-tasks/{task_id}")]
    pub async fn update_test_task(&self, task_id: i64, data: &Value) -> ApiResult<Value> {}

    #[delete(url = "/api/ui-test/test-tasks/{task_id}")]
    pub async fn delete_test_task(&self, task_id: i64) -> ApiResult<()> {}

    #[post(url = "/api/ui-test/test-tasks/{task_id}/execute")]
    pub async fn execute_test_task(&self, task_id: i64) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/test-tasks/{task_id}/cancel")]
    pub async fn cancel_test_task(&self, task_id: i64) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/test-tasks/{task_id}/pause")]
    pub async fn pause_test_task(&self, task_id: i64) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/test-tasks/{task_id}/resume")]
    pub async fn resume_test_task(&self, task_id: i64) -> ApiResult<Value> {}

    #[post(url = "/api/ui-test/test-tasks/{task_id}/restart")]
    pub async fn restart_test_task(&self, task_id: i64) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-tasks/{task_id}/progress")]
    pub async fn get_task_progress(&self, task_id: i64) -> ApiResult<Value> {}

    /// 执行日志，从 `offset` 开始增量读取
    #[get(url = "/api/ui-test/test-tasks/{task_id}/log")]
    pub async fn get_test_task_log(&self, task_id: i64, offset: u64) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-tasks/{task_id}/contents")]
    pub async fn get_task_contents(&self, task_id: i64) -> ApiResult<Value> {}

    /// 把一个套件或用例加入测试单
    #[post(url = "/api/ui-test/test-tasks/{task_id}/contents")]
    pub async fn add_task_content(
        &self,
        task_id: i64,
        item_type: TaskItemType,
        item_id: i64,
    ) -> ApiResult<Value> {}

    #[delete(url = "/api/ui-test/test-tasks/{task_id}/contents/{content_id}")]
    pub async fn remove_task_content(&self, task_id: i64, content_id: i64) -> ApiResult<()> {}

    #[post(url = "/api/ui-test/test-tasks/{task_id}/contents/reorder")]
    pub async fn reorder_task_contents(&self, task_id: i64, data: &[i64]) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-tasks/{task_id}/reports")]
    pub async fn get_task_reports(&self, task_id: i64) -> ApiResult<Value> {}
}
