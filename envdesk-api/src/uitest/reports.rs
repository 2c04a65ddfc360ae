use envdesk_common::ApiResult;
use envdesk_macro::{delete, get};
use serde_json::Value;

use crate::ConsoleApi;

impl ConsoleApi {
    #[get(url = "/api/ui-test/test-reports")]
    pub async fn get_test_reports(&self, params: &Value) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-reports/{report_id}")]
    pub async fn get_test_report_detail(&self, report_id: i64) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-reports/{report_id}/summary")]
    pub async fn get_report_summary(&self, report_id: i64) -> ApiResult<Value> {}

    #[get(url = "/api/ui-test/test-reports/compare")]
    async fn compare_reports_by_ids(&self, report_ids: &str) -> ApiResult<Value> {}

    /// 对比多份报告，id 以逗号拼接后放进 `report_ids`
    pub async fn compare_reports(&self, report_ids: &[i64]) -> ApiResult<Value> {
        let joined = report_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.compare_reports_by_ids(&joined).await
    }

    #[delete(url = "/api/ui-test/test-reports/{report_id}")]
    pub async fn delete_test_report(&self, report_id: i64) -> ApiResult<()> {}
}
