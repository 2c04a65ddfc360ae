//! UI 自动化测试平台的接口
//!
//! 按业务区域拆分：产品、测试用户、页面元素、测试用例与步骤、测试套件、测试单、测试报告。

pub mod cases;
pub mod elements;
pub mod products;
pub mod reports;
pub mod suites;
pub mod tasks;
pub mod test_users;
