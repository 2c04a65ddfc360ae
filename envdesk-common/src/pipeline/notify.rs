/// 用户可见的错误提示
///
/// 宿主应用注入具体实现（弹窗、状态栏、终端输出）；管道只负责决定何时提示、提示什么。
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// 默认实现，写入错误日志
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn error(&self, message: &str) {
        self(message)
    }
}
