use crate::types::http::{ContentType, HttpMethod, PayloadLocation};

/// 接口描述
///
/// 目录中每个逻辑接口对应一个静态、不可变的描述：方法、URL 模板、
/// 内容类型以及调用方数据的放置位置。由 `#[get]`/`#[post]` 等宏生成为常量。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub method: HttpMethod,
    pub url: &'static str,
    pub content_type: ContentType,
    pub location: PayloadLocation,
}

impl OperationDescriptor {
    pub const fn new(name: &'static str, method: HttpMethod, url: &'static str) -> Self {
        Self {
            name,
            method,
            url,
            content_type: ContentType::Json,
            location: method.payload_location(),
        }
    }

    pub const fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }
}

/// 提取字符串中的所有 `{name}` 占位符
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut placeholders = Vec::new();
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            let placeholder: String = chars.by_ref().take_while(|c| *c != '}').collect();
            if !placeholder.is_empty() {
                placeholders.push(placeholder);
            }
        }
    }

    placeholders
}
