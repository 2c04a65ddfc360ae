use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Token};
use crate::types::http::{ContentType, HttpMethod};

/// 接口宏参数
pub struct HandlerArgs {
    pub url: LitStr,
    pub method: HttpMethod,
    pub content_type: Option<ContentType>,
    pub headers: Punctuated<LitStr, Token![,]>,
}

/// 客户端宏参数
pub struct ConsoleClientArgs {
    /// 固定的基础地址，优先于 `env`
    pub base_url: Option<LitStr>,
    /// 绑定到配置表中的某个环境
    pub env: Option<Ident>,
}
