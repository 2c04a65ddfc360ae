use proc_macro2::Ident;
use std::fmt;
use std::str::FromStr;
use syn::parse::{Parse, ParseStream};

/// HTTP 方法枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// 返回HTTP方法的字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// 返回枚举变体的标识符，供宏生成 `HttpMethod::Xxx` 使用
    pub fn variant_ident(&self) -> Ident {
        Ident::new(
            match self {
                HttpMethod::Get => "Get",
                HttpMethod::Post => "Post",
                HttpMethod::Put => "Put",
                HttpMethod::Patch => "Patch",
                HttpMethod::Delete => "Delete",
            },
            proc_macro2::Span::call_site(),
        )
    }

    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// 调用方数据的放置位置
    ///
    /// GET 请求的数据进入查询字符串，其余方法一律作为请求体发送。
    pub const fn payload_location(&self) -> PayloadLocation {
        match self {
            HttpMethod::Get => PayloadLocation::Query,
            _ => PayloadLocation::Body,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    /// 大小写不敏感
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "patch" => Ok(HttpMethod::Patch),
            "delete" => Ok(HttpMethod::Delete),
            other => Err(format!("unsupported http method: {}", other)),
        }
    }
}

/// 数据在请求中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadLocation {
    Query,
    Body,
}

/// 内容类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Json,
    FormUrlEncoded,
}

impl ContentType {
    pub fn variant_ident(&self) -> Ident {
        Ident::new(
            match self {
                ContentType::Json => "Json",
                ContentType::FormUrlEncoded => "FormUrlEncoded",
            },
            proc_macro2::Span::call_site(),
        )
    }

    pub(crate) fn from_ident(ident: &Ident) -> syn::Result<Self> {
        match ident.to_string().as_str() {
            "json" => Ok(ContentType::Json),
            "form_urlencoded" => Ok(ContentType::FormUrlEncoded),
            _ => Err(syn::Error::new_spanned(
                ident,
                "content_type must be one of 'json' or 'form_urlencoded'",
            )),
        }
    }
}

impl Parse for ContentType {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        ContentType::from_ident(&ident)
    }
}
