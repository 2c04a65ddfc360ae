//! 控制台接口目录使用的过程宏
//!
//! `#[console_client]` 标注客户端结构体，`#[get]`/`#[post]`/`#[put]`/`#[patch]`/`#[delete]`
//! 标注其中的接口方法。方法体留空，由宏生成。

mod common;
mod conversion;
mod error;
mod generator;
mod request;

use crate::common::common_http_method;
use crate::generator::generate_console_client_impl;
use proc_macro::TokenStream;
use envdesk_common::{HttpMethod, parse_console_client_args};
use syn::{ItemStruct, parse_macro_input};

/// 声明控制台客户端
///
/// ```ignore
/// #[console_client(env = prod)]
/// pub struct ConsoleApi;
/// ```
#[proc_macro_attribute]
pub fn console_client(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    let args = parse_macro_input!(args with parse_console_client_args);

    generate_console_client_impl(input, &args)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}

#[proc_macro_attribute]
pub fn get(args: TokenStream, item: TokenStream) -> TokenStream {
    common_http_method(args, item, HttpMethod::Get)
}

#[proc_macro_attribute]
pub fn post(args: TokenStream, item: TokenStream) -> TokenStream {
    common_http_method(args, item, HttpMethod::Post)
}

#[proc_macro_attribute]
pub fn put(args: TokenStream, item: TokenStream) -> TokenStream {
    common_http_method(args, item, HttpMethod::Put)
}

#[proc_macro_attribute]
pub fn patch(args: TokenStream, item: TokenStream) -> TokenStream {
    common_http_method(args, item, HttpMethod::Patch)
}

#[proc_macro_attribute]
pub fn delete(args: TokenStream, item: TokenStream) -> TokenStream {
    common_http_method(args, item, HttpMethod::Delete)
}
