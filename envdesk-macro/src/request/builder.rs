use quote::quote;
use syn::LitStr;
use envdesk_common::HandlerArgs;
use super::{DynamicParamsProcessor, MethodParam, ParamRole};

/// 请求构建器
///
/// 生成接口描述常量以及组装 `OutgoingRequest` 的代码。
pub struct RequestBuilder;

impl RequestBuilder {
    /// 生成接口描述常量 `DESCRIPTOR`
    pub fn generate_descriptor_code(
        operation: &str,
        handler_args: &HandlerArgs,
    ) -> proc_macro2::TokenStream {
        let url = handler_args.url.value();
        let method = handler_args.method.variant_ident();
        let content_type = handler_args
            .content_type
            .unwrap_or_default()
            .variant_ident();

        quote! {
            const DESCRIPTOR: envdesk_common::OperationDescriptor =
                envdesk_common::OperationDescriptor::new(
                    #operation,
                    envdesk_common::HttpMethod::#method,
                    #url,
                )
                .with_content_type(envdesk_common::ContentType::#content_type);
        }
    }

    /// 生成请求组装代码
    ///
    /// 显式查询对象和单个查询参数先于 `data` 加入，`data` 最后交给路由规则。
    pub fn generate_request_builder_code(
        handler_args: &HandlerArgs,
        params: &[MethodParam],
    ) -> proc_macro2::TokenStream {
        let url = handler_args.url.value();
        let path_code = DynamicParamsProcessor::generate_path_code(&url, params);
        let header_statements = Self::generate_header_statements(&handler_args.headers);

        let query_statements = params.iter().filter_map(|param| {
            let ident = &param.ident;
            match param.role {
                ParamRole::Params => Some(quote! {
                    let request = request.params(&#ident)?;
                }),
                ParamRole::Query => {
                    let name = param.wire_name();
                    Some(quote! {
                        let request = request.query_param(#name, &#ident)?;
                    })
                }
                _ => None,
            }
        });

        let data_statement = params
            .iter()
            .find(|param| param.role == ParamRole::Data)
            .map(|param| {
                let ident = &param.ident;
                quote! {
                    let request = request.data(&#ident)?;
                }
            })
            .unwrap_or_default();

        quote! {
            #path_code

            let request = envdesk_common::OutgoingRequest::from_descriptor(&DESCRIPTOR, path)
                #(#header_statements)*;
            #(#query_statements)*
            #data_statement
        }
    }

    /// 生成固定请求头代码
    fn generate_header_statements(
        headers: &syn::punctuated::Punctuated<LitStr, syn::Token![,]>,
    ) -> Vec<proc_macro2::TokenStream> {
        headers
            .iter()
            .filter_map(|header| {
                let header_str = header.value();
                let (key, value) = header_str.split_once(": ")?;
                Some(quote! { .header(#key, #value) })
            })
            .collect()
    }
}
