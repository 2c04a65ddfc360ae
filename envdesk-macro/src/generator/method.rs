use quote::quote;
use envdesk_common::HandlerArgs;
use syn::{FnArg, ItemFn};
use crate::conversion::generate_type_conversion;
use crate::error::ErrorHandler;
use crate::request::{DynamicParamsProcessor, RequestBuilder};

/// 生成接口方法的实现代码
///
/// 保留原函数的签名、可见性和属性（包括文档注释），函数体替换为：
/// 组装 `OutgoingRequest`，经 `self.transport` 发出，再把解包后的 `data` 转为返回类型。
pub fn generate_http_method(
    item: &ItemFn,
    handler_args: &HandlerArgs,
) -> syn::Result<proc_macro2::TokenStream> {
    let sig = &item.sig;
    let attrs = &item.attrs;
    let vis = &item.vis;

    validate_signature(sig)?;

    let ok_type = ErrorHandler::validate_and_extract_ok_type(&sig.output)?;
    let params = DynamicParamsProcessor::classify(&handler_args.url, &sig.inputs)?;

    let operation = sig.ident.to_string();
    let descriptor = RequestBuilder::generate_descriptor_code(&operation, handler_args);
    let request_code = RequestBuilder::generate_request_builder_code(handler_args, &params);
    let type_conversion = generate_type_conversion(ok_type);

    Ok(quote! {
        #(#attrs)*
        #vis #sig {
            #descriptor

            #request_code

            let data = self.transport.send(request).await?;
            #type_conversion
        }
    })
}

/// 验证函数签名：必须是 async，第一个参数必须是 `&self`
fn validate_signature(sig: &syn::Signature) -> Result<(), syn::Error> {
    if sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            sig.fn_token,
            "endpoint methods must be async",
        ));
    }

    let Some(first) = sig.inputs.first() else {
        return Err(syn::Error::new_spanned(
            &sig.ident,
            "method must have at least 'self' parameter",
        ));
    };

    match first {
        FnArg::Receiver(receiver) if receiver.reference.is_some() && receiver.mutability.is_none() => Ok(()),
        _ => Err(syn::Error::new_spanned(
            first,
            "first parameter must be '&self'",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envdesk_common::HttpMethod;
    use syn::parse_quote;

    fn args(url: &str, method: HttpMethod) -> HandlerArgs {
        HandlerArgs {
            url: syn::LitStr::new(url, proc_macro2::Span::call_site()),
            method,
            content_type: None,
            headers: syn::punctuated::Punctuated::new(),
        }
    }

    #[test]
    fn test_validate_signature_valid() {
        let sig: syn::Signature = parse_quote! { async fn get_menu_data(&self) -> ApiResult<Value> };
        assert!(validate_signature(&sig).is_ok());
    }

    #[test]
    fn test_validate_signature_not_async() {
        let sig: syn::Signature = parse_quote! { fn get_menu_data(&self) -> ApiResult<Value> };
        assert!(validate_signature(&sig).is_err());
    }

    #[test]
    fn test_validate_signature_no_self() {
        let sig: syn::Signature = parse_quote! { async fn get_menu_data(data: &Value) -> ApiResult<Value> };
        assert!(validate_signature(&sig).is_err());

        let sig: syn::Signature = parse_quote! { async fn get_menu_data() -> ApiResult<Value> };
        assert!(validate_signature(&sig).is_err());
    }

    #[test]
    fn test_generated_method_keeps_docs_and_visibility() {
        let item: ItemFn = parse_quote! {
            /// 删除产品
            pub async fn delete_product(&self, product_id: i64) -> ApiResult<()> {}
        };
        let code = generate_http_method(&item, &args("/api/products/{product_id}", HttpMethod::Delete))
            .unwrap()
            .to_string();

        assert!(code.contains("doc"));
        assert!(code.contains("pub async fn delete_product"));
        assert!(code.contains("HttpMethod :: Delete"));
        assert!(code.contains("self . transport . send (request) . await ?"));
        assert!(code.contains("Ok (())"));
    }

    #[test]
    fn test_generated_method_rejects_wrong_return() {
        let item: ItemFn = parse_quote! {
            pub async fn get_menu_data(&self) -> Result<Value, String> {}
        };
        assert!(generate_http_method(&item, &args("api/user/get_menu", HttpMethod::Get)).is_err());
    }
}
