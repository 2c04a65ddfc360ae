use quote::quote;
use envdesk_common::{ConsoleClientArgs, Environment};
use syn::ItemStruct;

/// 生成控制台客户端的实现代码
///
/// 给单元结构体加上共享的 `transport` 字段，以及构造函数和 `Clone`。
/// 同一进程里的多个客户端可以通过 `with_transport` 共享同一个传输客户端。
pub fn generate_console_client_impl(
    mut input: ItemStruct,
    args: &ConsoleClientArgs,
) -> Result<proc_macro2::TokenStream, syn::Error> {
    // 确保结构体是空的（无字段）
    if !matches!(input.fields, syn::Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &input,
            "console_client macro only supports empty structs (e.g., `struct ConsoleApi;`)",
        ));
    }

    let base_url = generate_base_url(args)?;
    let struct_name = input.ident.clone();

    input.fields = syn::Fields::Named(syn::parse_quote! {{
        transport: std::sync::Arc<envdesk_common::Transport>,
    }});
    input.semi_token = None;

    Ok(quote! {
        #input

        impl #struct_name {
            /// 使用默认的凭证存储、错误提示和登录跳转创建客户端
            pub fn new() -> envdesk_common::ApiResult<Self> {
                let transport = envdesk_common::Transport::builder(#base_url).build()?;
                Ok(Self::with_transport(std::sync::Arc::new(transport)))
            }

            pub fn with_transport(transport: std::sync::Arc<envdesk_common::Transport>) -> Self {
                #struct_name { transport }
            }

            pub fn transport(&self) -> &std::sync::Arc<envdesk_common::Transport> {
                &self.transport
            }
        }

        impl Clone for #struct_name {
            fn clone(&self) -> Self {
                #struct_name {
                    transport: std::sync::Arc::clone(&self.transport),
                }
            }
        }
    })
}

/// 基础地址：显式 `base_url`，或配置表里的某个环境，或构建时选定的环境
fn generate_base_url(args: &ConsoleClientArgs) -> Result<proc_macro2::TokenStream, syn::Error> {
    if let Some(lit) = &args.base_url {
        return Ok(quote! { #lit });
    }

    match &args.env {
        Some(ident) => {
            let env: Environment = ident
                .to_string()
                .parse()
                .map_err(|e: String| syn::Error::new_spanned(ident, e))?;
            let variant = match env {
                Environment::Prod => quote! { Prod },
                Environment::Develop => quote! { Develop },
            };
            Ok(quote! { envdesk_common::Environment::#variant.base_url() })
        }
        None => Ok(quote! { envdesk_common::ConsoleConfig::active().base_url }),
    }
}
