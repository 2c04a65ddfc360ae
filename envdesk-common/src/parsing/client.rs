use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Token};
use crate::config::Environment;
use crate::types::ConsoleClientArgs;

impl Parse for ConsoleClientArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut base_url = None;
        let mut env = None;

        let pairs = Punctuated::<syn::Meta, Token![,]>::parse_terminated(input)?;
        for meta in pairs {
            match meta {
                syn::Meta::NameValue(nv) => {
                    if nv.path.is_ident("base_url") {
                        base_url = Some(parse_base_url_value(&nv.value)?);
                    } else if nv.path.is_ident("env") {
                        env = Some(parse_env_value(&nv.value)?);
                    } else {
                        return Err(syn::Error::new_spanned(
                            nv.path,
                            "Only 'base_url' or 'env' are supported",
                        ));
                    }
                }
                _ => {
                    return Err(syn::Error::new_spanned(meta, "Expected key-value pair"));
                }
            }
        }

        if base_url.is_some() && env.is_some() {
            return Err(syn::Error::new(
                input.span(),
                "'base_url' and 'env' cannot be used together",
            ));
        }

        Ok(ConsoleClientArgs { base_url, env })
    }
}

fn parse_base_url_value(value: &syn::Expr) -> syn::Result<LitStr> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = value
    {
        Ok(lit.clone())
    } else {
        Err(syn::Error::new_spanned(
            value,
            "base_url must be a string literal",
        ))
    }
}

fn parse_env_value(value: &syn::Expr) -> syn::Result<Ident> {
    if let syn::Expr::Path(expr_path) = value {
        let ident = expr_path.path.get_ident().ok_or_else(|| {
            syn::Error::new_spanned(expr_path, "env must be a simple identifier")
        })?;
        // 只接受配置表里存在的环境
        ident
            .to_string()
            .parse::<Environment>()
            .map_err(|e| syn::Error::new_spanned(ident, e))?;
        Ok(ident.clone())
    } else {
        Err(syn::Error::new_spanned(
            value,
            "env must be an identifier (e.g., prod or develop)",
        ))
    }
}

/// 解析客户端宏参数的公共函数
pub fn parse_console_client_args(input: ParseStream) -> syn::Result<ConsoleClientArgs> {
    ConsoleClientArgs::parse(input)
}
