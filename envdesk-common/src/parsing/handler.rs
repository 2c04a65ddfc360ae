use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{LitStr, Meta, Token};
use crate::types::{ContentType, HandlerArgs, HttpMethod, extract_placeholders};

impl Parse for HandlerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut url = None;
        let mut content_type = None;
        let mut headers = Punctuated::new();

        let pairs = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;
        for pair in pairs {
            if let Meta::NameValue(name_value) = pair {
                let key = name_value.path.get_ident().ok_or_else(|| {
                    syn::Error::new_spanned(&name_value.path, "expected identifier as key")
                })?;

                match key.to_string().as_str() {
                    "url" => {
                        url = Some(parse_url_value(&name_value.value)?);
                    }
                    "content_type" => {
                        content_type = Some(parse_content_type_value(&name_value.value)?);
                    }
                    "header" => {
                        headers.push(parse_header_value(&name_value.value)?);
                    }
                    _ => {
                        return Err(syn::Error::new_spanned(
                            key,
                            "Only 'url', 'content_type', and 'header' are supported",
                        ));
                    }
                }
            } else {
                return Err(syn::Error::new_spanned(pair, "expected key-value pair"));
            }
        }

        let url = url.ok_or_else(|| syn::Error::new(input.span(), "Missing required 'url' parameter"))?;

        // 方法由具体的宏（#[get]/#[post]...）覆盖
        Ok(HandlerArgs {
            method: HttpMethod::Get,
            url,
            content_type,
            headers,
        })
    }
}

fn parse_url_value(value: &syn::Expr) -> syn::Result<LitStr> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = value
    {
        let template = lit.value();
        if template.matches('{').count() != template.matches('}').count()
            || extract_placeholders(&template).iter().any(|p| syn::parse_str::<syn::Ident>(p).is_err())
        {
            return Err(syn::Error::new_spanned(
                lit,
                "url placeholders must look like {identifier}",
            ));
        }
        Ok(lit.clone())
    } else {
        Err(syn::Error::new_spanned(
            value,
            "url must be a string literal",
        ))
    }
}

fn parse_content_type_value(value: &syn::Expr) -> syn::Result<ContentType> {
    if let syn::Expr::Path(expr_path) = value {
        let ident = expr_path.path.get_ident().ok_or_else(|| {
            syn::Error::new_spanned(
                expr_path,
                "content_type must be a simple identifier",
            )
        })?;
        ContentType::from_ident(ident)
    } else {
        Err(syn::Error::new_spanned(
            value,
            "content_type must be an identifier (e.g., json or form_urlencoded)",
        ))
    }
}

fn parse_header_value(value: &syn::Expr) -> syn::Result<LitStr> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = value
    {
        if !lit.value().contains(": ") {
            return Err(syn::Error::new_spanned(
                lit,
                "header must be in 'Key: Value' format with a colon and space separator",
            ));
        }
        Ok(lit.clone())
    } else {
        Err(syn::Error::new_spanned(
            value,
            "header must be a string literal",
        ))
    }
}

/// 解析接口宏参数的公共函数
pub fn parse_handler_args(input: ParseStream) -> syn::Result<HandlerArgs> {
    HandlerArgs::parse(input)
}
