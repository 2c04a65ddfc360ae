use quote::quote;
use std::collections::HashSet;
use syn::ext::IdentExt;
use syn::{FnArg, Ident, PatType};
use envdesk_common::extract_placeholders;

/// 参数在请求中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRole {
    /// URL 模板中的 `{name}`
    Path,
    /// 名为 `data` 的参数，按方法路由
    Data,
    /// 名为 `params` 的参数，整体作为查询参数
    Params,
    /// 其余参数，各自成为一个查询参数
    Query,
}

/// 方法参数
pub struct MethodParam {
    pub ident: Ident,
    pub role: ParamRole,
}

impl MethodParam {
    /// 查询参数名，去掉 `r#` 前缀
    pub fn wire_name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// 动态参数处理器
///
/// 按 URL 模板把函数参数分成路径参数、请求数据、查询对象和单个查询参数。
pub struct DynamicParamsProcessor;

impl DynamicParamsProcessor {
    /// 对 `self` 之后的参数分类；模板中出现但没有对应参数的占位符是编译错误
    pub fn classify(
        url_template: &syn::LitStr,
        fn_inputs: &syn::punctuated::Punctuated<FnArg, syn::Token![,]>,
    ) -> syn::Result<Vec<MethodParam>> {
        let placeholders: Vec<String> = extract_placeholders(&url_template.value());
        let mut params = Vec::new();
        let mut bound = HashSet::new();

        for input in fn_inputs.iter().skip(1) {
            let FnArg::Typed(PatType { pat, .. }) = input else {
                return Err(syn::Error::new_spanned(input, "unexpected receiver"));
            };
            let syn::Pat::Ident(pat_ident) = pat.as_ref() else {
                return Err(syn::Error::new_spanned(
                    pat,
                    "parameters must be plain identifiers",
                ));
            };

            let ident = pat_ident.ident.clone();
            let name = ident.unraw().to_string();
            let role = if placeholders.contains(&name) {
                bound.insert(name);
                ParamRole::Path
            } else if name == "data" {
                ParamRole::Data
            } else if name == "params" {
                ParamRole::Params
            } else {
                ParamRole::Query
            };

            params.push(MethodParam { ident, role });
        }

        if let Some(missing) = placeholders.iter().find(|p| !bound.contains(*p)) {
            return Err(syn::Error::new_spanned(
                url_template,
                format!("Parameter '{}' not found in function parameters", missing),
            ));
        }

        Ok(params)
    }

    /// 生成替换过占位符的路径代码
    pub fn generate_path_code(url_template: &str, params: &[MethodParam]) -> proc_macro2::TokenStream {
        let placeholders = extract_placeholders(url_template);
        if placeholders.is_empty() {
            return quote! {
                let path = #url_template.to_string();
            };
        }

        let mut format_str = url_template.to_string();
        let mut format_args = Vec::new();
        for placeholder in &placeholders {
            format_str = format_str.replacen(&format!("{{{}}}", placeholder), "{}", 1);
            if let Some(param) = params
                .iter()
                .find(|p| p.role == ParamRole::Path && &p.wire_name() == placeholder)
            {
                format_args.push(param.ident.clone());
            }
        }

        quote! {
            let path = format!(#format_str, #(#format_args),*);
        }
    }
}
