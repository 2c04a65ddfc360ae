use quote::quote;
use syn::{GenericArgument, Type};

/// 生成类型转换代码
///
/// 输入是已经解包的 `data`（`serde_json::Value`）：
/// - `Value`: 原样返回
/// - `()`: 丢弃
/// - 其他类型: 反序列化，失败时返回解码错误
pub fn generate_type_conversion(ok_type: &GenericArgument) -> proc_macro2::TokenStream {
    let default_conversion = quote! {
        envdesk_common::decode_data::<#ok_type>(data)
    };

    match ok_type {
        GenericArgument::Type(Type::Tuple(tuple)) if tuple.elems.is_empty() => quote! {
            let _ = data;
            Ok(())
        },
        GenericArgument::Type(Type::Path(type_path)) => {
            match type_path.path.segments.last() {
                Some(segment) if segment.ident == "Value" && segment.arguments.is_empty() => {
                    quote! { Ok(data) }
                }
                _ => default_conversion,
            }
        }
        _ => default_conversion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_value_passes_through() {
        let ty: GenericArgument = parse_quote! { serde_json::Value };
        assert_eq!(generate_type_conversion(&ty).to_string(), "Ok (data)");
    }

    #[test]
    fn test_unit_discards_data() {
        let ty: GenericArgument = parse_quote! { () };
        assert!(generate_type_conversion(&ty).to_string().contains("Ok (())"));
    }

    #[test]
    fn test_other_types_decode() {
        let ty: GenericArgument = parse_quote! { Vec<Product> };
        let code = generate_type_conversion(&ty).to_string();
        assert!(code.contains("decode_data :: < Vec < Product > >"));
    }
}
