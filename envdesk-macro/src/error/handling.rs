use syn::{GenericArgument, PathArguments, ReturnType, Type};

/// 错误处理器
///
/// 校验接口函数的返回类型为 `ApiResult<T>` 并取出 `T`。
pub struct ErrorHandler;

impl ErrorHandler {
    /// 验证并解析返回类型
    pub fn validate_and_extract_ok_type(output: &ReturnType) -> Result<&GenericArgument, syn::Error> {
        match output {
            ReturnType::Type(_, ty) => {
                let type_path = match &**ty {
                    Type::Path(type_path) => type_path,
                    _ => {
                        return Err(syn::Error::new_spanned(ty, "Return type must be ApiResult<T>"));
                    }
                };

                Self::validate_api_result_path(type_path)?;
                Self::extract_ok_type(type_path, ty)
            }
            _ => Err(syn::Error::new_spanned(output, "Function must return ApiResult<T>")),
        }
    }

    /// 验证路径以 `ApiResult` 结尾（允许 `envdesk_common::ApiResult`）
    fn validate_api_result_path(type_path: &syn::TypePath) -> Result<(), syn::Error> {
        let last_segment = type_path.path.segments.last()
            .ok_or_else(|| syn::Error::new_spanned(type_path, "Return type path must not be empty"))?;

        if last_segment.ident != "ApiResult" {
            return Err(syn::Error::new_spanned(type_path, "Return type must be ApiResult<T>"));
        }

        Ok(())
    }

    /// 提取 Ok 类型
    fn extract_ok_type<'a>(
        type_path: &'a syn::TypePath,
        ty: &'a Type,
    ) -> Result<&'a GenericArgument, syn::Error> {
        let last_segment = type_path.path.segments.last()
            .ok_or_else(|| syn::Error::new_spanned(ty, "Return type path must not be empty"))?;
        let args = match &last_segment.arguments {
            PathArguments::AngleBracketed(args) => args,
            _ => {
                return Err(syn::Error::new_spanned(
                    ty,
                    "ApiResult<T> must have generic arguments",
                ));
            }
        };

        if args.args.len() != 1 {
            return Err(syn::Error::new_spanned(
                ty,
                "ApiResult<T> must have exactly 1 type parameter",
            ));
        }

        Ok(&args.args[0])
    }
}
