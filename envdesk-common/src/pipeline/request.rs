use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::types::{ContentType, HttpMethod, OperationDescriptor, PayloadLocation};

/// 单次调用的请求
///
/// 每次调用时由接口描述加上路径参数、查询参数和请求数据组装而成，调用结束即丢弃。
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    pub operation: &'static str,
    pub method: HttpMethod,
    pub path: String,
    pub content_type: ContentType,
    pub location: PayloadLocation,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl OutgoingRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            operation: "request",
            method,
            path: path.into(),
            content_type: ContentType::Json,
            location: method.payload_location(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// 以接口描述创建，`path` 是已经替换过占位符的 URL
    pub fn from_descriptor(descriptor: &OperationDescriptor, path: impl Into<String>) -> Self {
        Self {
            operation: descriptor.name,
            content_type: descriptor.content_type,
            location: descriptor.location,
            ..Self::new(descriptor.method, path)
        }
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// 附加调用方数据，按数据位置放进查询字符串或请求体
    pub fn data<T: Serialize + ?Sized>(mut self, data: &T) -> ApiResult<Self> {
        let value = to_value(data)?;
        match route_data(self.location, value)? {
            Routed::Query(pairs) => self.query.extend(pairs),
            Routed::Body(body) => self.body = Some(body),
            Routed::Empty => {}
        }
        Ok(self)
    }

    /// 附加显式查询参数对象，与方法无关
    pub fn params<T: Serialize + ?Sized>(mut self, params: &T) -> ApiResult<Self> {
        let value = to_value(params)?;
        self.query.extend(query_pairs(&value)?);
        Ok(self)
    }

    /// 附加单个查询参数，值为 `None`/`null` 时跳过
    pub fn query_param<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> ApiResult<Self> {
        let value = to_value(value)?;
        push_pair(&mut self.query, name, &value)?;
        Ok(self)
    }
}

/// 路由结果
#[derive(Debug, Clone, PartialEq)]
pub enum Routed {
    Query(Vec<(String, String)>),
    Body(Value),
    Empty,
}

/// 按数据位置放置调用方数据
///
/// 位置由方法决定，GET 为查询参数，其他方法为请求体；`null` 表示没有数据。
pub fn route_data(location: PayloadLocation, data: Value) -> ApiResult<Routed> {
    if data.is_null() {
        return Ok(Routed::Empty);
    }
    match location {
        PayloadLocation::Query => Ok(Routed::Query(query_pairs(&data)?)),
        PayloadLocation::Body => Ok(Routed::Body(data)),
    }
}

/// 未指定方法时按 GET 处理，大小写不敏感
pub fn resolve_method(method: Option<&str>) -> ApiResult<HttpMethod> {
    match method {
        None => Ok(HttpMethod::Get),
        Some(m) if m.trim().is_empty() => Ok(HttpMethod::Get),
        Some(m) => m.trim().parse().map_err(ApiError::request),
    }
}

/// 把对象展开成 `key=value` 对
///
/// 标量直接转成字符串，标量数组展开为重复的键，`null` 跳过，嵌套对象视为错误。
pub fn query_pairs(value: &Value) -> ApiResult<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                push_pair(&mut pairs, key, value)?;
            }
        }
        other => {
            return Err(ApiError::request(format!(
                "query payload must be an object, got {}",
                type_name(other)
            )));
        }
    }
    Ok(pairs)
}

fn push_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &Value) -> ApiResult<()> {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                pairs.push((key.to_string(), scalar(key, item)?));
            }
        }
        other => pairs.push((key.to_string(), scalar(key, other)?)),
    }
    Ok(())
}

fn scalar(key: &str, value: &Value) -> ApiResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ApiError::request(format!(
            "parameter '{}' must be a scalar, got {}",
            key,
            type_name(other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::request(format!("failed to serialize request data: {}", e)))
}

/// 通用调用参数
///
/// 对应未经目录声明的调用：方法字符串可省略（默认 GET），
/// `data` 按方法路由，`params` 总是进入查询字符串。
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub url: String,
    pub method: Option<String>,
    pub data: Option<Value>,
    pub params: Option<Value>,
    pub headers: Vec<(String, String)>,
    pub content_type: ContentType,
}

impl RequestOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn into_request(self) -> ApiResult<OutgoingRequest> {
        let method = resolve_method(self.method.as_deref())?;
        let mut request = OutgoingRequest::new(method, self.url).content_type(self.content_type);
        request.headers = self.headers;
        if let Some(params) = &self.params {
            request = request.params(params)?;
        }
        if let Some(data) = &self.data {
            request = request.data(data)?;
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_get_data_goes_to_query() {
        let request = OutgoingRequest::new(HttpMethod::Get, "api/env/envs")
            .data(&json!({"page": 1, "size": 10}))
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("size".to_string(), "10".to_string())
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_non_get_data_goes_to_body() {
        for method in [
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
        ] {
            let payload = json!({"username": "qa", "id": 3});
            let request = OutgoingRequest::new(method, "api/user/add_user")
                .data(&payload)
                .unwrap();
            assert!(request.query.is_empty(), "{} leaked into query", method);
            assert_eq!(request.body, Some(payload));
        }
    }

    #[test]
    fn test_array_body_is_kept() {
        let request = OutgoingRequest::new(HttpMethod::Post, "/api/ui-test/test-tasks/1/contents/reorder")
            .data(&vec![3, 1, 2])
            .unwrap();
        assert_eq!(request.body, Some(json!([3, 1, 2])));
    }

    #[test]
    fn test_get_with_non_object_data_is_rejected() {
        let err = OutgoingRequest::new(HttpMethod::Get, "/x")
            .data(&vec![1, 2])
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Request);
    }

    #[test]
    fn test_null_data_is_ignored() {
        let request = OutgoingRequest::new(HttpMethod::Post, "api/logout")
            .data(&Value::Null)
            .unwrap();
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_explicit_params_survive_get_data() {
        let request = OutgoingRequest::new(HttpMethod::Get, "/api/products")
            .params(&json!({"keyword": "shop"}))
            .unwrap()
            .data(&json!({"page": 2}))
            .unwrap();
        assert_eq!(request.query.len(), 2);
    }

    #[test]
    fn test_query_param_skips_none_and_expands_arrays() {
        let request = OutgoingRequest::new(HttpMethod::Delete, "/api/ui-test/test-users/1")
            .query_param("force", &true)
            .unwrap()
            .query_param("product", &None::<String>)
            .unwrap()
            .query_param("ids", &[1, 2])
            .unwrap();
        assert_eq!(
            request.query,
            vec![
                ("force".to_string(), "true".to_string()),
                ("ids".to_string(), "1".to_string()),
                ("ids".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_nested_query_value_is_rejected() {
        let err = query_pairs(&json!({"filter": {"a": 1}})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Request);
    }

    #[test]
    fn test_resolve_method_defaults_to_get() {
        assert_eq!(resolve_method(None).unwrap(), HttpMethod::Get);
        assert_eq!(resolve_method(Some("")).unwrap(), HttpMethod::Get);
        assert_eq!(resolve_method(Some("post")).unwrap(), HttpMethod::Post);
        assert!(resolve_method(Some("trace")).is_err());
    }

    #[test]
    fn test_options_route_like_catalog() {
        let request = RequestOptions::new("api/env/env_versions")
            .data(json!({"project": "mall"}))
            .into_request()
            .unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.query, vec![("project".to_string(), "mall".to_string())]);

        let request = RequestOptions::new("api/env/refresh_env_versions")
            .method("POST")
            .data(json!({"project": "mall"}))
            .into_request()
            .unwrap();
        assert!(request.query.is_empty());
        assert_eq!(request.body, Some(json!({"project": "mall"})));
    }

    #[test]
    fn test_from_descriptor() {
        let descriptor = OperationDescriptor::new("login", HttpMethod::Post, "api/login")
            .with_content_type(ContentType::FormUrlEncoded);
        let request = OutgoingRequest::from_descriptor(&descriptor, "api/login");
        assert_eq!(request.operation, "login");
        assert_eq!(request.content_type, ContentType::FormUrlEncoded);
        assert_eq!(request.location, PayloadLocation::Body);
    }

    #[test]
    fn test_data_follows_descriptor_location() {
        let descriptor = OperationDescriptor {
            location: PayloadLocation::Query,
            ..OperationDescriptor::new("search_cases", HttpMethod::Post, "api/cases/search")
        };
        let request = OutgoingRequest::from_descriptor(&descriptor, "api/cases/search")
            .data(&json!({"keyword": "login"}))
            .unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.query, vec![("keyword".to_string(), "login".to_string())]);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_route_data_by_location() {
        let data = json!({"id": 3});
        assert_eq!(
            route_data(PayloadLocation::Query, data.clone()).unwrap(),
            Routed::Query(vec![("id".to_string(), "3".to_string())])
        );
        assert_eq!(
            route_data(PayloadLocation::Body, data.clone()).unwrap(),
            Routed::Body(data)
        );
        assert_eq!(route_data(PayloadLocation::Body, Value::Null).unwrap(), Routed::Empty);
    }
}
