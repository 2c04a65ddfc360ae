use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// 业务成功码
pub const SUCCESS_CODE: i64 = 200;

/// 响应信封 `{code, data, msg}`
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub code: Option<i64>,
    pub data: Value,
    pub msg: Option<String>,
}

impl Envelope {
    /// 解析响应体；不是 JSON 对象时返回 `None`
    pub fn parse(body: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<Value>(body).ok()? {
            Value::Object(mut map) => Some(Self {
                code: map.get("code").and_then(integer),
                msg: map.get("msg").and_then(|m| m.as_str()).map(str::to_string),
                data: map.remove("data").unwrap_or(Value::Null),
            }),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(SUCCESS_CODE)
    }
}

fn integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

/// 解包 2xx 响应
///
/// 只有 `code == 200` 视为成功，原样返回 `data`；缺少 `code`、
/// 响应体不是 JSON 对象或其他任何码都按业务失败处理。
pub fn unwrap_envelope(body: &[u8]) -> ApiResult<Value> {
    match Envelope::parse(body) {
        Some(envelope) if envelope.is_success() => Ok(envelope.data),
        Some(envelope) => Err(ApiError::domain(envelope.msg.as_deref())),
        None => Err(ApiError::domain(None)),
    }
}

/// 分类非 2xx 响应
///
/// 401 与响应体无关，一律是未授权；其他状态取响应体中的 `msg`，没有则按状态码生成消息。
pub fn classify_status(status: u16, body: &[u8]) -> ApiError {
    if status == 401 {
        return ApiError::unauthorized();
    }
    let msg = Envelope::parse(body).and_then(|envelope| envelope.msg);
    ApiError::status(status, msg.as_deref())
}
