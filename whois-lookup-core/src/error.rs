//! 统一错误类型定义

use serde::Serialize;
use thiserror::Error;

/// WHOIS 查询错误类型
///
/// Every runtime variant surfaces to the user as the same failure notification;
/// the variant only matters for logging and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum LookupError {
    /// 输入为空（在输入层拦截，不发起请求）
    #[error("Domain name is required")]
    EmptyInput,

    /// 网络错误
    #[error("Network error: {0}")]
    Network(String),

    /// 非 2xx 状态码
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// 响应体不是预期结构（非 JSON 或缺少 `WhoisRecord`）
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl LookupError {
    /// 是否在输入层就被拦截
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

/// WHOIS 查询 Result 类型别名
pub type LookupResult<T> = std::result::Result<T, LookupError>;
