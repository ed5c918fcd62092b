//! HTTP 客户端适配层
//!
//! 在相对路径上拼接后端基地址，发出单次请求并解析 JSON 响应。
//! 不做重试、超时或退避——瞬时失败原样抛给调用方。
//! 各实体的领域访问函数按文件划分在子模块中。

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

pub mod bills;
pub mod engines;
pub mod users;
pub mod vehicle_specifics;
pub mod vehicles;
pub mod warranties;

const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// 后端基地址，编译期配置
pub fn api_base() -> &'static str {
    option_env!("CARDEAL_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

fn api_url(path: &str) -> String {
    let base = api_base().trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// API 错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络层失败（不可达、构建请求失败）
    Network(String),
    /// HTTP 错误状态，可能带结构化的服务端消息
    Status { status: u16, message: Option<String> },
    /// 响应体解析失败
    Decode(String),
}

impl ApiError {
    /// 服务端提供的错误消息（仅 `Status` 且响应体可解析时存在）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status {
                status,
                message: Some(msg),
            } => write!(f, "http {status}: {msg}"),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "http {status}"),
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

/// 服务端错误响应体 `{ "message": "..." }`
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

async fn status_error(res: Response) -> ApiError {
    let status = res.status();
    let message = res.json::<ErrorBody>().await.ok().map(|body| body.message);
    ApiError::Status { status, message }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    if !res.ok() {
        return Err(status_error(res).await);
    }
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn check(res: Response) -> Result<(), ApiError> {
    if !res.ok() {
        return Err(status_error(res).await);
    }
    Ok(())
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let res = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(res).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let res = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(res).await
}

/// POST，忽略响应体（只关心状态）
pub(crate) async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let res = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(res).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let res = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(res).await
}

pub(crate) async fn delete_unit(path: &str) -> Result<(), ApiError> {
    let res = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(res).await
}

/// 记录到控制台后由调用方原样抛出
pub(crate) fn log_error(context: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("{context}: {err}").into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_for_status_errors() {
        let err = ApiError::Status {
            status: 401,
            message: Some("Wrong credentials".to_string()),
        };
        assert_eq!(err.server_message(), Some("Wrong credentials"));

        assert_eq!(ApiError::Network("timeout".into()).server_message(), None);
        assert_eq!(
            ApiError::Status {
                status: 500,
                message: None
            }
            .server_message(),
            None
        );
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::Status {
            status: 404,
            message: Some("not found".into()),
        };
        assert_eq!(err.to_string(), "http 404: not found");
        assert_eq!(
            ApiError::Decode("eof".into()).to_string(),
            "decode error: eof"
        );
    }
}
