//! 应用层错误定义
//!
//! 错误分类:
//! - ApiError: 远端返回非 2xx，只由 Papla 客户端产生
//! - FileOutputError: 本地写文件失败，只由音频输出适配器产生
//! - 其余错误不做归一化，由调用方按意外失败处理

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::application::ports::PaplaClientError;

/// 远端调用失败（状态码不在 200-299）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Papla API error ({status}): {body}")]
pub struct ApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 原始响应体文本
    pub body: String,
}

impl ApiError {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// 本地 I/O 失败（创建目录或写文件）
#[derive(Debug, Error)]
#[error("Failed to write audio file {}: {source}", .path.display())]
pub struct FileOutputError {
    /// 尝试写入的路径
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl FileOutputError {
    pub fn new(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 远端调用失败
    #[error(transparent)]
    Api(#[from] ApiError),

    /// 本地输出失败
    #[error(transparent)]
    FileOutput(#[from] FileOutputError),

    /// 参数验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误（网络、响应解码等）
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<PaplaClientError> for ApplicationError {
    fn from(err: PaplaClientError) -> Self {
        match err {
            PaplaClientError::Api(api) => Self::Api(api),
            PaplaClientError::Configuration(msg) => Self::InternalError(msg),
            other => Self::ExternalServiceError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status_and_body() {
        let err = ApiError::new(404, r#"{"detail":"voice not found"}"#);
        assert_eq!(
            err.to_string(),
            r#"Papla API error (404): {"detail":"voice not found"}"#
        );
    }

    #[test]
    fn test_file_output_error_keeps_path_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FileOutputError::new("/root/out.mp3", io);
        assert_eq!(err.path, PathBuf::from("/root/out.mp3"));
        assert_eq!(err.source.kind(), std::io::ErrorKind::PermissionDenied);
        assert!(err.to_string().contains("/root/out.mp3"));
    }

    #[test]
    fn test_client_api_error_stays_api_kind() {
        let err = ApplicationError::from(PaplaClientError::Api(ApiError::new(429, "slow down")));
        match err {
            ApplicationError::Api(api) => {
                assert_eq!(api.status, 429);
                assert_eq!(api.body, "slow down");
            }
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_transport_errors_are_external_service_errors() {
        let err = ApplicationError::from(PaplaClientError::Network("connection refused".into()));
        assert!(matches!(err, ApplicationError::ExternalServiceError(_)));

        let err = ApplicationError::from(PaplaClientError::AudioFileRead {
            path: "/missing.mp3".into(),
            message: "No such file".into(),
        });
        match err {
            ApplicationError::ExternalServiceError(msg) => assert!(msg.contains("/missing.mp3")),
            other => panic!("unexpected error kind: {:?}", other),
        }
    }
}
