//! Tool Error Handling
//!
//! ApiError / FileOutputError 渲染为 isError 的工具结果；
//! 参数错误映射为 -32602；其余错误视为意外，映射为 -32603

use serde_json::json;

use super::protocol::{CallToolResult, JsonRpcError};
use super::tools::ToolArgumentError;
use crate::application::ApplicationError;

/// 将应用层错误转换为工具调用结果
pub fn tool_failure(tool: &str, err: ApplicationError) -> Result<CallToolResult, JsonRpcError> {
    match err {
        ApplicationError::Api(api) => {
            tracing::warn!(tool, status = api.status, error = %api, "Tool failed with API error");
            Ok(CallToolResult::failure(&json!({
                "success": false,
                "error": api.to_string(),
                "code": api.status,
            })))
        }
        ApplicationError::FileOutput(e) => {
            tracing::warn!(tool, path = %e.path.display(), error = %e, "Tool failed writing output");
            Ok(CallToolResult::failure(&json!({
                "success": false,
                "error": e.to_string(),
                "path": e.path.display().to_string(),
            })))
        }
        ApplicationError::ValidationError(msg) => {
            tracing::warn!(tool, error = %msg, "Tool rejected arguments");
            Err(JsonRpcError::invalid_params(msg))
        }
        other => {
            tracing::error!(tool, error = %other, "Tool failed unexpectedly");
            Err(JsonRpcError::internal(other.to_string()))
        }
    }
}

impl From<ToolArgumentError> for JsonRpcError {
    fn from(err: ToolArgumentError) -> Self {
        JsonRpcError::invalid_params(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApiError, FileOutputError};
    use crate::infrastructure::mcp::protocol::code;

    fn payload(result: &CallToolResult) -> serde_json::Value {
        serde_json::from_str(result.text().unwrap()).unwrap()
    }

    #[test]
    fn test_api_error_becomes_is_error_result() {
        let err = ApplicationError::Api(ApiError::new(401, "invalid api key"));
        let result = tool_failure("papla_tts", err).unwrap();

        assert_eq!(result.is_error, Some(true));
        let body = payload(&result);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], 401);
        assert_eq!(body["error"], "Papla API error (401): invalid api key");
    }

    #[test]
    fn test_file_output_error_becomes_is_error_result() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ApplicationError::FileOutput(FileOutputError::new("/ro/out.mp3", io));
        let result = tool_failure("papla_tts", err).unwrap();

        assert_eq!(result.is_error, Some(true));
        let body = payload(&result);
        assert_eq!(body["path"], "/ro/out.mp3");
        assert!(body.get("code").is_none());
    }

    #[test]
    fn test_other_errors_are_protocol_errors() {
        let err = ApplicationError::ExternalServiceError("connection reset".into());
        let rpc = tool_failure("papla_list_voices", err).unwrap_err();
        assert_eq!(rpc.code, code::INTERNAL_ERROR);

        let err = ApplicationError::validation("name cannot be empty");
        let rpc = tool_failure("papla_add_voice", err).unwrap_err();
        assert_eq!(rpc.code, code::INVALID_PARAMS);
    }
}
