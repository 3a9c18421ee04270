//! Tool Dispatch
//!
//! 将解码后的 ToolCall 交给对应 handler，并把结果渲染为工具结果

use serde::Serialize;
use serde_json::Value;

use super::error::tool_failure;
use super::protocol::{CallToolResult, JsonRpcError};
use super::state::AppState;
use super::tools::ToolCall;
use crate::application::{
    AddVoice, ApplicationError, DeleteHistoryItem, DeleteVoice, DownloadHistoryAudio, EditVoice,
    GetHistoryItem, GetVoice, ListHistory, ListVoices, SynthesizeSpeech,
};

/// 执行一次工具调用
pub async fn call_tool(state: &AppState, call: ToolCall) -> Result<CallToolResult, JsonRpcError> {
    let tool = call.name();
    tracing::info!(tool, "Tool invoked");

    match execute(state, call).await {
        Ok(payload) => Ok(CallToolResult::success(&payload)),
        Err(err) => tool_failure(tool, err),
    }
}

async fn execute(state: &AppState, call: ToolCall) -> Result<Value, ApplicationError> {
    match call {
        ToolCall::Tts(args) => payload(
            state
                .synthesize_speech_handler
                .handle(SynthesizeSpeech {
                    text: args.text,
                    voice_id: args.voice_id,
                    output_path: args.output_path,
                })
                .await?,
        ),
        ToolCall::ListVoices => payload(state.list_voices_handler.handle(ListVoices).await?),
        ToolCall::GetVoice(args) => payload(
            state
                .get_voice_handler
                .handle(GetVoice {
                    voice_id: args.voice_id,
                })
                .await?,
        ),
        ToolCall::AddVoice(args) => payload(
            state
                .add_voice_handler
                .handle(AddVoice {
                    name: args.name,
                    audio_file_path: args.audio_file_path.into(),
                    description: args.description,
                })
                .await?,
        ),
        ToolCall::EditVoice(args) => payload(
            state
                .edit_voice_handler
                .handle(EditVoice {
                    voice_id: args.voice_id,
                    name: args.name,
                    description: args.description,
                })
                .await?,
        ),
        ToolCall::DeleteVoice(args) => payload(
            state
                .delete_voice_handler
                .handle(DeleteVoice {
                    voice_id: args.voice_id,
                })
                .await?,
        ),
        ToolCall::ListHistory => payload(state.list_history_handler.handle(ListHistory).await?),
        ToolCall::GetHistory(args) => payload(
            state
                .get_history_item_handler
                .handle(GetHistoryItem {
                    history_item_id: args.history_item_id,
                })
                .await?,
        ),
        ToolCall::DownloadHistoryAudio(args) => payload(
            state
                .download_history_audio_handler
                .handle(DownloadHistoryAudio {
                    history_item_id: args.history_item_id,
                    output_path: args.output_path,
                })
                .await?,
        ),
        ToolCall::DeleteHistory(args) => payload(
            state
                .delete_history_item_handler
                .handle(DeleteHistoryItem {
                    history_item_id: args.history_item_id,
                })
                .await?,
        ),
    }
}

fn payload<T: Serialize>(response: T) -> Result<Value, ApplicationError> {
    serde_json::to_value(response).map_err(|e| ApplicationError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{FileAudioOutput, HttpPaplaClient, HttpPaplaClientConfig};
    use crate::infrastructure::mcp::protocol::code;
    use crate::infrastructure::mcp::tools::{names, VoiceIdArgs};
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state(server: &MockServer, output_dir: &TempDir) -> AppState {
        let config = HttpPaplaClientConfig::new("test-key").with_base_url(server.uri());
        let client = Arc::new(HttpPaplaClient::new(config).unwrap());
        AppState::new(client, Arc::new(FileAudioOutput::new(output_dir.path())))
    }

    fn body(result: &CallToolResult) -> Value {
        serde_json::from_str(result.text().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_list_voices_envelope_has_total() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/voices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "voices": [
                    {"voice_id": "a", "name": "A", "category": "premade"},
                    {"voice_id": "b", "name": "B", "category": "cloned"}
                ]
            })))
            .mount(&server)
            .await;
        let dir = tempdir().unwrap();

        let result = call_tool(&state(&server, &dir), ToolCall::ListVoices)
            .await
            .unwrap();

        assert_eq!(result.is_error, None);
        let payload = body(&result);
        assert_eq!(payload["total"], 2);
        assert_eq!(payload["voices"][1]["voice_id"], "b");
    }

    #[tokio::test]
    async fn test_delete_premade_voice_is_error_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/voices/premade-1"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string(r#"{"error":"cannot delete premade voice"}"#),
            )
            .mount(&server)
            .await;
        let dir = tempdir().unwrap();

        let result = call_tool(
            &state(&server, &dir),
            ToolCall::DeleteVoice(VoiceIdArgs {
                voice_id: "premade-1".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(result.is_error, Some(true));
        let payload = body(&result);
        assert_eq!(payload["success"], false);
        assert_eq!(payload["code"], 403);
        assert!(payload["error"]
            .as_str()
            .unwrap()
            .contains("cannot delete premade voice"));
    }

    #[tokio::test]
    async fn test_get_history_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/history/h-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "history_item_id": "h-1",
                "voice_id": "v-1",
                "text": "Hello"
            })))
            .mount(&server)
            .await;
        let dir = tempdir().unwrap();

        let call = ToolCall::parse(names::GET_HISTORY, Some(json!({"history_item_id": "h-1"})))
            .unwrap();
        let result = call_tool(&state(&server, &dir), call).await.unwrap();

        assert_eq!(body(&result)["item"]["text"], "Hello");
    }

    #[tokio::test]
    async fn test_missing_upload_file_is_internal_error() {
        let server = MockServer::start().await;
        let dir = tempdir().unwrap();

        let call = ToolCall::parse(
            names::ADD_VOICE,
            Some(json!({"name": "Ghost", "audio_file_path": "/no/such/sample.mp3"})),
        )
        .unwrap();
        let err = call_tool(&state(&server, &dir), call).await.unwrap_err();

        assert_eq!(err.code, code::INTERNAL_ERROR);
        assert!(err.message.contains("/no/such/sample.mp3"));
    }
}
