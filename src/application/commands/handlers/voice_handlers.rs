//! Voice Command Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::{AddVoice, DeleteVoice, EditVoice};
use crate::application::error::ApplicationError;
use crate::application::ports::PaplaApiPort;
use crate::domain::{Voice, VoiceName, VoiceUpdate};

// ============================================================================
// AddVoice / EditVoice
// ============================================================================

/// 音色变更响应（克隆、编辑共用）
#[derive(Debug, Clone, Serialize)]
pub struct VoiceChangedResponse {
    pub success: bool,
    pub voice: Voice,
}

/// AddVoice Handler
pub struct AddVoiceHandler {
    papla: Arc<dyn PaplaApiPort>,
}

impl AddVoiceHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>) -> Self {
        Self { papla }
    }

    pub async fn handle(&self, command: AddVoice) -> Result<VoiceChangedResponse, ApplicationError> {
        let name = VoiceName::new(command.name).map_err(ApplicationError::validation)?;

        let voice = self
            .papla
            .add_voice(
                name.as_str(),
                &command.audio_file_path,
                command.description.as_deref(),
            )
            .await?;

        tracing::info!(
            voice_id = %voice.voice_id,
            name = %voice.name,
            "Voice cloned"
        );

        Ok(VoiceChangedResponse {
            success: true,
            voice,
        })
    }
}

/// EditVoice Handler
pub struct EditVoiceHandler {
    papla: Arc<dyn PaplaApiPort>,
}

impl EditVoiceHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>) -> Self {
        Self { papla }
    }

    pub async fn handle(&self, command: EditVoice) -> Result<VoiceChangedResponse, ApplicationError> {
        let update = VoiceUpdate::new(command.name, command.description);
        if update.is_empty() {
            // 空更新仍然发送，由服务端决定结果
            tracing::debug!(voice_id = %command.voice_id, "Editing voice without changes");
        }

        let voice = self.papla.edit_voice(&command.voice_id, &update).await?;

        tracing::info!(voice_id = %voice.voice_id, name = %voice.name, "Voice updated");

        Ok(VoiceChangedResponse {
            success: true,
            voice,
        })
    }
}

// ============================================================================
// DeleteVoice
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DeleteVoiceResponse {
    pub success: bool,
    pub voice_id: String,
}

/// DeleteVoice Handler
pub struct DeleteVoiceHandler {
    papla: Arc<dyn PaplaApiPort>,
}

impl DeleteVoiceHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>) -> Self {
        Self { papla }
    }

    pub async fn handle(&self, command: DeleteVoice) -> Result<DeleteVoiceResponse, ApplicationError> {
        self.papla.delete_voice(&command.voice_id).await?;

        tracing::info!(voice_id = %command.voice_id, "Voice deleted");

        Ok(DeleteVoiceResponse {
            success: true,
            voice_id: command.voice_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{HttpPaplaClient, HttpPaplaClientConfig};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> Arc<dyn PaplaApiPort> {
        let config = HttpPaplaClientConfig::new("test-key").with_base_url(server.uri());
        Arc::new(HttpPaplaClient::new(config).unwrap())
    }

    #[tokio::test]
    async fn test_delete_premade_voice_surfaces_api_error() {
        let server = MockServer::start().await;
        let body = r#"{"error":"cannot delete premade voice"}"#;
        Mock::given(method("DELETE"))
            .and(path("/v1/voices/premade-1"))
            .respond_with(ResponseTemplate::new(403).set_body_string(body))
            .mount(&server)
            .await;

        let err = DeleteVoiceHandler::new(client(&server))
            .handle(DeleteVoice {
                voice_id: "premade-1".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            ApplicationError::Api(api) => {
                assert_eq!(api.status, 403);
                assert_eq!(api.body, body);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_edit_voice_drops_empty_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/voices/v-7/edit"))
            .and(body_json(serde_json::json!({"description": "Calm"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "voice_id": "v-7",
                "name": "Old name",
                "category": "cloned"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = EditVoiceHandler::new(client(&server))
            .handle(EditVoice {
                voice_id: "v-7".to_string(),
                name: Some(String::new()),
                description: Some("Calm".to_string()),
            })
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.voice.voice_id, "v-7");
    }

    #[tokio::test]
    async fn test_add_voice_rejects_empty_name_before_calling_api() {
        let server = MockServer::start().await;

        let err = AddVoiceHandler::new(client(&server))
            .handle(AddVoice {
                name: String::new(),
                audio_file_path: "/does/not/matter.mp3".into(),
                description: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
