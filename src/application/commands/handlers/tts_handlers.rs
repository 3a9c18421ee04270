//! TTS Command Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::SynthesizeSpeech;
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioOutputPort, PaplaApiPort, TTS_PURPOSE};

/// 合成结果
#[derive(Debug, Clone, Serialize)]
pub struct SynthesizeSpeechResponse {
    pub success: bool,
    pub file_path: String,
    pub voice_id: String,
    /// 文本字符数（Unicode 标量）
    pub text_length: usize,
}

/// SynthesizeSpeech Handler
pub struct SynthesizeSpeechHandler {
    papla: Arc<dyn PaplaApiPort>,
    output: Arc<dyn AudioOutputPort>,
}

impl SynthesizeSpeechHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>, output: Arc<dyn AudioOutputPort>) -> Self {
        Self { papla, output }
    }

    pub async fn handle(
        &self,
        command: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let file_path = self
            .output
            .resolve_output_path(command.output_path.as_deref(), TTS_PURPOSE);

        let audio = self
            .papla
            .text_to_speech(&command.voice_id, &command.text)
            .await?;
        self.output.write_audio(&file_path, &audio).await?;

        let text_length = command.text.chars().count();
        tracing::info!(
            voice_id = %command.voice_id,
            text_length,
            audio_size = audio.len(),
            file_path = %file_path.display(),
            "Speech synthesized"
        );

        Ok(SynthesizeSpeechResponse {
            success: true,
            file_path: file_path.display().to_string(),
            voice_id: command.voice_id,
            text_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{FileAudioOutput, HttpPaplaClient, HttpPaplaClientConfig};
    use tempfile::tempdir;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn handler(server: &MockServer, output_dir: &std::path::Path) -> SynthesizeSpeechHandler {
        let config = HttpPaplaClientConfig::new("test-key").with_base_url(server.uri());
        let client = HttpPaplaClient::new(config).unwrap();
        SynthesizeSpeechHandler::new(Arc::new(client), Arc::new(FileAudioOutput::new(output_dir)))
    }

    #[tokio::test]
    async fn test_synthesize_writes_auto_named_file() {
        let server = MockServer::start().await;
        let audio = vec![0x49, 0x44, 0x33, 0x04, 0x00, 0xff, 0xfb];
        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/voice-123"))
            .and(header("papla-api-key", "test-key"))
            .and(body_json(serde_json::json!({"text": "Hello world"})))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = tempdir().unwrap();
        let output_dir = temp_dir.path().join("audio");
        let response = handler(&server, &output_dir)
            .handle(SynthesizeSpeech {
                text: "Hello world".to_string(),
                voice_id: "voice-123".to_string(),
                output_path: None,
            })
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.voice_id, "voice-123");
        assert_eq!(response.text_length, 11);

        let written = std::path::PathBuf::from(&response.file_path);
        assert_eq!(written.parent().unwrap(), output_dir.as_path());
        let file_name = written.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("tts-"));
        assert!(file_name.ends_with(".mp3"));
        assert_eq!(std::fs::read(&written).unwrap(), audio);
    }

    #[tokio::test]
    async fn test_synthesize_counts_characters_not_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/v-1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .mount(&server)
            .await;

        let temp_dir = tempdir().unwrap();
        let explicit = temp_dir.path().join("greeting.mp3");
        let response = handler(&server, temp_dir.path())
            .handle(SynthesizeSpeech {
                text: "héllo 世界".to_string(),
                voice_id: "v-1".to_string(),
                output_path: Some(explicit.display().to_string()),
            })
            .await
            .unwrap();

        assert_eq!(response.text_length, 8);
        assert_eq!(response.file_path, explicit.display().to_string());
    }

    #[tokio::test]
    async fn test_synthesize_api_failure_writes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("voice not found"))
            .mount(&server)
            .await;

        let temp_dir = tempdir().unwrap();
        let output_dir = temp_dir.path().join("never-created");
        let err = handler(&server, &output_dir)
            .handle(SynthesizeSpeech {
                text: "Hi".to_string(),
                voice_id: "missing".to_string(),
                output_path: None,
            })
            .await
            .unwrap_err();

        match err {
            ApplicationError::Api(api) => {
                assert_eq!(api.status, 404);
                assert_eq!(api.body, "voice not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!output_dir.exists());
    }
}
