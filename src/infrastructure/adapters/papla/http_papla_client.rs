//! HTTP Papla Client - 调用 Papla Media HTTP API
//!
//! 实现 PaplaApiPort trait，所有请求带 `papla-api-key` 头
//!
//! 外部 API（均在 /v1 下）:
//! POST   /v1/text-to-speech/{voice_id}   {"text": "..."} -> audio/mpeg binary
//! GET    /v1/voices                      -> [Voice] 或 {"voices": [Voice]}
//! GET    /v1/voices/{id}                 -> Voice
//! POST   /v1/voices/add                  multipart(name, files, description?) -> Voice
//! POST   /v1/voices/{id}/edit            {"name"?, "description"?} -> Voice
//! DELETE /v1/voices/{id}
//! GET    /v1/history                     -> [HistoryItem] 或 {"history": [HistoryItem]}
//! GET    /v1/history/{id}                -> HistoryItem
//! GET    /v1/history/{id}/audio          -> audio binary
//! DELETE /v1/history/{id}

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::application::error::ApiError;
use crate::application::ports::{PaplaApiPort, PaplaClientError};
use crate::domain::{HistoryItem, Voice, VoiceUpdate};

/// 认证请求头
pub const API_KEY_HEADER: &str = "papla-api-key";

/// 生产环境 API 地址
pub const DEFAULT_BASE_URL: &str = "https://papla.media";

/// 克隆音色上传时固定的文件名和类型
const UPLOAD_FILE_NAME: &str = "audio.mp3";
const UPLOAD_MIME_TYPE: &str = "audio/mpeg";

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
}

/// 请求体形态
enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Form),
}

impl RequestBody {
    fn json<T: Serialize>(payload: &T) -> Result<Self, PaplaClientError> {
        serde_json::to_value(payload)
            .map(Self::Json)
            .map_err(|e| PaplaClientError::InvalidRequest(e.to_string()))
    }
}

/// HTTP Papla 客户端配置
#[derive(Debug, Clone)]
pub struct HttpPaplaClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API Key
    pub api_key: String,
}

impl Default for HttpPaplaClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

impl HttpPaplaClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// HTTP Papla 客户端
///
/// 构造后 API Key 和 base URL 不可变，可以跨任务共享
pub struct HttpPaplaClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HttpPaplaClient {
    /// 创建新的客户端
    pub fn new(config: HttpPaplaClientConfig) -> Result<Self, PaplaClientError> {
        if config.api_key.is_empty() {
            return Err(PaplaClientError::Configuration(
                "API key cannot be empty".to_string(),
            ));
        }
        if config.base_url.is_empty() {
            return Err(PaplaClientError::Configuration(
                "Base URL cannot be empty".to_string(),
            ));
        }

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            PaplaClientError::Configuration(format!("Invalid base URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PaplaClientError::Configuration(format!(
                "Base URL cannot hold a path: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| PaplaClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    /// 拼接请求 URL，每个段单独做百分号编码
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// 发送请求；非 2xx 读取完整响应体并返回 ApiError
    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        body: RequestBody,
    ) -> Result<Response, PaplaClientError> {
        let url = self.url(segments);

        tracing::debug!(method = %method, url = %url, "Sending Papla API request");

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(API_KEY_HEADER, &self.api_key);
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                PaplaClientError::Network(format!("Cannot connect to Papla API: {}", e))
            } else {
                PaplaClientError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| PaplaClientError::Network(format!("Failed to read error body: {}", e)))?;

            tracing::warn!(
                method = %method,
                path = %url.path(),
                status = status.as_u16(),
                "Papla API request failed"
            );

            return Err(ApiError::new(status.as_u16(), body).into());
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, PaplaClientError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PaplaClientError::Network(format!("Failed to read response: {}", e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| PaplaClientError::InvalidResponse(format!("Failed to decode JSON: {}", e)))
    }

    async fn read_audio(response: Response) -> Result<Vec<u8>, PaplaClientError> {
        let audio = response
            .bytes()
            .await
            .map_err(|e| PaplaClientError::Network(format!("Failed to read audio: {}", e)))?
            .to_vec();
        Ok(audio)
    }

    async fn read_collection<T: DeserializeOwned>(
        response: Response,
        wrapper_key: &str,
    ) -> Result<Vec<T>, PaplaClientError> {
        let value: Value = Self::read_json(response).await?;
        extract_collection(value, wrapper_key)
    }
}

/// 兼容两种集合响应形态：先找包装键，找不到就把整个负载当作数组
/// 资源 ID 为空时会落到集合端点上，必须在发请求前拒绝
fn require_id<'a>(kind: &str, id: &'a str) -> Result<&'a str, PaplaClientError> {
    if id.is_empty() {
        return Err(PaplaClientError::InvalidRequest(format!(
            "{} cannot be empty",
            kind
        )));
    }
    Ok(id)
}

pub(crate) fn extract_collection<T: DeserializeOwned>(
    value: Value,
    wrapper_key: &str,
) -> Result<Vec<T>, PaplaClientError> {
    let payload = match value {
        Value::Object(mut map) => match map.remove(wrapper_key) {
            Some(inner) if !inner.is_null() => inner,
            _ => Value::Object(map),
        },
        other => other,
    };

    serde_json::from_value(payload).map_err(|e| {
        PaplaClientError::InvalidResponse(format!(
            "Expected an array or an object with \"{}\": {}",
            wrapper_key, e
        ))
    })
}

#[async_trait]
impl PaplaApiPort for HttpPaplaClient {
    async fn text_to_speech(&self, voice_id: &str, text: &str) -> Result<Vec<u8>, PaplaClientError> {
        let voice_id = require_id("voice_id", voice_id)?;
        let body = RequestBody::json(&TextToSpeechRequest { text })?;
        let response = self
            .send(Method::POST, &["v1", "text-to-speech", voice_id], body)
            .await?;
        let audio = Self::read_audio(response).await?;

        tracing::debug!(voice_id = %voice_id, audio_size = audio.len(), "TTS audio received");

        Ok(audio)
    }

    async fn list_voices(&self) -> Result<Vec<Voice>, PaplaClientError> {
        let response = self.send(Method::GET, &["v1", "voices"], RequestBody::Empty).await?;
        Self::read_collection(response, "voices").await
    }

    async fn get_voice(&self, voice_id: &str) -> Result<Voice, PaplaClientError> {
        let voice_id = require_id("voice_id", voice_id)?;
        let response = self
            .send(Method::GET, &["v1", "voices", voice_id], RequestBody::Empty)
            .await?;
        Self::read_json(response).await
    }

    async fn add_voice(
        &self,
        name: &str,
        audio_file_path: &Path,
        description: Option<&str>,
    ) -> Result<Voice, PaplaClientError> {
        let audio = tokio::fs::read(audio_file_path)
            .await
            .map_err(|e| PaplaClientError::AudioFileRead {
                path: audio_file_path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            name = %name,
            audio_file = %audio_file_path.display(),
            audio_size = audio.len(),
            "Uploading voice sample"
        );

        let part = Part::bytes(audio)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(UPLOAD_MIME_TYPE)
            .map_err(|e| PaplaClientError::InvalidRequest(e.to_string()))?;
        let mut form = Form::new().text("name", name.to_string()).part("files", part);
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            form = form.text("description", description.to_string());
        }

        let response = self
            .send(Method::POST, &["v1", "voices", "add"], RequestBody::Multipart(form))
            .await?;
        Self::read_json(response).await
    }

    async fn edit_voice(
        &self,
        voice_id: &str,
        update: &VoiceUpdate,
    ) -> Result<Voice, PaplaClientError> {
        let voice_id = require_id("voice_id", voice_id)?;
        let body = RequestBody::json(update)?;
        let response = self
            .send(Method::POST, &["v1", "voices", voice_id, "edit"], body)
            .await?;
        Self::read_json(response).await
    }

    async fn delete_voice(&self, voice_id: &str) -> Result<(), PaplaClientError> {
        let voice_id = require_id("voice_id", voice_id)?;
        self.send(Method::DELETE, &["v1", "voices", voice_id], RequestBody::Empty)
            .await?;
        Ok(())
    }

    async fn list_history(&self) -> Result<Vec<HistoryItem>, PaplaClientError> {
        let response = self.send(Method::GET, &["v1", "history"], RequestBody::Empty).await?;
        Self::read_collection(response, "history").await
    }

    async fn get_history(&self, history_item_id: &str) -> Result<HistoryItem, PaplaClientError> {
        let history_item_id = require_id("history_item_id", history_item_id)?;
        let response = self
            .send(Method::GET, &["v1", "history", history_item_id], RequestBody::Empty)
            .await?;
        Self::read_json(response).await
    }

    async fn get_history_audio(&self, history_item_id: &str) -> Result<Vec<u8>, PaplaClientError> {
        let history_item_id = require_id("history_item_id", history_item_id)?;
        let response = self
            .send(
                Method::GET,
                &["v1", "history", history_item_id, "audio"],
                RequestBody::Empty,
            )
            .await?;
        Self::read_audio(response).await
    }

    async fn delete_history(&self, history_item_id: &str) -> Result<(), PaplaClientError> {
        let history_item_id = require_id("history_item_id", history_item_id)?;
        self.send(
            Method::DELETE,
            &["v1", "history", history_item_id],
            RequestBody::Empty,
        )
        .await?;
        Ok(())
    }
}
