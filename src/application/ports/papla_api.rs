//! Papla API Port - 远端 TTS 服务抽象
//!
//! 定义远端调用的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::application::error::ApiError;
use crate::domain::{HistoryItem, Voice, VoiceUpdate};

/// Papla 客户端错误
#[derive(Debug, Error)]
pub enum PaplaClientError {
    /// 远端返回非 2xx
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 克隆音色时读取本地音频失败
    #[error("Failed to read audio file {path}: {message}")]
    AudioFileRead { path: String, message: String },

    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

/// Papla API Port
///
/// 每个远端操作一次请求/响应，不重试
#[async_trait]
pub trait PaplaApiPort: Send + Sync {
    /// 文本合成语音，返回原始音频字节
    async fn text_to_speech(&self, voice_id: &str, text: &str) -> Result<Vec<u8>, PaplaClientError>;

    async fn list_voices(&self) -> Result<Vec<Voice>, PaplaClientError>;

    async fn get_voice(&self, voice_id: &str) -> Result<Voice, PaplaClientError>;

    /// 上传音频样本克隆音色（时长下限由服务端校验）
    async fn add_voice(
        &self,
        name: &str,
        audio_file_path: &Path,
        description: Option<&str>,
    ) -> Result<Voice, PaplaClientError>;

    async fn edit_voice(
        &self,
        voice_id: &str,
        update: &VoiceUpdate,
    ) -> Result<Voice, PaplaClientError>;

    /// 删除音色；预置音色会被服务端拒绝
    async fn delete_voice(&self, voice_id: &str) -> Result<(), PaplaClientError>;

    async fn list_history(&self) -> Result<Vec<HistoryItem>, PaplaClientError>;

    async fn get_history(&self, history_item_id: &str) -> Result<HistoryItem, PaplaClientError>;

    async fn get_history_audio(&self, history_item_id: &str) -> Result<Vec<u8>, PaplaClientError>;

    async fn delete_history(&self, history_item_id: &str) -> Result<(), PaplaClientError>;
}
