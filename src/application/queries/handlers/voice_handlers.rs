//! Voice Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::PaplaApiPort;
use crate::application::queries::{GetVoice, ListVoices};
use crate::domain::Voice;

// ============================================================================
// Response DTOs
// ============================================================================

/// 音色列表响应
#[derive(Debug, Clone, Serialize)]
pub struct VoiceListResponse {
    pub voices: Vec<Voice>,
    pub total: usize,
}

/// 音色详情响应
#[derive(Debug, Clone, Serialize)]
pub struct VoiceDetailResponse {
    pub voice: Voice,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListVoices Handler
pub struct ListVoicesHandler {
    papla: Arc<dyn PaplaApiPort>,
}

impl ListVoicesHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>) -> Self {
        Self { papla }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<VoiceListResponse, ApplicationError> {
        let voices = self.papla.list_voices().await?;
        let total = voices.len();
        Ok(VoiceListResponse { voices, total })
    }
}

/// GetVoice Handler
pub struct GetVoiceHandler {
    papla: Arc<dyn PaplaApiPort>,
}

impl GetVoiceHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>) -> Self {
        Self { papla }
    }

    pub async fn handle(&self, query: GetVoice) -> Result<VoiceDetailResponse, ApplicationError> {
        let voice = self.papla.get_voice(&query.voice_id).await?;
        Ok(VoiceDetailResponse { voice })
    }
}
