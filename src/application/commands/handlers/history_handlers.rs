//! History Command Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::{DeleteHistoryItem, DownloadHistoryAudio};
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioOutputPort, PaplaApiPort, HISTORY_PURPOSE};

// ============================================================================
// DownloadHistoryAudio
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DownloadHistoryAudioResponse {
    pub success: bool,
    pub file_path: String,
    pub history_item_id: String,
}

/// DownloadHistoryAudio Handler
pub struct DownloadHistoryAudioHandler {
    papla: Arc<dyn PaplaApiPort>,
    output: Arc<dyn AudioOutputPort>,
}

impl DownloadHistoryAudioHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>, output: Arc<dyn AudioOutputPort>) -> Self {
        Self { papla, output }
    }

    pub async fn handle(
        &self,
        command: DownloadHistoryAudio,
    ) -> Result<DownloadHistoryAudioResponse, ApplicationError> {
        let file_path = self
            .output
            .resolve_output_path(command.output_path.as_deref(), HISTORY_PURPOSE);

        let audio = self
            .papla
            .get_history_audio(&command.history_item_id)
            .await?;
        self.output.write_audio(&file_path, &audio).await?;

        tracing::info!(
            history_item_id = %command.history_item_id,
            audio_size = audio.len(),
            file_path = %file_path.display(),
            "History audio downloaded"
        );

        Ok(DownloadHistoryAudioResponse {
            success: true,
            file_path: file_path.display().to_string(),
            history_item_id: command.history_item_id,
        })
    }
}

// ============================================================================
// DeleteHistoryItem
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DeleteHistoryItemResponse {
    pub success: bool,
    pub history_item_id: String,
}

/// DeleteHistoryItem Handler
pub struct DeleteHistoryItemHandler {
    papla: Arc<dyn PaplaApiPort>,
}

impl DeleteHistoryItemHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>) -> Self {
        Self { papla }
    }

    pub async fn handle(
        &self,
        command: DeleteHistoryItem,
    ) -> Result<DeleteHistoryItemResponse, ApplicationError> {
        self.papla.delete_history(&command.history_item_id).await?;

        tracing::info!(history_item_id = %command.history_item_id, "History item deleted");

        Ok(DeleteHistoryItemResponse {
            success: true,
            history_item_id: command.history_item_id,
        })
    }
}
