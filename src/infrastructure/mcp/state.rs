//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddVoiceHandler, DeleteHistoryItemHandler, DeleteVoiceHandler, DownloadHistoryAudioHandler,
    EditVoiceHandler, SynthesizeSpeechHandler,
    // Query handlers
    GetHistoryItemHandler, GetVoiceHandler, ListHistoryHandler, ListVoicesHandler,
    // Ports
    AudioOutputPort, PaplaApiPort,
};

/// 应用状态
///
/// 所有 handler 共享同一个只读客户端，可被多个并发调用同时使用
pub struct AppState {
    // ========== Command Handlers ==========
    pub synthesize_speech_handler: SynthesizeSpeechHandler,
    pub add_voice_handler: AddVoiceHandler,
    pub edit_voice_handler: EditVoiceHandler,
    pub delete_voice_handler: DeleteVoiceHandler,
    pub download_history_audio_handler: DownloadHistoryAudioHandler,
    pub delete_history_item_handler: DeleteHistoryItemHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListVoicesHandler,
    pub get_voice_handler: GetVoiceHandler,
    pub list_history_handler: ListHistoryHandler,
    pub get_history_item_handler: GetHistoryItemHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(papla: Arc<dyn PaplaApiPort>, output: Arc<dyn AudioOutputPort>) -> Self {
        Self {
            synthesize_speech_handler: SynthesizeSpeechHandler::new(papla.clone(), output.clone()),
            add_voice_handler: AddVoiceHandler::new(papla.clone()),
            edit_voice_handler: EditVoiceHandler::new(papla.clone()),
            delete_voice_handler: DeleteVoiceHandler::new(papla.clone()),
            download_history_audio_handler: DownloadHistoryAudioHandler::new(
                papla.clone(),
                output,
            ),
            delete_history_item_handler: DeleteHistoryItemHandler::new(papla.clone()),

            list_voices_handler: ListVoicesHandler::new(papla.clone()),
            get_voice_handler: GetVoiceHandler::new(papla.clone()),
            list_history_handler: ListHistoryHandler::new(papla.clone()),
            get_history_item_handler: GetHistoryItemHandler::new(papla),
        }
    }
}
