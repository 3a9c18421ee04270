//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PaplaApi、AudioOutput）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 错误分类（ApiError、FileOutputError）

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // TTS commands
    SynthesizeSpeech,
    // Voice commands
    AddVoice,
    DeleteVoice,
    EditVoice,
    // History commands
    DeleteHistoryItem,
    DownloadHistoryAudio,
    // Handlers
    handlers::{
        AddVoiceHandler, DeleteHistoryItemHandler, DeleteHistoryItemResponse,
        DeleteVoiceHandler, DeleteVoiceResponse, DownloadHistoryAudioHandler,
        DownloadHistoryAudioResponse, EditVoiceHandler, SynthesizeSpeechHandler,
        SynthesizeSpeechResponse, VoiceChangedResponse,
    },
};

pub use error::{ApiError, ApplicationError, FileOutputError};

pub use ports::{AudioOutputPort, PaplaApiPort, PaplaClientError, HISTORY_PURPOSE, TTS_PURPOSE};

pub use queries::{
    // Voice queries
    GetVoice,
    ListVoices,
    // History queries
    GetHistoryItem,
    ListHistory,
    // Handlers
    handlers::{
        GetHistoryItemHandler, GetVoiceHandler, HistoryDetailResponse, HistoryListResponse,
        ListHistoryHandler, ListVoicesHandler, VoiceDetailResponse, VoiceListResponse,
    },
};
