//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Voice Context: 音色
//! - History Context: 合成历史

pub mod history;
pub mod voice;

pub use history::HistoryItem;
pub use voice::{Voice, VoiceCategory, VoiceName, VoiceUpdate};
