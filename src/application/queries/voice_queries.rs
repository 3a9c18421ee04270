//! Voice Queries

/// 列出所有音色
#[derive(Debug, Clone, Default)]
pub struct ListVoices;

/// 查询单个音色
#[derive(Debug, Clone)]
pub struct GetVoice {
    pub voice_id: String,
}
