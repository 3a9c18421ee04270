//! Voice Commands

use std::path::PathBuf;

/// 克隆音色命令
#[derive(Debug, Clone)]
pub struct AddVoice {
    pub name: String,
    pub audio_file_path: PathBuf,
    pub description: Option<String>,
}

/// 编辑音色命令
#[derive(Debug, Clone)]
pub struct EditVoice {
    pub voice_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// 删除音色命令
#[derive(Debug, Clone)]
pub struct DeleteVoice {
    pub voice_id: String,
}
