//! Audio Output Port - 出站端口
//!
//! 决定生成的音频落在哪里，并负责写入

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::application::error::FileOutputError;

/// 合成音频的文件名前缀
pub const TTS_PURPOSE: &str = "tts";

/// 历史音频下载的文件名前缀
pub const HISTORY_PURPOSE: &str = "history";

/// Audio Output Port
#[async_trait]
pub trait AudioOutputPort: Send + Sync {
    /// 解析输出路径：显式路径原样使用，否则在输出目录下按前缀和时间戳生成
    fn resolve_output_path(&self, explicit: Option<&str>, purpose: &str) -> PathBuf;

    /// 写入音频，自动创建父目录，覆盖已有文件
    async fn write_audio(&self, path: &Path, data: &[u8]) -> Result<(), FileOutputError>;
}
