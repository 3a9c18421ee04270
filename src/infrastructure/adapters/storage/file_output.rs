//! File Output - 音频落盘
//!
//! 实现 AudioOutputPort trait
//!
//! 路径规则:
//! - 调用方给出显式路径时原样使用，不做校验也不加目录前缀
//! - 否则生成 `<output_dir>/<purpose>-<YYYY-MM-DDTHH-MM-SS>.mp3`
//!
//! 同一前缀在同一秒内的两次自动生成会得到同一路径，后写入者覆盖先写入者

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::error::FileOutputError;
use crate::application::ports::AudioOutputPort;

/// 输出文件扩展名
pub const AUDIO_EXTENSION: &str = "mp3";

/// 可排序、文件系统安全的秒级时间戳
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// 解析输出路径
pub fn resolve_output_path(output_dir: &Path, explicit: Option<&str>, purpose: &str) -> PathBuf {
    match explicit.filter(|p| !p.is_empty()) {
        Some(path) => PathBuf::from(path),
        None => timestamped_path(output_dir, purpose, Utc::now()),
    }
}

fn timestamped_path(output_dir: &Path, purpose: &str, now: DateTime<Utc>) -> PathBuf {
    output_dir.join(format!(
        "{}-{}.{}",
        purpose,
        now.format(TIMESTAMP_FORMAT),
        AUDIO_EXTENSION
    ))
}

/// 写入音频文件
///
/// 先递归创建父目录，再覆盖写入；任何一步失败都包装成 FileOutputError
pub async fn write_audio_file(path: &Path, data: &[u8]) -> Result<(), FileOutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| FileOutputError::new(path, e))?;
    }

    fs::write(path, data)
        .await
        .map_err(|e| FileOutputError::new(path, e))?;

    tracing::debug!(path = %path.display(), size = data.len(), "Saved audio file");

    Ok(())
}

/// 文件系统音频输出
pub struct FileAudioOutput {
    /// 自动生成路径时使用的目录
    output_dir: PathBuf,
}

impl FileAudioOutput {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl AudioOutputPort for FileAudioOutput {
    fn resolve_output_path(&self, explicit: Option<&str>, purpose: &str) -> PathBuf {
        resolve_output_path(&self.output_dir, explicit, purpose)
    }

    async fn write_audio(&self, path: &Path, data: &[u8]) -> Result<(), FileOutputError> {
        write_audio_file(path, data).await
    }
}
