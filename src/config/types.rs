//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Papla API Key（必填）
    #[serde(default)]
    pub api_key: String,

    /// 自动生成音频文件的输出目录
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Papla API 基础 URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            output_dir: default_output_dir(),
            api_base_url: default_api_base_url(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// 日志中展示的 API Key（只保留末 4 位）
    pub fn masked_api_key(&self) -> String {
        mask_secret(&self.api_key)
    }
}

pub(crate) fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("papla-audio")
}

pub(crate) fn default_api_base_url() -> String {
    "https://papla.media".to_string()
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.api_base_url, "https://papla.media");
        assert!(config.output_dir.ends_with("papla-audio"));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_masked_api_key() {
        let mut config = AppConfig::default();
        config.api_key = "pk_live_1234567890abcd".to_string();
        assert_eq!(config.masked_api_key(), "****abcd");

        config.api_key = "short".to_string();
        assert_eq!(config.masked_api_key(), "****");
    }
}
