//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（papla.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{default_api_base_url, default_output_dir, AppConfig};

/// 获取 API Key 的地址
pub const API_KEY_HELP_URL: &str = "https://app.papla.media";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["papla", "papla.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `PAPLA_`，层级分隔符 `__`）
/// 2. 配置文件（papla.toml 或 papla.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `PAPLA_API_KEY=pk_...`
/// - `PAPLA_OUTPUT_DIR=/data/audio`
/// - `PAPLA_API_BASE_URL=https://staging.papla.media`
/// - `PAPLA_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("api_key", "")?
        .set_default(
            "output_dir",
            default_output_dir().to_string_lossy().to_string(),
        )?
        .set_default("api_base_url", default_api_base_url())?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: PAPLA_API_KEY -> api_key, PAPLA_LOG__LEVEL -> log.level
    builder = builder.add_source(
        Environment::with_prefix("PAPLA")
            .prefix_separator("_")
            .separator("__"),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "PAPLA_API_KEY environment variable is required. Get your API key at: {}",
            API_KEY_HELP_URL
        )));
    }

    if config.api_base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "API base URL cannot be empty".to_string(),
        ));
    }

    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Papla MCP Configuration ===");
    tracing::info!("API Base URL: {}", config.api_base_url);
    tracing::info!("API Key: {}", config.masked_api_key());
    tracing::info!("Output Directory: {:?}", config.output_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("===============================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn valid_config() -> AppConfig {
        AppConfig {
            api_key: "pk_test_key".to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_api_key() {
        let err = validate_config(&AppConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("PAPLA_API_KEY"));
        assert!(err.to_string().contains(API_KEY_HELP_URL));
    }

    #[test]
    fn test_validation_error_for_blank_api_key() {
        let mut config = valid_config();
        config.api_key = "   ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = valid_config();
        config.api_base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        // 环境变量优先级更高，外部已设置时跳过
        if std::env::var_os("PAPLA_API_KEY").is_some()
            || std::env::var_os("PAPLA_OUTPUT_DIR").is_some()
        {
            return;
        }

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("papla.toml");
        std::fs::write(
            &path,
            "api_key = \"file-key\"\noutput_dir = \"/srv/papla\"\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.api_key, "file-key");
        assert_eq!(config.output_dir, std::path::PathBuf::from("/srv/papla"));
        if std::env::var_os("PAPLA_LOG__LEVEL").is_none() {
            assert_eq!(config.log.level, "debug");
        }
    }

    #[test]
    fn test_missing_explicit_file_is_load_error() {
        let temp_dir = tempdir().unwrap();
        let result = load_config_from_path(Some(&temp_dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
