//! papla-mcp - Papla Media TTS 的 MCP 工具服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 音色
//! - History Context: 合成历史
//!
//! 应用层 (application/):
//! - Ports: 端口定义（PaplaApiPort, AudioOutputPort）
//! - Commands: 合成、克隆/编辑/删除音色、下载/删除历史
//! - Queries: 音色与历史查询
//! - Error: ApiError / FileOutputError 两类可恢复错误
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP Papla 客户端、文件输出
//! - MCP: 工具目录、分发与 stdio 服务

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
