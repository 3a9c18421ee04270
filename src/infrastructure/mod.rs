//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及 MCP 工具服务

pub mod adapters;
pub mod mcp;

pub use adapters::{FileAudioOutput, HttpPaplaClient, HttpPaplaClientConfig};
pub use mcp::{AppState, McpServer};
