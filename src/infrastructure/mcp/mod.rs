//! MCP Layer - 工具注册与分发
//!
//! - protocol: JSON-RPC / MCP 数据结构
//! - tools: 工具目录与参数校验
//! - dispatch: 工具调用到 handler 的分发
//! - error: 错误到工具结果的映射
//! - server: stdio 传输

pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod server;
pub mod state;
pub mod tools;

pub use server::{McpServer, SERVER_NAME};
pub use state::AppState;
