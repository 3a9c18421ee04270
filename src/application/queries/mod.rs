//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：音色与历史记录的读取

mod history_queries;
mod voice_queries;

pub mod handlers;

pub use history_queries::*;
pub use voice_queries::*;
