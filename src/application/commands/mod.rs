//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：合成、克隆/编辑/删除音色、下载/删除历史

mod history_commands;
mod tts_commands;
mod voice_commands;

pub mod handlers;

pub use history_commands::*;
pub use tts_commands::*;
pub use voice_commands::*;
