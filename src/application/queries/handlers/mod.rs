//! Query Handlers 实现

mod history_handlers;
mod voice_handlers;

pub use history_handlers::*;
pub use voice_handlers::*;
