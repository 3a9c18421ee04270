//! History Context - 合成历史限界上下文

mod entities;

pub use entities::HistoryItem;
