//! History Queries

/// 列出合成历史
#[derive(Debug, Clone, Default)]
pub struct ListHistory;

/// 查询单条历史记录
#[derive(Debug, Clone)]
pub struct GetHistoryItem {
    pub history_item_id: String,
}
