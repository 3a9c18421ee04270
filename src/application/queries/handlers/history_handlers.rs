//! History Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::PaplaApiPort;
use crate::application::queries::{GetHistoryItem, ListHistory};
use crate::domain::HistoryItem;

/// 历史列表响应
#[derive(Debug, Clone, Serialize)]
pub struct HistoryListResponse {
    pub items: Vec<HistoryItem>,
    pub total: usize,
}

/// 历史详情响应
#[derive(Debug, Clone, Serialize)]
pub struct HistoryDetailResponse {
    pub item: HistoryItem,
}

/// ListHistory Handler
pub struct ListHistoryHandler {
    papla: Arc<dyn PaplaApiPort>,
}

impl ListHistoryHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>) -> Self {
        Self { papla }
    }

    pub async fn handle(&self, _query: ListHistory) -> Result<HistoryListResponse, ApplicationError> {
        let items = self.papla.list_history().await?;
        let total = items.len();
        Ok(HistoryListResponse { items, total })
    }
}

/// GetHistoryItem Handler
pub struct GetHistoryItemHandler {
    papla: Arc<dyn PaplaApiPort>,
}

impl GetHistoryItemHandler {
    pub fn new(papla: Arc<dyn PaplaApiPort>) -> Self {
        Self { papla }
    }

    pub async fn handle(
        &self,
        query: GetHistoryItem,
    ) -> Result<HistoryDetailResponse, ApplicationError> {
        let item = self.papla.get_history(&query.history_item_id).await?;
        Ok(HistoryDetailResponse { item })
    }
}
