//! History Commands

/// 下载历史音频命令
#[derive(Debug, Clone)]
pub struct DownloadHistoryAudio {
    pub history_item_id: String,
    pub output_path: Option<String>,
}

/// 删除历史记录命令
#[derive(Debug, Clone)]
pub struct DeleteHistoryItem {
    pub history_item_id: String,
}
