//! History Context - Entities

use serde::{Deserialize, Serialize};

/// 历史记录 - 每次合成后由服务端生成
///
/// 对本系统只读，唯一的写操作是删除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub history_item_id: String,
    pub voice_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_name: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_history_item() {
        let json = r#"{
            "history_item_id": "hist-1",
            "voice_id": "v-1",
            "voice_name": "Narrator",
            "text": "Hello world",
            "created_at": "2024-05-01T10:00:00Z",
            "character_count": 11
        }"#;
        let item: HistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.history_item_id, "hist-1");
        assert_eq!(item.character_count, Some(11));
    }

    #[test]
    fn test_decode_without_optionals() {
        let json = r#"{"history_item_id": "hist-2", "voice_id": "v-2", "text": "Hi"}"#;
        let item: HistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.voice_name, None);
        assert_eq!(item.created_at, None);
    }
}
