//! Voice Context - Entities

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 音色类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceCategory {
    /// 平台预置音色（不可删除）
    Premade,
    /// 用户克隆音色
    Cloned,
    /// 服务端新增的未知类别
    #[serde(other)]
    Other,
}

/// 音色 - 远端服务上的合成身份
///
/// 不变量:
/// - voice_id 由远端服务分配且唯一
/// - 本地从不缓存，总是实时获取
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<VoiceCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

impl Voice {
    /// 是否为用户克隆的音色
    pub fn is_cloned(&self) -> bool {
        self.category == Some(VoiceCategory::Cloned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_voice() {
        let json = r#"{
            "voice_id": "v-1",
            "name": "Narrator",
            "category": "cloned",
            "preview_url": "https://cdn.example/v-1.mp3",
            "labels": {"accent": "british"}
        }"#;
        let voice: Voice = serde_json::from_str(json).unwrap();
        assert_eq!(voice.voice_id, "v-1");
        assert!(voice.is_cloned());
        assert_eq!(
            voice.labels.unwrap().get("accent").map(String::as_str),
            Some("british")
        );
    }

    #[test]
    fn test_decode_minimal_voice_ignores_unknown_fields() {
        let json = r#"{"voice_id": "v-2", "name": "Plain", "sample_rate": 44100}"#;
        let voice: Voice = serde_json::from_str(json).unwrap();
        assert_eq!(voice.category, None);
        assert_eq!(voice.preview_url, None);
        assert!(!voice.is_cloned());
    }

    #[test]
    fn test_unknown_category_maps_to_other() {
        let json = r#"{"voice_id": "v-3", "name": "Gen", "category": "generated"}"#;
        let voice: Voice = serde_json::from_str(json).unwrap();
        assert_eq!(voice.category, Some(VoiceCategory::Other));
    }

    #[test]
    fn test_serialize_omits_absent_optionals() {
        let voice = Voice {
            voice_id: "v-4".to_string(),
            name: "Quiet".to_string(),
            category: Some(VoiceCategory::Premade),
            preview_url: None,
            labels: None,
        };
        let value = serde_json::to_value(&voice).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"voice_id": "v-4", "name": "Quiet", "category": "premade"})
        );
    }
}
