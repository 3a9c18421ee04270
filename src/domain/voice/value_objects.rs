//! Voice Context - Value Objects

use serde::Serialize;

/// 音色名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceName(String);

impl VoiceName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.is_empty() {
            return Err("Voice name cannot be empty");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音色编辑 - 部分更新
///
/// 只允许修改名称和描述；未设置的字段不会出现在请求体中
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VoiceUpdate {
    /// 构造部分更新，空字符串视为未设置
    pub fn new(name: Option<String>, description: Option<String>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            description: description.filter(|d| !d.is_empty()),
        }
    }

    /// 没有任何字段时请求不会产生效果
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
