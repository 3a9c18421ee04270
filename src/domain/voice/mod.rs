//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 远端音色的数据模型
//! - 音色编辑的部分更新

mod entities;
mod value_objects;

pub use entities::{Voice, VoiceCategory};
pub use value_objects::{VoiceName, VoiceUpdate};
