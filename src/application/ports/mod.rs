//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_output;
mod papla_api;

pub use audio_output::{AudioOutputPort, HISTORY_PURPOSE, TTS_PURPOSE};
pub use papla_api::{PaplaApiPort, PaplaClientError};
