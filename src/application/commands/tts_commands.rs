//! TTS Commands

/// 文本合成语音命令
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    pub text: String,
    pub voice_id: String,
    /// 显式输出路径，未设置时自动生成
    pub output_path: Option<String>,
}
