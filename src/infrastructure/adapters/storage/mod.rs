//! Storage Adapter - 音频文件输出

mod file_output;

pub use file_output::*;
