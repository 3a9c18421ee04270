//! Tool Catalogue
//!
//! 工具名称、描述、输入 JSON Schema，以及参数解码与校验

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use super::protocol::ToolDefinition;

/// 合成文本长度上限（字符）
pub const MAX_TEXT_CHARS: usize = 5000;

/// 工具名称
pub mod names {
    pub const TTS: &str = "papla_tts";
    pub const LIST_VOICES: &str = "papla_list_voices";
    pub const GET_VOICE: &str = "papla_get_voice";
    pub const ADD_VOICE: &str = "papla_add_voice";
    pub const EDIT_VOICE: &str = "papla_edit_voice";
    pub const DELETE_VOICE: &str = "papla_delete_voice";
    pub const LIST_HISTORY: &str = "papla_list_history";
    pub const GET_HISTORY: &str = "papla_get_history";
    pub const DOWNLOAD_HISTORY_AUDIO: &str = "papla_download_history_audio";
    pub const DELETE_HISTORY: &str = "papla_delete_history";
}

/// 参数错误
#[derive(Debug, Error)]
pub enum ToolArgumentError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {message}")]
    Invalid { tool: &'static str, message: String },
}

// ============================================================================
// Arguments
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TtsArgs {
    pub text: String,
    pub voice_id: String,
    #[serde(default)]
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoiceIdArgs {
    pub voice_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddVoiceArgs {
    pub name: String,
    pub audio_file_path: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditVoiceArgs {
    pub voice_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryItemArgs {
    pub history_item_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DownloadHistoryAudioArgs {
    pub history_item_id: String,
    #[serde(default)]
    pub output_path: Option<String>,
}

/// 解码后的工具调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    Tts(TtsArgs),
    ListVoices,
    GetVoice(VoiceIdArgs),
    AddVoice(AddVoiceArgs),
    EditVoice(EditVoiceArgs),
    DeleteVoice(VoiceIdArgs),
    ListHistory,
    GetHistory(HistoryItemArgs),
    DownloadHistoryAudio(DownloadHistoryAudioArgs),
    DeleteHistory(HistoryItemArgs),
}

impl ToolCall {
    /// 按工具名解码参数；缺省参数视为空对象，多余字段忽略
    pub fn parse(name: &str, arguments: Option<Value>) -> Result<Self, ToolArgumentError> {
        let args = match arguments {
            Some(Value::Null) | None => Value::Object(Default::default()),
            Some(value) => value,
        };

        let call = match name {
            names::TTS => {
                let args: TtsArgs = decode(names::TTS, args)?;
                non_empty(names::TTS, "voice_id", &args.voice_id)?;
                let chars = args.text.chars().count();
                if chars == 0 || chars > MAX_TEXT_CHARS {
                    return Err(invalid(
                        names::TTS,
                        format!("text must be 1-{} characters, got {}", MAX_TEXT_CHARS, chars),
                    ));
                }
                Self::Tts(args)
            }
            names::LIST_VOICES => Self::ListVoices,
            names::GET_VOICE => Self::GetVoice(voice_id_args(names::GET_VOICE, args)?),
            names::ADD_VOICE => {
                let args: AddVoiceArgs = decode(names::ADD_VOICE, args)?;
                non_empty(names::ADD_VOICE, "name", &args.name)?;
                Self::AddVoice(args)
            }
            names::EDIT_VOICE => {
                let args: EditVoiceArgs = decode(names::EDIT_VOICE, args)?;
                non_empty(names::EDIT_VOICE, "voice_id", &args.voice_id)?;
                Self::EditVoice(args)
            }
            names::DELETE_VOICE => Self::DeleteVoice(voice_id_args(names::DELETE_VOICE, args)?),
            names::LIST_HISTORY => Self::ListHistory,
            names::GET_HISTORY => Self::GetHistory(history_item_args(names::GET_HISTORY, args)?),
            names::DOWNLOAD_HISTORY_AUDIO => {
                let args: DownloadHistoryAudioArgs = decode(names::DOWNLOAD_HISTORY_AUDIO, args)?;
                non_empty(names::DOWNLOAD_HISTORY_AUDIO, "history_item_id", &args.history_item_id)?;
                Self::DownloadHistoryAudio(args)
            }
            names::DELETE_HISTORY => {
                Self::DeleteHistory(history_item_args(names::DELETE_HISTORY, args)?)
            }
            other => return Err(ToolArgumentError::UnknownTool(other.to_string())),
        };

        Ok(call)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tts(_) => names::TTS,
            Self::ListVoices => names::LIST_VOICES,
            Self::GetVoice(_) => names::GET_VOICE,
            Self::AddVoice(_) => names::ADD_VOICE,
            Self::EditVoice(_) => names::EDIT_VOICE,
            Self::DeleteVoice(_) => names::DELETE_VOICE,
            Self::ListHistory => names::LIST_HISTORY,
            Self::GetHistory(_) => names::GET_HISTORY,
            Self::DownloadHistoryAudio(_) => names::DOWNLOAD_HISTORY_AUDIO,
            Self::DeleteHistory(_) => names::DELETE_HISTORY,
        }
    }
}

fn decode<T: DeserializeOwned>(tool: &'static str, args: Value) -> Result<T, ToolArgumentError> {
    serde_json::from_value(args).map_err(|e| invalid(tool, e.to_string()))
}

fn voice_id_args(tool: &'static str, args: Value) -> Result<VoiceIdArgs, ToolArgumentError> {
    let args: VoiceIdArgs = decode(tool, args)?;
    non_empty(tool, "voice_id", &args.voice_id)?;
    Ok(args)
}

fn history_item_args(
    tool: &'static str,
    args: Value,
) -> Result<HistoryItemArgs, ToolArgumentError> {
    let args: HistoryItemArgs = decode(tool, args)?;
    non_empty(tool, "history_item_id", &args.history_item_id)?;
    Ok(args)
}

/// 空 ID 会把请求打到集合端点上
fn non_empty(tool: &'static str, field: &str, value: &str) -> Result<(), ToolArgumentError> {
    if value.is_empty() {
        return Err(invalid(tool, format!("{} cannot be empty", field)));
    }
    Ok(())
}

fn invalid(tool: &'static str, message: impl Into<String>) -> ToolArgumentError {
    ToolArgumentError::Invalid {
        tool,
        message: message.into(),
    }
}

// ============================================================================
// Catalogue
// ============================================================================

fn string_prop(description: &str) -> Value {
    json!({"type": "string", "description": description})
}

fn id_prop(description: &str) -> Value {
    json!({"type": "string", "minLength": 1, "description": description})
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// 所有工具定义（tools/list）
pub fn tool_definitions() -> Vec<ToolDefinition> {
    let output_path = string_prop("Output file path (auto-generated if omitted)");

    vec![
        ToolDefinition {
            name: names::TTS,
            description: "Generate speech audio from text using Papla Media TTS",
            input_schema: object_schema(
                json!({
                    "text": {
                        "type": "string",
                        "minLength": 1,
                        "maxLength": MAX_TEXT_CHARS,
                        "description": "Text to convert to speech"
                    },
                    "voice_id": id_prop("Voice ID to use for generation"),
                    "output_path": output_path.clone(),
                }),
                &["text", "voice_id"],
            ),
        },
        ToolDefinition {
            name: names::LIST_VOICES,
            description: "Get all available voices for text-to-speech",
            input_schema: object_schema(json!({}), &[]),
        },
        ToolDefinition {
            name: names::GET_VOICE,
            description: "Get details about a specific voice",
            input_schema: object_schema(
                json!({"voice_id": id_prop("The voice ID to retrieve")}),
                &["voice_id"],
            ),
        },
        ToolDefinition {
            name: names::ADD_VOICE,
            description: "Create a voice clone from an audio sample (minimum 10 seconds)",
            input_schema: object_schema(
                json!({
                    "name": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Name for the new voice"
                    },
                    "audio_file_path": string_prop("Path to audio file for cloning"),
                    "description": string_prop("Description of the voice"),
                }),
                &["name", "audio_file_path"],
            ),
        },
        ToolDefinition {
            name: names::EDIT_VOICE,
            description: "Update a voice name or description",
            input_schema: object_schema(
                json!({
                    "voice_id": id_prop("The voice ID to edit"),
                    "name": string_prop("New name for the voice"),
                    "description": string_prop("New description"),
                }),
                &["voice_id"],
            ),
        },
        ToolDefinition {
            name: names::DELETE_VOICE,
            description: "Delete a voice clone (cannot delete premade voices)",
            input_schema: object_schema(
                json!({"voice_id": id_prop("The voice ID to delete")}),
                &["voice_id"],
            ),
        },
        ToolDefinition {
            name: names::LIST_HISTORY,
            description: "Get all previously generated audio items",
            input_schema: object_schema(json!({}), &[]),
        },
        ToolDefinition {
            name: names::GET_HISTORY,
            description: "Get details about a specific history item",
            input_schema: object_schema(
                json!({"history_item_id": id_prop("The history item ID to retrieve")}),
                &["history_item_id"],
            ),
        },
        ToolDefinition {
            name: names::DOWNLOAD_HISTORY_AUDIO,
            description: "Download audio from a previous generation",
            input_schema: object_schema(
                json!({
                    "history_item_id": id_prop("The history item ID"),
                    "output_path": output_path,
                }),
                &["history_item_id"],
            ),
        },
        ToolDefinition {
            name: names::DELETE_HISTORY,
            description: "Delete a history item and its audio",
            input_schema: object_schema(
                json!({"history_item_id": id_prop("The history item ID to delete")}),
                &["history_item_id"],
            ),
        },
    ]
}
