use serde::{Deserialize, Serialize};

// ============================================================================
// Defaults
// ============================================================================
// The form starts from these values and returns to them on reset; the
// submit path falls back to them when a field is left blank.
pub const DEFAULT_TONE: &str = "Professional and informative";
pub const DEFAULT_WORD_COUNT: u32 = 1500;
pub const DEFAULT_LANGUAGE: &str = "tiếng Việt";

// ============================================================================
// Request
// ============================================================================
/// Body of the generation POST.
///
/// `sections` carries the heading names in the exact order the user arranged
/// them; the backend is expected to produce content in that order. Serialized
/// field order follows declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub title: String,
    pub sections: Vec<String>,
    pub tone: String,
    pub word_count: u32,
    pub language: String,
    pub keywords: Vec<String>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            sections: Vec::new(),
            tone: DEFAULT_TONE.to_string(),
            word_count: DEFAULT_WORD_COUNT,
            language: DEFAULT_LANGUAGE.to_string(),
            keywords: Vec::new(),
        }
    }
}

// ============================================================================
// Response
// ============================================================================
/// The generated document payload.
///
/// Depending on the backend revision, `content` arrives either as markdown
/// text (the editor parses it into blocks) or as an already-structured block
/// list. Block objects stay opaque here; only the embedded editor interprets
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedContent {
    Markdown(String),
    Blocks(Vec<serde_json::Value>),
}

/// Response of the generation POST. Anything beyond `content` is
/// backend-private and ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub content: GeneratedContent,
}

// ============================================================================
// Error
// ============================================================================
/// The single failure kind of the generation exchange: transport errors,
/// non-2xx statuses and malformed response bodies all collapse into it. The
/// user recovers by resubmitting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("generation request failed: {reason}")]
pub struct GenerationRequestFailed {
    pub reason: String,
}

impl GenerationRequestFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
