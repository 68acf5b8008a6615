use super::error::{AnalysisError, UNKNOWN_ERROR};
use serde::{Deserialize, Serialize};

/// Конверт ответа `POST /analyze`
///
/// `{"ok": true, "result": "..."}` при успехе,
/// `{"ok": false, "error": "..."}` при ошибке (`error` может отсутствовать).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeEnvelope {
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeEnvelope {
    pub fn success(result: impl Into<String>) -> Self {
        Self {
            ok: true,
            result: Some(result.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }

    /// Забрать поле, соответствующее `ok`
    pub fn into_result(self) -> Result<String, AnalysisError> {
        if self.ok {
            return self
                .result
                .ok_or_else(|| AnalysisError::transport("Malformed response: missing result"));
        }

        match self.error {
            Some(message) if !message.is_empty() => Err(AnalysisError::Application(message)),
            _ => Err(AnalysisError::application(UNKNOWN_ERROR)),
        }
    }
}
