use serde::{Deserialize, Serialize};

/// Тело запроса `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Идентификатор действия из каталога [`super::ACTIONS`]
    pub action: String,

    /// Исходный код как есть (может быть пустым)
    pub code: String,
}

impl AnalyzeRequest {
    pub fn new(action: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            code: code.into(),
        }
    }
}
