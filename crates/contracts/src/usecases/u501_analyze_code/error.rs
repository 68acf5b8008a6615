/// Сообщение по умолчанию, если сервер не прислал текст ошибки
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Ошибка одного запроса на анализ
///
/// В UI оба вида отображаются одинаково, разделение нужно для логов.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Сервер вернул конверт с `ok: false`
    Application(String),

    /// Конверт не получен: сеть, HTTP-статус или неразборчивое тело ответа
    Transport(String),
}

impl AnalysisError {
    pub fn application(message: impl Into<String>) -> Self {
        Self::Application(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Текст для пользователя
    pub fn message(&self) -> &str {
        match self {
            Self::Application(message) | Self::Transport(message) => message,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Application(_) => "application",
            Self::Transport(_) => "transport",
        }
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let app = AnalysisError::application("syntax error at line 2");
        let transport = AnalysisError::transport("Request failed: offline");
        assert_eq!(app.to_string(), "syntax error at line 2");
        assert_eq!(transport.to_string(), "Request failed: offline");
        assert_eq!(app.kind(), "application");
        assert_eq!(transport.kind(), "transport");
    }
}
