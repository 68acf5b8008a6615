/// Кнопка панели действий и идентификатор, который она отправляет
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// Значение поля `action` в [`super::AnalyzeRequest`]
    pub id: &'static str,

    /// Подпись кнопки
    pub label: &'static str,
}

impl ActionDescriptor {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Действия, которые понимает сервис анализа
pub const ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor::new("explain", "Explain"),
    ActionDescriptor::new("tests", "Generate Tests"),
    ActionDescriptor::new("docs", "Add Docstrings"),
    ActionDescriptor::new("audit", "Audit"),
    ActionDescriptor::new("readme", "Draft README"),
];
