//! Contents and visibility of the shared result panel

/// Panel title after a failed run
pub const ERROR_TITLE: &str = "Error";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPanelState {
    pub visible: bool,
    pub title: String,
    pub body: String,
}

impl ResultPanelState {
    pub fn show_result(&mut self, action: &str, result: &str) {
        self.title = action.to_uppercase();
        self.body = result.to_string();
        self.visible = true;
    }

    pub fn show_error(&mut self, message: &str) {
        self.title = ERROR_TITLE.to_string();
        self.body = message.to_string();
        self.visible = true;
    }

    /// Hide the panel and drop its body. The title stays for the next render.
    pub fn clear(&mut self) {
        self.visible = false;
        self.body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_result() {
        let mut panel = ResultPanelState::default();
        panel.show_result("lint", "no issues");
        assert!(panel.visible);
        assert_eq!(panel.title, "LINT");
        assert_eq!(panel.body, "no issues");
    }

    #[test]
    fn test_show_error_replaces_previous_result() {
        let mut panel = ResultPanelState::default();
        panel.show_result("explain", "it prints");
        panel.show_error("syntax error at line 2");
        assert!(panel.visible);
        assert_eq!(panel.title, "Error");
        assert_eq!(panel.body, "syntax error at line 2");
    }

    #[test]
    fn test_clear_from_any_state() {
        let mut panel = ResultPanelState::default();
        panel.clear();
        assert!(!panel.visible);
        assert!(panel.body.is_empty());

        panel.show_result("audit", "3 issues");
        panel.clear();
        assert!(!panel.visible);
        assert!(panel.body.is_empty());
    }
}
