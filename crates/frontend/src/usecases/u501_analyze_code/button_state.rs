//! Busy/idle state of a single action button

/// Caption shown while the request is in flight
pub const BUSY_INDICATOR: &str = "…";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    label: String,
    busy: bool,
    /// Caption saved on the first transition to busy
    idle_label: Option<String>,
}

impl ButtonState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy: false,
            idle_label: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Disable the button and swap its caption for the busy indicator.
    ///
    /// Calling this twice keeps the caption from before the first call.
    pub fn enter_busy(&mut self) {
        if self.idle_label.is_none() {
            self.idle_label = Some(std::mem::take(&mut self.label));
        }
        self.label = BUSY_INDICATOR.to_string();
        self.busy = true;
    }

    /// Re-enable the button and put the saved caption back
    pub fn leave_busy(&mut self) {
        if let Some(label) = self.idle_label.take() {
            self.label = label;
        }
        self.busy = false;
    }
}
