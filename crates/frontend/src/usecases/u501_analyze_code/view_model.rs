//! Code Analyzer - View Model

use super::result_panel::ResultPanelState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AnalyzerVm {
    /// Contents of the code textarea
    pub code: RwSignal<String>,
    /// Shared by all action buttons, last writer wins
    pub panel: RwSignal<ResultPanelState>,
}

impl AnalyzerVm {
    pub fn new() -> Self {
        Self {
            code: RwSignal::new(String::new()),
            panel: RwSignal::new(ResultPanelState::default()),
        }
    }
}

impl Default for AnalyzerVm {
    fn default() -> Self {
        Self::new()
    }
}
