//! Action pipeline: busy → request → render → idle
//!
//! Every click runs its own `run_action` task. Tasks share the result panel
//! without coordination, so the response that resolves last is the one shown.

use super::api::AnalysisTransport;
use super::button_state::ButtonState;
use super::result_panel::ResultPanelState;
use contracts::usecases::u501_analyze_code::AnalyzeRequest;
use leptos::prelude::*;

/// State of the button that triggered an action
pub trait ControlState {
    fn enter_busy(&self);
    fn leave_busy(&self);
}

/// The shared result panel
pub trait PanelState {
    fn show_result(&self, action: &str, result: &str);
    fn show_error(&self, message: &str);
    fn clear(&self);
}

impl ControlState for RwSignal<ButtonState> {
    fn enter_busy(&self) {
        self.update(|state| state.enter_busy());
    }

    fn leave_busy(&self) {
        self.update(|state| state.leave_busy());
    }
}

impl PanelState for RwSignal<ResultPanelState> {
    fn show_result(&self, action: &str, result: &str) {
        self.update(|panel| panel.show_result(action, result));
    }

    fn show_error(&self, message: &str) {
        self.update(|panel| panel.show_error(message));
    }

    fn clear(&self) {
        self.update(|panel| panel.clear());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The result was written to the panel
    Rendered,
    /// An error message was written to the panel
    Failed,
}

pub async fn run_action<T, C, P>(
    transport: &T,
    request: AnalyzeRequest,
    control: &C,
    panel: &P,
) -> DispatchOutcome
where
    T: AnalysisTransport + ?Sized,
    C: ControlState + ?Sized,
    P: PanelState + ?Sized,
{
    log::debug!(
        "analyze: action={} code_len={}",
        request.action,
        request.code.len()
    );
    control.enter_busy();

    let outcome = match transport.analyze(&request).await {
        Ok(result) => {
            log::info!("analyze: action={} succeeded", request.action);
            panel.show_result(&request.action, &result);
            DispatchOutcome::Rendered
        }
        Err(err) => {
            log::warn!(
                "analyze: action={} failed ({}): {}",
                request.action,
                err.kind(),
                err
            );
            panel.show_error(err.message());
            DispatchOutcome::Failed
        }
    };

    control.leave_busy();
    outcome
}
