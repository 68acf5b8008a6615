//! Code Analyzer UseCase (MVVM Standard)
//!
//! Structure:
//! - api.rs: transport to the `/analyze` endpoint
//! - button_state.rs / result_panel.rs: plain UI state
//! - dispatch.rs: the per-click pipeline over that state
//! - view_model.rs: AnalyzerVm with RwSignals
//! - view.rs: Main component CodeAnalyzer

pub mod api;
pub mod button_state;
pub mod dispatch;
pub mod result_panel;
mod view;
mod view_model;

pub use view::CodeAnalyzer;
pub use view_model::AnalyzerVm;
