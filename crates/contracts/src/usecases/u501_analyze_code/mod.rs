pub mod actions;
pub mod error;
pub mod request;
pub mod response;

pub use actions::{ActionDescriptor, ACTIONS};
pub use error::AnalysisError;
pub use request::AnalyzeRequest;
pub use response::AnalyzeEnvelope;

use crate::usecases::common::UseCaseMetadata;

pub struct AnalyzeCode;

impl UseCaseMetadata for AnalyzeCode {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "analyze_code"
    }

    fn display_name() -> &'static str {
        "CodeScribe"
    }

    fn description() -> &'static str {
        "Explain • Tests • Docstrings • Audit • README: paste code and click"
    }
}
