//! Client configuration
//!
//! The page works without any setup: requests go to the same origin at
//! `/analyze` and every catalog action gets a button. A deployment behind a
//! different path can override the endpoint with
//! `<meta name="analyzer-endpoint" content="/api/analyze">`.

use contracts::usecases::u501_analyze_code::{ActionDescriptor, ACTIONS};

/// Endpoint used when the document does not override it
pub const DEFAULT_ENDPOINT: &str = "/analyze";

/// Name of the `<meta>` tag that overrides the endpoint
pub const ENDPOINT_META: &str = "analyzer-endpoint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// URL that receives `POST` requests with an `AnalyzeRequest` body
    pub endpoint: String,
    /// Action buttons, in display order
    pub actions: &'static [ActionDescriptor],
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            actions: ACTIONS,
        }
    }
}

impl AnalyzerConfig {
    /// Build the config from the host page, falling back to defaults
    pub fn from_document() -> Self {
        Self::default().with_endpoint_override(read_meta(ENDPOINT_META))
    }

    /// Replace the endpoint when `endpoint` is present and not blank
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                self.endpoint = endpoint.to_string();
            }
        }
        self
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.endpoint, "/analyze");
        assert_eq!(config.actions.len(), ACTIONS.len());
    }

    #[test]
    fn test_endpoint_override() {
        let config =
            AnalyzerConfig::default().with_endpoint_override(Some(" /api/analyze ".into()));
        assert_eq!(config.endpoint, "/api/analyze");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = AnalyzerConfig::default().with_endpoint_override(Some("   ".into()));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        let config = AnalyzerConfig::default().with_endpoint_override(None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
