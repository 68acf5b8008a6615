use async_trait::async_trait;
use contracts::usecases::u501_analyze_code::{AnalysisError, AnalyzeEnvelope, AnalyzeRequest};
use gloo_net::http::Request;

/// One round-trip to the analysis service
#[async_trait(?Send)]
pub trait AnalysisTransport {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<String, AnalysisError>;
}

/// `POST {endpoint}` with a JSON body, via the browser fetch API
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl AnalysisTransport for HttpTransport {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<String, AnalysisError> {
        // `.json()` also sets Content-Type: application/json
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| AnalysisError::transport(format!("Failed to encode request: {}", e)))?
            .send()
            .await
            .map_err(network_failure)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::transport(format!("Failed to read response: {}", e)))?;

        decode_response(status, &body)
    }
}

/// Rejected fetch as the user sees it.
///
/// `JsError`'s `Display` prepends the JS error name ("TypeError: ..."); the
/// panel shows only the message, the way the browser reports it.
pub fn network_failure(err: gloo_net::Error) -> AnalysisError {
    match err {
        gloo_net::Error::JsError(js) => AnalysisError::Transport(js.message),
        other => AnalysisError::transport(other.to_string()),
    }
}

/// Turn an HTTP status and body into the analysis outcome.
///
/// The envelope wins over the status: the service answers bad input with
/// `400 {"ok": false, "error": ...}` and that message is what the user needs.
pub fn decode_response(status: u16, body: &str) -> Result<String, AnalysisError> {
    match serde_json::from_str::<AnalyzeEnvelope>(body) {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !(200..300).contains(&status) => {
            Err(AnalysisError::transport(format!("HTTP error: {}", status)))
        }
        Err(e) => Err(AnalysisError::transport(format!(
            "Failed to parse response: {}",
            e
        ))),
    }
}
