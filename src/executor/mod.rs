//! Generic request executor for declarative tools.
//!
//! One call to [`Executor::execute`] validates the arguments, builds the
//! request from the descriptor, performs exactly one HTTP call and classifies
//! the outcome. Nothing is retried; every failure comes back as a
//! [`ToolError`].

mod request;

pub use request::{build_body, build_url, validate};

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::config::{Config, ConfigError};
use crate::credential::Credential;
use crate::models::{Arguments, Payload, ResponseMode, ToolDescriptor, ToolError};

/// Executes tool descriptors against the configured API.
#[derive(Debug, Clone)]
pub struct Executor {
    base_url: Url,
    timeout: Duration,
    client: Client,
}

impl Executor {
    /// Create an executor. Fails if the configuration is invalid.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url,
            timeout: config.timeout,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Run one tool invocation.
    pub async fn execute(
        &self,
        descriptor: &ToolDescriptor,
        credential: &Credential,
        arguments: &Arguments,
    ) -> Result<Payload, ToolError> {
        validate(descriptor, arguments)?;
        let url = build_url(&self.base_url, descriptor, arguments)?;

        tracing::debug!(
            tool = %descriptor.name,
            method = descriptor.method.as_str(),
            path = url.path(),
            "Sending request"
        );

        let mut request = self
            .client
            .request(descriptor.method.into(), url)
            .header(CONTENT_TYPE, "application/json");
        request = credential.authorize(request, descriptor.auth);
        if let Some(body) = build_body(descriptor, arguments) {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        self.handle_response(&descriptor.response, response).await
    }

    fn transport_error(&self, error: reqwest::Error) -> ToolError {
        if error.is_timeout() {
            ToolError::Timeout(self.timeout)
        } else {
            ToolError::Network(error.to_string())
        }
    }

    /// Classify the response, decoding successful bodies per response mode.
    async fn handle_response(
        &self,
        mode: &ResponseMode,
        response: reqwest::Response,
    ) -> Result<Payload, ToolError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(ToolError::Http {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        Ok(match mode {
            ResponseMode::Json => decode_json(body),
            ResponseMode::Text => Payload::Text(body),
            ResponseMode::Acknowledge(message) => Payload::Json(serde_json::json!({
                "status": status.as_u16(),
                "message": message,
            })),
        })
    }
}

/// Decode a 2xx body as JSON. An empty body is `null`; malformed JSON falls
/// back to the raw text.
fn decode_json(body: String) -> Payload {
    if body.trim().is_empty() {
        return Payload::Json(Value::Null);
    }
    match serde_json::from_str(&body) {
        Ok(value) => Payload::Json(value),
        Err(e) => {
            tracing::debug!("Response body is not JSON ({}), returning text", e);
            Payload::Text(body)
        }
    }
}

/// Extract the server's message from an error body.
///
/// Looks for `error` (a string, or an object with `message`) then `message`;
/// otherwise uses the raw text, or the status reason for an empty body.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let nested = value
            .get("error")
            .and_then(|e| e.as_str().or_else(|| e.get("message").and_then(Value::as_str)))
            .or_else(|| value.get("message").and_then(Value::as_str));
        if let Some(message) = nested {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("Unknown status").to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_nested_fields() {
        let status = StatusCode::NOT_FOUND;
        assert_eq!(error_message(status, r#"{"message":"not found"}"#), "not found");
        assert_eq!(error_message(status, r#"{"error":"nope"}"#), "nope");
        assert_eq!(
            error_message(status, r#"{"error":{"message":"deep"}}"#),
            "deep"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_text() {
        let status = StatusCode::BAD_GATEWAY;
        assert_eq!(error_message(status, "<h1>Bad gateway</h1>"), "<h1>Bad gateway</h1>");
        assert_eq!(error_message(status, r#"{"code":7}"#), r#"{"code":7}"#);
        assert_eq!(error_message(status, ""), "Bad Gateway");
    }

    #[test]
    fn test_decode_json_degrades_to_text() {
        assert_eq!(decode_json(r#"{"id":42}"#.into()), Payload::Json(json!({ "id": 42 })));
        assert_eq!(decode_json("".into()), Payload::Json(Value::Null));
        assert_eq!(decode_json("not json".into()), Payload::Text("not json".into()));
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let config = Config::default().with_base_url("nope");
        assert!(Executor::new(&config).is_err());
    }
}
