use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest, TranslationResponse};

/// Client for the public Google Translate web endpoint (`translate_a/single`)
#[derive(Debug)]
pub struct GoogleTranslate {
    /// Endpoint URL
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
}

impl GoogleTranslate {
    /// Create a client with the given endpoint and per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Pull the translated text out of the endpoint's nested-array response.
    ///
    /// The body looks like `[[["Order number","订单号",null,null,10], ...], null, "zh-CN", ...]`;
    /// the translation is the concatenation of the first element of every segment.
    pub fn parse_response(body: &str) -> Result<TranslationResponse, ProviderError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(format!("{}: {}", e, truncate(body, 200))))?;

        let segments = value
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError(format!("missing translation segments: {}", truncate(body, 200))))?;

        let text: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if text.is_empty() {
            return Err(ProviderError::ParseError("empty translation".to_string()));
        }

        let detected_language = value.get(2).and_then(Value::as_str).map(str::to_string);

        Ok(TranslationResponse { text, detected_language })
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    async fn complete(&self, request: TranslationRequest) -> Result<TranslationResponse, ProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", request.source_language.as_str()),
                ("tl", request.target_language.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .send()
            .await
            .map_err(ProviderError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ProviderError::from)?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimitExceeded(truncate(&body, 200)));
        }
        if !status.is_success() {
            error!("Google Translate error ({}): {}", status, truncate(&body, 200));
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: truncate(&body, 200),
            });
        }

        let translated = Self::parse_response(&body)?;
        debug!("Translated '{}' -> '{}'", request.text, translated.text);
        Ok(translated)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.complete(TranslationRequest::new("你好", "zh-CN", "en"))
            .await
            .map(|_| ())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    }
}
