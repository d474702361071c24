/*!
 * Mock provider implementation for tests and offline runs.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds with translated text
 * - `MockProvider::failing()` - Always fails with a non-timeout error
 * - `MockProvider::timing_out()` - Always times out
 * - `MockProvider::timeout_then_succeed(n)` - Times out `n` times, then succeeds
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest, TranslationResponse};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a proper translation
    Working,
    /// Fails intermittently (every Nth request) with an API error
    Intermittent { fail_every: usize },
    /// Always fails with an API error
    Failing,
    /// Always fails with a timeout
    TimingOut,
    /// Times out for the first `timeouts` requests, then succeeds
    TimeoutThenSucceed { timeouts: usize },
}

/// Mock provider for testing translation behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared between clones
    request_count: Arc<AtomicUsize>,
    /// Every request received, in order
    requests: Arc<Mutex<Vec<TranslationRequest>>>,
    /// Fixed translations looked up before the generic response
    dictionary: Arc<HashMap<String, String>>,
    /// Calls to `test_connection`, shared between clones
    connection_checks: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            dictionary: Arc::new(HashMap::new()),
            connection_checks: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create an intermittently failing mock provider
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every: fail_every.max(1) })
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock whose every request times out
    pub fn timing_out() -> Self {
        Self::new(MockBehavior::TimingOut)
    }

    /// Create a mock that times out `timeouts` times before answering
    pub fn timeout_then_succeed(timeouts: usize) -> Self {
        Self::new(MockBehavior::TimeoutThenSucceed { timeouts })
    }

    /// Answer the given source texts with fixed translations
    pub fn with_translations(mut self, pairs: &[(&str, &str)]) -> Self {
        self.dictionary = Arc::new(
            pairs
                .iter()
                .map(|(source, target)| (source.to_string(), target.to_string()))
                .collect(),
        );
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Number of connection checks received so far
    pub fn connection_check_count(&self) -> usize {
        self.connection_checks.load(Ordering::SeqCst)
    }

    /// Copy of every request received so far
    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().clone()
    }

    fn translate_text(&self, request: &TranslationRequest) -> String {
        self.dictionary
            .get(&request.text)
            .cloned()
            .unwrap_or_else(|| format!("[{}] {}", request.target_language, request.text))
    }

    fn success(&self, request: &TranslationRequest) -> Result<TranslationResponse, ProviderError> {
        Ok(TranslationResponse {
            text: self.translate_text(request),
            detected_language: Some(request.source_language.clone()),
        })
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: TranslationRequest) -> Result<TranslationResponse, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());

        match self.behavior {
            MockBehavior::Working => self.success(&request),

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        status_code: 500,
                        message: format!("Simulated intermittent failure on request {}", count + 1),
                    })
                } else {
                    self.success(&request)
                }
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 503,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::TimingOut => Err(ProviderError::Timeout(
                "Simulated read timeout".to_string(),
            )),

            MockBehavior::TimeoutThenSucceed { timeouts } => {
                if count < timeouts {
                    Err(ProviderError::Timeout(format!(
                        "Simulated read timeout {}/{}",
                        count + 1,
                        timeouts
                    )))
                } else {
                    self.success(&request)
                }
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.connection_checks.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
