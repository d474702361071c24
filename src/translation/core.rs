/*!
 * Core translation service implementation.
 *
 * `TranslationService` decides whether a value needs translating, calls the
 * provider, retries timed-out calls a bounded number of times with a fixed delay,
 * and reports the outcome as a [`TranslationResult`]. Failures are logged and
 * degrade to `Unavailable`; they are never returned as errors.
 */

use log::{error, warn};
use std::time::Duration;

use super::cache::TranslationCache;
use super::detect::contains_cjk;
use crate::app_config::{Config, RetryConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::{ProviderError, TranslationError};
use crate::providers::google::GoogleTranslate;
use crate::providers::mock::MockProvider;
use crate::providers::{Provider, TranslationRequest};
use crate::table::CellValue;

/// Outcome of translating one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    /// No CJK characters; the original text
    Unchanged(String),
    /// Text returned by the provider
    Translated(String),
    /// The provider could not translate the value
    Unavailable,
}

impl TranslationResult {
    /// Resulting text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Unchanged(text) | Self::Translated(text) => Some(text),
            Self::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// Cell to store in the translated table; `Unavailable` becomes missing
    pub fn into_cell(self) -> CellValue {
        match self {
            Self::Unchanged(text) | Self::Translated(text) => CellValue::Text(text),
            Self::Unavailable => CellValue::Missing,
        }
    }
}

/// Bounded retry for timed-out calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included
    pub max_attempts: u32,
    /// Fixed wait between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            delay: config.delay(),
        }
    }
}

/// Main translation service
#[derive(Debug)]
pub struct TranslationService<P: Provider> {
    /// Remote translation backend
    provider: P,

    /// Language sent as the source of every request
    source_language: String,

    /// Language sent as the target of every request
    target_language: String,

    /// Retry policy for timeouts
    pub retry: RetryPolicy,

    /// Translation cache for storing and retrieving translations
    pub cache: TranslationCache,
}

impl<P: Provider> TranslationService<P> {
    /// Create a service without a cache
    pub fn new(
        provider: P,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            provider,
            source_language: source_language.into(),
            target_language: target_language.into(),
            retry,
            cache: TranslationCache::disabled(),
        }
    }

    /// Replace the cache
    pub fn with_cache(mut self, cache: TranslationCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Translate one value.
    ///
    /// Text without CJK ideographs comes back `Unchanged` without touching the
    /// provider. Everything else is sent to the provider; timeouts are retried up
    /// to `retry.max_attempts` attempts in total, any other error gives up at once.
    pub async fn translate(&self, text: &str) -> TranslationResult {
        if !contains_cjk(text) {
            return TranslationResult::Unchanged(text.to_string());
        }

        if let Some(hit) = self.cache.get(text, &self.source_language, &self.target_language) {
            return TranslationResult::Translated(hit);
        }

        match self.request_with_retry(text).await {
            Ok(translated) => {
                self.cache.store(text, &self.source_language, &self.target_language, &translated);
                TranslationResult::Translated(translated)
            }
            Err(e) => {
                error!("Error translating text: {}\n{}", text, e);
                TranslationResult::Unavailable
            }
        }
    }

    async fn request_with_retry(&self, text: &str) -> Result<String, TranslationError> {
        let request = TranslationRequest::new(text, &self.source_language, &self.target_language);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.provider.complete(request.clone()).await {
                Ok(response) => return Ok(response.text),
                Err(e) if e.is_timeout() => {
                    if attempt >= self.retry.max_attempts {
                        return Err(TranslationError::RetriesExhausted {
                            attempts: attempt,
                            last_error: e,
                        });
                    }
                    warn!(
                        "Timed out translating text: {} ({}) - attempt {}/{}, retrying in {} seconds...",
                        text,
                        e,
                        attempt,
                        self.retry.max_attempts,
                        self.retry.delay.as_secs_f64()
                    );
                    tokio::time::sleep(self.retry.delay).await;
                }
                Err(e) => return Err(TranslationError::Provider(e)),
            }
        }
    }

    /// Check that the provider answers at all
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.provider.test_connection().await
    }
}

impl TranslationService<Box<dyn Provider>> {
    /// Build the service and provider described by the configuration
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let translation = &config.translation;
        let provider: Box<dyn Provider> = match translation.provider {
            ConfigTranslationProvider::Google => {
                Box::new(GoogleTranslate::new(translation.endpoint.clone(), translation.timeout())?)
            }
            ConfigTranslationProvider::Mock => Box::new(MockProvider::working()),
        };

        Ok(TranslationService::new(
            provider,
            config.source_language.clone(),
            config.target_language.clone(),
            RetryPolicy::from(&translation.retry),
        )
        .with_cache(TranslationCache::new(translation.cache_enabled)))
    }
}
