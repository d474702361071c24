/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for the remote translation
 * collaborator:
 * - Google: Google Translate web endpoint
 * - Mock: scripted in-process provider for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single text to translate between two languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// The text to translate
    pub text: String,
    /// Source language code (e.g. `zh-CN`)
    pub source_language: String,
    /// Target language code (e.g. `en`)
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Translated text returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResponse {
    /// The translated text
    pub text: String,
    /// Source language reported by the service, when it detects one
    pub detected_language: Option<String>,
}

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably in the translation service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a request using this provider. Makes exactly one remote call;
    /// retrying is the caller's business.
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<TranslationResponse, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: TranslationRequest) -> Result<TranslationResponse, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Box<P> {
    async fn complete(&self, request: TranslationRequest) -> Result<TranslationResponse, ProviderError> {
        (**self).complete(request).await
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        (**self).test_connection().await
    }
}

pub mod google;
pub mod mock;
