/*!
 * Provider behaviour tests.
 *
 * These run offline: the mock provider stands in for the service, and the
 * Google client is pointed at a local port nothing listens on.
 */

use std::time::Duration;

use order_translator::providers::google::GoogleTranslate;
use order_translator::providers::mock::MockProvider;
use order_translator::providers::{Provider, TranslationRequest};
use order_translator::translation::{RetryPolicy, TranslationService};
use order_translator::ProviderError;

fn request(text: &str) -> TranslationRequest {
    TranslationRequest::new(text, "zh-CN", "en")
}

#[tokio::test]
async fn test_mock_provider_withWorkingBehavior_shouldTagText() {
    let provider = MockProvider::working();

    let response = provider.complete(request("订单号")).await.unwrap();

    assert_eq!(response.text, "[en] 订单号");
    assert_eq!(response.detected_language.as_deref(), Some("zh-CN"));
    assert!(provider.test_connection().await.is_ok());
}

#[tokio::test]
async fn test_mock_provider_withIntermittentBehavior_shouldFailEveryNth() {
    let provider = MockProvider::intermittent(3);

    let mut outcomes = Vec::new();
    for _ in 0..6 {
        outcomes.push(provider.complete(request("数量")).await.is_ok());
    }

    assert_eq!(outcomes, vec![true, true, false, true, true, false]);
    assert_eq!(provider.request_count(), 6);
}

#[tokio::test]
async fn test_mock_provider_withFailingBehavior_shouldReturnApiError() {
    let provider = MockProvider::failing();

    let error = provider.complete(request("数量")).await.unwrap_err();

    assert!(matches!(error, ProviderError::ApiError { status_code: 503, .. }));
    assert!(provider.test_connection().await.is_err());
}

#[tokio::test]
async fn test_mock_provider_clones_shouldShareCounters() {
    let provider = MockProvider::timing_out();
    let clone = provider.clone();

    let error = clone.complete(request("数量")).await.unwrap_err();

    assert!(error.is_timeout());
    assert_eq!(provider.request_count(), 1);
    assert_eq!(provider.requests()[0].text, "数量");
}

#[tokio::test]
async fn test_boxed_provider_shouldDelegate() {
    let provider: Box<dyn Provider> = Box::new(MockProvider::working().with_translations(&[("数量", "Quantity")]));

    let response = provider.complete(request("数量")).await.unwrap();

    assert_eq!(response.text, "Quantity");
}

/// A refused connection is not a timeout, so the service gives up after one call
#[tokio::test]
async fn test_google_provider_withUnreachableEndpoint_shouldFailWithoutRetry() {
    let provider = GoogleTranslate::new("http://127.0.0.1:9/translate_a/single", Duration::from_secs(2)).unwrap();

    let error = provider.complete(request("订单号")).await.unwrap_err();
    assert!(!error.is_timeout(), "unexpected timeout: {}", error);

    let service = TranslationService::new(
        provider,
        "zh-CN",
        "en",
        RetryPolicy {
            max_attempts: 3,
            delay: Duration::from_secs(30),
        },
    );
    let started = std::time::Instant::now();
    assert!(service.translate("订单号").await.is_unavailable());
    assert!(started.elapsed() < Duration::from_secs(30));
}

/// The configured request timeout is enforced and surfaces as the retryable kind
#[tokio::test]
async fn test_google_provider_withSilentEndpoint_shouldTimeOut() {
    // Accepts connections through the backlog but never answers
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/translate_a/single", listener.local_addr().unwrap());
    let provider = GoogleTranslate::new(endpoint, Duration::from_millis(300)).unwrap();

    let error = provider.complete(request("订单号")).await.unwrap_err();

    assert!(error.is_timeout(), "expected a timeout, got: {}", error);
    drop(listener);
}

#[test]
fn test_google_provider_new_shouldKeepEndpoint() {
    let provider = GoogleTranslate::new("https://translate.googleapis.com/translate_a/single", Duration::from_secs(10)).unwrap();

    assert_eq!(provider.endpoint(), "https://translate.googleapis.com/translate_a/single");
}

#[test]
fn test_google_parse_response_withSingleSegment() {
    let body = r#"[[["Quantity","数量",null,null,10]],null,"zh-CN",null,null,null,1.0]"#;

    let response = GoogleTranslate::parse_response(body).unwrap();

    assert_eq!(response.text, "Quantity");
}

#[test]
fn test_google_parse_response_withEmptySegments_shouldFail() {
    assert!(matches!(
        GoogleTranslate::parse_response("[[],null,\"zh-CN\"]"),
        Err(ProviderError::ParseError(_))
    ));
}
