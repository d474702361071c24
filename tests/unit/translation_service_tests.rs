/*!
 * Tests for the per-value translation service and its retry policy
 */

use std::time::Duration;

use order_translator::providers::mock::MockProvider;
use order_translator::translation::{RetryPolicy, TranslationCache, TranslationResult, TranslationService};

fn instant_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        delay: Duration::ZERO,
    }
}

fn service(provider: MockProvider) -> TranslationService<MockProvider> {
    TranslationService::new(provider, "zh-CN", "en", instant_retry())
}

#[tokio::test]
async fn test_translate_withoutCjk_shouldReturnInputWithoutRemoteCall() {
    let service = service(MockProvider::working());

    for text in ["001", "SKU-42 / red", "", "2024-01-05", "ｱｲｳ", "Café"] {
        assert_eq!(service.translate(text).await, TranslationResult::Unchanged(text.to_string()));
    }

    assert_eq!(service.provider().request_count(), 0);
}

#[tokio::test]
async fn test_translate_withCjk_shouldRequestZhCnToEn() {
    let service = service(MockProvider::working().with_translations(&[("订单号", "Order Number")]));

    let result = service.translate("订单号").await;

    assert_eq!(result, TranslationResult::Translated("Order Number".to_string()));
    let requests = service.provider().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].source_language, "zh-CN");
    assert_eq!(requests[0].target_language, "en");
}

#[tokio::test]
async fn test_translate_withMixedText_shouldSendWholeValue() {
    let service = service(MockProvider::working());

    let result = service.translate("SKU-42 红色").await;

    assert_eq!(result.text(), Some("[en] SKU-42 红色"));
    assert_eq!(service.provider().requests()[0].text, "SKU-42 红色");
}

#[tokio::test]
async fn test_translate_withNonTimeoutError_shouldCallOnceAndGiveUp() {
    let service = service(MockProvider::failing());

    let result = service.translate("数量").await;

    assert_eq!(result, TranslationResult::Unavailable);
    assert_eq!(service.provider().request_count(), 1);
}

#[tokio::test]
async fn test_translate_withPersistentTimeouts_shouldStopAfterThreeAttempts() {
    let service = service(MockProvider::timing_out());

    let result = service.translate("数量").await;

    assert_eq!(result, TranslationResult::Unavailable);
    assert_eq!(service.provider().request_count(), 3);
}

#[tokio::test]
async fn test_translate_withTwoTimeouts_shouldSucceedOnThirdAttempt() {
    let service = service(MockProvider::timeout_then_succeed(2).with_translations(&[("数量", "Quantity")]));

    assert_eq!(service.translate("数量").await, TranslationResult::Translated("Quantity".to_string()));
    assert_eq!(service.provider().request_count(), 3);
}

#[tokio::test]
async fn test_translate_withThreeTimeouts_shouldBeUnavailable() {
    let service = service(MockProvider::timeout_then_succeed(3));

    assert!(service.translate("数量").await.is_unavailable());
    assert_eq!(service.provider().request_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_translate_withTimeouts_shouldWaitFiveSecondsBetweenAttempts() {
    let service = TranslationService::new(MockProvider::timing_out(), "zh-CN", "en", RetryPolicy::default());
    let start = tokio::time::Instant::now();

    let result = service.translate("数量").await;

    assert!(result.is_unavailable());
    // Three attempts, two waits
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(10), "waited {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(15), "waited {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_translate_withNonTimeoutError_shouldNotWait() {
    let service = TranslationService::new(MockProvider::failing(), "zh-CN", "en", RetryPolicy::default());
    let start = tokio::time::Instant::now();

    service.translate("数量").await;

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn test_translate_withSingleAttemptPolicy_shouldNotRetry() {
    let service = TranslationService::new(
        MockProvider::timing_out(),
        "zh-CN",
        "en",
        RetryPolicy { max_attempts: 1, delay: Duration::ZERO },
    );

    assert!(service.translate("数量").await.is_unavailable());
    assert_eq!(service.provider().request_count(), 1);
}

#[tokio::test]
async fn test_translate_withCacheEnabled_shouldReuseSuccessfulTranslation() {
    let service = service(MockProvider::working()).with_cache(TranslationCache::new(true));

    let first = service.translate("已发货").await;
    let second = service.translate("已发货").await;

    assert_eq!(first, second);
    assert_eq!(service.provider().request_count(), 1);
}

#[tokio::test]
async fn test_translate_withCacheDisabled_shouldCallEveryTime() {
    let service = service(MockProvider::working());

    service.translate("已发货").await;
    service.translate("已发货").await;

    assert_eq!(service.provider().request_count(), 2);
}

#[test]
fn test_translation_result_into_cell_shouldMapUnavailableToMissing() {
    use order_translator::CellValue;

    assert_eq!(TranslationResult::Unavailable.into_cell(), CellValue::Missing);
    assert_eq!(TranslationResult::Unchanged("a".into()).into_cell(), CellValue::from("a"));
    assert_eq!(TranslationResult::Translated("b".into()).into_cell(), CellValue::from("b"));
}
