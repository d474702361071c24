/*!
 * Tests for application configuration functionality
 */

use std::path::PathBuf;
use std::str::FromStr;

use order_translator::app_config::{Config, LogLevel, TranslationProvider};
use order_translator::AppError;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "zh-CN");
    assert_eq!(config.target_language, "en");
    assert_eq!(config.paths.input, PathBuf::from("Order_Export.xls"));
    assert_eq!(config.paths.intermediate, PathBuf::from("CSV_Order_Export.csv"));
    assert_eq!(config.paths.translated, PathBuf::from("Eng_Order_Export.csv"));
    assert_eq!(config.paths.output, PathBuf::from("English_Order_Export.xlsx"));
    assert!(!config.paths.keep_intermediate);

    assert_eq!(config.translation.provider, TranslationProvider::Google);
    assert_eq!(config.translation.retry.max_attempts, 3);
    assert_eq!(config.translation.retry.delay_secs, 5);
    assert!(!config.translation.cache_enabled);
    assert!(!config.translation.check_connection);

    assert_eq!(config.intermediate.delimiter, '|');
    assert_eq!(config.intermediate.missing_token, "NaN");
    assert_eq!(config.output.sheet_name, "Sheet1");
    assert_eq!(config.output.column_padding, 2);

    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.source_language = "qqqq".to_string();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
    config.source_language = "zh-CN".to_string();

    config.target_language = "".to_string();
    assert!(config.validate().is_err());
    config.target_language = "en".to_string();

    config.translation.retry.max_attempts = 0;
    assert!(config.validate().is_err());
    config.translation.retry.max_attempts = 3;

    config.translation.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    // The mock provider never touches the endpoint
    config.translation.provider = TranslationProvider::Mock;
    assert!(config.validate().is_ok());

    config.intermediate.delimiter = '¦';
    assert!(config.validate().is_err());
    config.intermediate.delimiter = '|';

    config.paths.translated = config.paths.intermediate.clone();
    assert!(config.validate().is_err());
    config.paths.translated = PathBuf::from("Eng_Order_Export.csv");

    config.output.sheet_name = "a sheet name that is far too long for excel".to_string();
    assert!(config.validate().is_err());
}

/// Partial configuration files fall back to defaults field by field
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{
        "paths": { "input": "orders/march.xls" },
        "translation": { "cache_enabled": true, "retry": { "delay_secs": 1 } },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json).expect("partial config should parse");

    assert_eq!(config.paths.input, PathBuf::from("orders/march.xls"));
    assert_eq!(config.paths.output, PathBuf::from("English_Order_Export.xlsx"));
    assert!(config.translation.cache_enabled);
    assert_eq!(config.translation.retry.delay_secs, 1);
    assert_eq!(config.translation.retry.max_attempts, 3);
    assert_eq!(config.source_language, "zh-CN");
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_config_serialize_thenDeserialize_shouldKeepValues() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Mock;
    config.paths.keep_intermediate = true;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.translation.provider, TranslationProvider::Mock);
    assert!(parsed.paths.keep_intermediate);
    assert_eq!(parsed.paths, config.paths);
}

#[test]
fn test_provider_from_str_withKnownAndUnknownNames() {
    assert_eq!(TranslationProvider::from_str("Google").unwrap(), TranslationProvider::Google);
    assert_eq!(TranslationProvider::from_str("mock").unwrap(), TranslationProvider::Mock);
    assert!(TranslationProvider::from_str("babelfish").is_err());
    assert_eq!(TranslationProvider::Google.to_string(), "google");
}

#[test]
fn test_log_level_into_level_filter() {
    assert_eq!(log::LevelFilter::from(&LogLevel::Warn), log::LevelFilter::Warn);
    assert_eq!(log::LevelFilter::from(&LogLevel::Trace), log::LevelFilter::Trace);
}
