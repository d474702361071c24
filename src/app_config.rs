use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::errors::AppError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO, optionally region-qualified)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Artifact locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Intermediate delimited format
    #[serde(default)]
    pub intermediate: IntermediateConfig,

    /// Final workbook settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Locations of the input, the two intermediate artifacts and the output
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PathsConfig {
    /// Source workbook
    #[serde(default = "default_input_path")]
    pub input: PathBuf,

    /// Delimited copy of the source, missing cells as the token
    #[serde(default = "default_intermediate_path")]
    pub intermediate: PathBuf,

    /// Delimited translated table, missing cells empty
    #[serde(default = "default_translated_path")]
    pub translated: PathBuf,

    /// Final workbook
    #[serde(default = "default_output_path")]
    pub output: PathBuf,

    /// Leave the intermediate artifacts on disk after the run
    #[serde(default)]
    pub keep_intermediate: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input_path(),
            intermediate: default_intermediate_path(),
            translated: default_translated_path(),
            output: default_output_path(),
            keep_intermediate: false,
        }
    }
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: Google Translate web endpoint
    #[default]
    Google,
    // @provider: Offline mock, tags text with the target language
    Mock,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Google => "Google Translate",
            Self::Mock => "Mock",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Google => "google".to_string(),
            Self::Mock => "mock".to_string(),
        }
    }
}

impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TranslationProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "mock" => Ok(Self::Mock),
            _ => Err(AppError::Config(format!("Invalid provider type: {}", s))),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Service endpoint URL
    #[serde(default = "default_google_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Remember successful translations for the rest of the run
    #[serde(default)]
    pub cache_enabled: bool,

    /// Send one test request before translating and warn if it fails
    #[serde(default)]
    pub check_connection: bool,

    /// Retry policy for timed-out requests
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: default_google_endpoint(),
            timeout_secs: default_timeout_secs(),
            cache_enabled: false,
            check_connection: false,
            retry: RetryConfig::default(),
        }
    }
}

impl TranslationConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Bounded retry for timed-out remote calls
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts, the first one included
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed wait between attempts, in seconds
    #[serde(default = "default_retry_delay_secs")]
    pub delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_secs: default_retry_delay_secs(),
        }
    }
}

impl RetryConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

/// Delimited intermediate format settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IntermediateConfig {
    /// Single-byte field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Token written for missing cells in the first intermediate file
    #[serde(default = "default_missing_token")]
    pub missing_token: String,

    /// Field values read back as missing, in addition to the empty field
    #[serde(default = "default_na_values")]
    pub na_values: Vec<String>,
}

impl Default for IntermediateConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            missing_token: default_missing_token(),
            na_values: default_na_values(),
        }
    }
}

impl IntermediateConfig {
    /// Delimiter as the byte the csv codec expects; validated to be ASCII
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b'|'
        }
    }
}

/// Final workbook settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Name of the single worksheet
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Characters added to the widest value of each column
    #[serde(default = "default_column_padding")]
    pub column_padding: usize,

    /// Write the header row in bold
    #[serde(default = "default_true")]
    pub bold_header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sheet_name: default_sheet_name(),
            column_padding: default_column_padding(),
            bold_header: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "zh-CN".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_input_path() -> PathBuf {
    PathBuf::from("Order_Export.xls")
}

fn default_intermediate_path() -> PathBuf {
    PathBuf::from("CSV_Order_Export.csv")
}

fn default_translated_path() -> PathBuf {
    PathBuf::from("Eng_Order_Export.csv")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("English_Order_Export.xlsx")
}

fn default_google_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_secs() -> u64 {
    5
}

fn default_delimiter() -> char {
    '|'
}

fn default_missing_token() -> String {
    "NaN".to_string()
}

fn default_na_values() -> Vec<String> {
    vec![default_missing_token()]
}

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

fn default_column_padding() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        crate::language_utils::get_language_name(&self.source_language)
            .map_err(|e| AppError::Config(format!("source_language: {}", e)))?;
        crate::language_utils::get_language_name(&self.target_language)
            .map_err(|e| AppError::Config(format!("target_language: {}", e)))?;

        let paths = [
            ("input", &self.paths.input),
            ("intermediate", &self.paths.intermediate),
            ("translated", &self.paths.translated),
            ("output", &self.paths.output),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(AppError::Config(format!("paths.{} must not be empty", name)));
            }
        }
        if self.paths.intermediate == self.paths.translated {
            return Err(AppError::Config(
                "paths.intermediate and paths.translated must differ".to_string(),
            ));
        }

        if self.translation.retry.max_attempts == 0 {
            return Err(AppError::Config("translation.retry.max_attempts must be at least 1".to_string()));
        }

        if self.translation.provider == TranslationProvider::Google {
            Url::parse(&self.translation.endpoint)
                .map_err(|e| AppError::Config(format!("Invalid translation endpoint '{}': {}", self.translation.endpoint, e)))?;
        }

        let delimiter = self.intermediate.delimiter;
        if !delimiter.is_ascii() || delimiter == '"' || delimiter == '\n' || delimiter == '\r' {
            return Err(AppError::Config(format!("Unsupported delimiter: {:?}", delimiter)));
        }

        if self.output.sheet_name.is_empty() || self.output.sheet_name.chars().count() > 31 {
            return Err(AppError::Config(format!(
                "Worksheet name must be 1-31 characters: '{}'",
                self.output.sheet_name
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            paths: PathsConfig::default(),
            translation: TranslationConfig::default(),
            intermediate: IntermediateConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
