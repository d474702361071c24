use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for language code handling
///
/// Codes are ISO 639-1 (2-letter) or ISO 639-2/T (3-letter), optionally followed
/// by a region or script subtag as translation services expect (`zh-CN`, `pt_BR`).
/// Language code type
#[derive(Debug, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
}

/// Split a code into its primary language subtag and optional region subtag
pub fn split_language_tag(code: &str) -> (String, Option<String>) {
    let trimmed = code.trim();
    match trimmed.split_once(['-', '_']) {
        Some((primary, region)) => (primary.to_lowercase(), Some(region.to_uppercase())),
        None => (trimmed.to_lowercase(), None),
    }
}

/// Validate the primary subtag of a language code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let (primary, region) = split_language_tag(code);

    if let Some(region) = &region {
        if region.is_empty() || !region.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!("Invalid region in language code: {}", code));
        }
    }

    match primary.len() {
        2 if Language::from_639_1(&primary).is_some() => Ok(LanguageCodeType::Part1),
        3 if Language::from_639_3(&primary).is_some() => Ok(LanguageCodeType::Part2T),
        _ => Err(anyhow!("Invalid language code: {}", code)),
    }
}

/// Normalize the primary subtag to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let (primary, _) = split_language_tag(code);

    match validate_language_code(code)? {
        LanguageCodeType::Part1 => Language::from_639_1(&primary)
            .map(|lang| lang.to_639_3().to_string())
            .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code)),
        LanguageCodeType::Part2T => Ok(primary),
    }
}

/// Check if two language codes name the same language, ignoring region
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part2t(code1), normalize_to_part2t(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Get a human readable language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    let (_, region) = split_language_tag(code);
    let name = match (normalized.as_str(), region.as_deref()) {
        ("zho", Some("CN" | "SG" | "HANS")) => "Chinese (Simplified)".to_string(),
        ("zho", Some("TW" | "HK" | "MO" | "HANT")) => "Chinese (Traditional)".to_string(),
        (_, Some(region)) => format!("{} ({})", lang.to_name(), region),
        (_, None) => lang.to_name().to_string(),
    };

    Ok(name)
}
