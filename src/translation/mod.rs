/*!
 * Translation of spreadsheet values.
 *
 * - `detect`: whether a value holds CJK text at all
 * - `core`: the per-value translation service with bounded retry
 * - `cache`: optional per-run memo of successful translations
 * - `table`: applying the service to every header and cell of a table
 */

// Re-export main types for easier usage
pub use self::cache::TranslationCache;
pub use self::core::{RetryPolicy, TranslationResult, TranslationService};
pub use self::detect::{contains_cjk, is_cjk_char};
pub use self::table::{TableTranslationStats, TableTranslator};

// Submodules
pub mod cache;
pub mod core;
pub mod detect;
pub mod table;
