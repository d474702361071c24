//! Detection of text that needs translating.

/// First code point of the CJK Unified Ideographs block
pub const CJK_UNIFIED_START: char = '\u{4E00}';

/// Last code point of the CJK Unified Ideographs block
pub const CJK_UNIFIED_END: char = '\u{9FFF}';

/// Whether `c` is a CJK unified ideograph (U+4E00..=U+9FFF)
pub fn is_cjk_char(c: char) -> bool {
    (CJK_UNIFIED_START..=CJK_UNIFIED_END).contains(&c)
}

/// Whether `text` holds at least one CJK unified ideograph
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_char)
}
