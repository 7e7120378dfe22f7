use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module resolves the ISO 639-1 (2-letter) and ISO 639-2 (3-letter)
/// language codes used in configuration into the English language names
/// that translation prompts are built with.

/// Parse a language code into an isolang Language
fn parse_language(code: &str) -> Option<Language> {
    let normalized_code = code.trim().to_lowercase();
    match normalized_code.len() {
        2 => Language::from_639_1(&normalized_code),
        3 => Language::from_639_3(&normalized_code),
        _ => None,
    }
}

/// Get the English name for a language code, e.g. "fr" -> "French".
///
/// Fails for codes that are not valid ISO 639-1 or ISO 639-2/T; this is how
/// configured languages are validated.
pub fn get_language_name(code: &str) -> Result<String> {
    parse_language(code)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}
