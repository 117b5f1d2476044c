// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale tag validation and language display names.
//!
//! Locale tags follow the BCP 47 shape: a 2-3 letter language, then an
//! optional script, region and variants (`en`, `pt-BR`, `es-419`,
//! `zh-Hant`, `sr-Latn-RS`). Subtags are matched case-insensitively. Names
//! cover the languages a regex-rule catalog is likely to ship, for
//! language pickers.

use regex::Regex;
use std::sync::OnceLock;

fn locale_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^[a-z]{2,3}(-[a-z]{4})?(-([a-z]{2}|[0-9]{3}))?(-([a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*$",
        )
        .expect("static locale pattern")
    })
}

/// Whether `tag` is shaped like a BCP 47 language tag.
///
/// Only the shape is checked; `xx-YY` passes even though no such language
/// exists.
///
/// # Examples
/// ```
/// assert!(regex_rule::i18n::is_valid_locale_tag("en"));
/// assert!(regex_rule::i18n::is_valid_locale_tag("es-419"));
/// assert!(regex_rule::i18n::is_valid_locale_tag("zh-Hant"));
/// assert!(!regex_rule::i18n::is_valid_locale_tag("package"));
/// ```
pub fn is_valid_locale_tag(tag: &str) -> bool {
    locale_tag_pattern().is_match(tag)
}

/// The language part of a locale tag (`"pt-BR"` -> `"pt"`).
pub fn language_code(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Returns the English name of the language in a locale tag.
///
/// Returns `None` for unrecognised codes.
pub fn language_name(tag: &str) -> Option<&'static str> {
    match language_code(tag) {
        "en" => Some("English"),
        "de" => Some("German"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "it" => Some("Italian"),
        "ja" => Some("Japanese"),
        "ko" => Some("Korean"),
        "nl" => Some("Dutch"),
        "pl" => Some("Polish"),
        "pt" => Some("Portuguese"),
        "ru" => Some("Russian"),
        "sv" => Some("Swedish"),
        "tr" => Some("Turkish"),
        "uk" => Some("Ukrainian"),
        "zh" => Some("Chinese"),
        _ => None,
    }
}

/// Returns the native name of the language in a locale tag.
///
/// Used in language selection UIs where users should see their language
/// written in its own script.
pub fn native_name(tag: &str) -> Option<&'static str> {
    match language_code(tag) {
        "en" => Some("English"),
        "de" => Some("Deutsch"),
        "es" => Some("Español"),
        "fr" => Some("Français"),
        "it" => Some("Italiano"),
        "ja" => Some("日本語"),
        "ko" => Some("한국어"),
        "nl" => Some("Nederlands"),
        "pl" => Some("Polski"),
        "pt" => Some("Português"),
        "ru" => Some("Русский"),
        "sv" => Some("Svenska"),
        "tr" => Some("Türkçe"),
        "uk" => Some("Українська"),
        "zh" => Some("中文"),
        _ => None,
    }
}
