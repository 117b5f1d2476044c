// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized reference catalog with static locale fallback.
//!
//! # Invariants
//!
//! 1. **Fallback always resolves**: the fallback locale is present and
//!    non-empty, so [`Catalog::entries`] never comes back empty-handed.
//! 2. **Aligned locales**: every locale has the fallback's ids (1..=n, in
//!    order) and the same `character` per id.
//! 3. **Immutable**: no mutation after construction; a `Catalog` is
//!    `Send + Sync` and shared by reference.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | Locale not loaded | Fallback entries returned |
//! | Unknown id | Id outside 1..=n | `None` |
//! | Broken data | Violated invariant | `Catalog::new` returns `CatalogError::Invalid` |

mod loader;
pub mod validate;

pub use loader::{CatalogDocument, CATALOG_FORMAT};

use crate::error::CatalogError;
use crate::i18n::{builtin_entries, Lang};
use crate::types::{LocaleMessages, Messages, ReferenceEntry, RuleId};
use std::collections::BTreeMap;

/// Locale used when none is configured.
pub const DEFAULT_FALLBACK: &str = "en";

/// Immutable per-locale reference tables plus a fallback locale.
///
/// # Example
///
/// ```
/// use regex_rule::catalog::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.entries("de")[0].title, "Anfang des Strings oder der Zeile");
/// // Unknown locales fall back to English.
/// assert_eq!(catalog.entries("fr"), catalog.entries("en"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    locales: BTreeMap<String, Vec<ReferenceEntry>>,
    fallback: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Build a catalog from message blocks, rejecting any invariant violation.
    pub fn new(messages: Messages, fallback: impl Into<String>) -> Result<Self, CatalogError> {
        let fallback = fallback.into();
        let violations = validate::check(&messages, &fallback);
        if !violations.is_empty() {
            for violation in &violations {
                tracing::warn!(%violation, "catalog data rejected");
            }
            return Err(CatalogError::Invalid(violations));
        }

        let locales = messages
            .into_iter()
            .map(|(locale, block)| (locale, block.regex_items))
            .collect();
        Ok(Self { locales, fallback })
    }

    /// The compiled-in tables, falling back to English.
    pub fn builtin() -> Self {
        let locales = Lang::all()
            .iter()
            .map(|lang| (lang.code().to_string(), builtin_entries(*lang).to_vec()))
            .collect();
        Self {
            locales,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    /// Same tables, different fallback. The fallback must be a loaded locale.
    pub fn with_fallback(self, fallback: impl Into<String>) -> Result<Self, CatalogError> {
        let fallback = fallback.into();
        if !self.contains_locale(&fallback) {
            return Err(CatalogError::MissingFallback(fallback));
        }
        Ok(Self { fallback, ..self })
    }

    /// Entries for `locale` in display order, or the fallback's entries when
    /// `locale` is not loaded. Never fails.
    pub fn entries(&self, locale: &str) -> &[ReferenceEntry] {
        let served = self.resolve_locale(locale);
        self.locales
            .get(served)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The locale whose entries `entries(locale)` returns.
    pub fn resolve_locale(&self, locale: &str) -> &str {
        match self.locales.get_key_value(locale) {
            Some((served, _)) => served.as_str(),
            None => {
                tracing::debug!(
                    requested = locale,
                    fallback = %self.fallback,
                    "locale not loaded, using fallback"
                );
                self.fallback.as_str()
            }
        }
    }

    /// A single entry by id, with the same fallback rule.
    pub fn entry(&self, locale: &str, id: RuleId) -> Option<&ReferenceEntry> {
        self.entries(locale).iter().find(|entry| entry.id == id)
    }

    /// The entry documenting regex token `token` (e.g. `"\\d"`).
    pub fn find_by_character(&self, locale: &str, token: &str) -> Option<&ReferenceEntry> {
        let token = token.trim();
        self.entries(locale)
            .iter()
            .find(|entry| entry.character == token)
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Loaded locale tags, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Number of rules per locale.
    pub fn rule_count(&self) -> usize {
        self.entries(&self.fallback).len()
    }

    /// The catalog as message blocks, the shape data files use.
    pub fn to_messages(&self) -> Messages {
        self.locales
            .iter()
            .map(|(locale, entries)| (locale.clone(), LocaleMessages::new(entries.clone())))
            .collect()
    }
}
