// SPDX-License-Identifier: PMPL-1.0-or-later

//! Active-locale selection for a view layer.
//!
//! A [`Localizer`] is owned by whatever renders the catalog. It borrows an
//! immutable [`Catalog`] and remembers which locale is on display; there is
//! no process-wide "current locale".

use crate::catalog::Catalog;
use crate::types::{ReferenceEntry, RuleId};

#[derive(Debug, Clone)]
pub struct Localizer<'a> {
    catalog: &'a Catalog,
    active: String,
}

impl<'a> Localizer<'a> {
    /// Start on `locale`. The locale need not be loaded; lookups fall back.
    pub fn new(catalog: &'a Catalog, locale: impl Into<String>) -> Self {
        Self {
            catalog,
            active: locale.into(),
        }
    }

    /// Start on the catalog's fallback locale.
    pub fn with_fallback(catalog: &'a Catalog) -> Self {
        Self::new(catalog, catalog.fallback_locale())
    }

    /// Switch the display locale.
    pub fn set_active_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        tracing::debug!(from = %self.active, to = %locale, "switching display locale");
        self.active = locale;
    }

    /// The locale last requested, which may not be loaded.
    pub fn active_locale(&self) -> &str {
        &self.active
    }

    /// The locale whose entries are actually shown.
    pub fn served_locale(&self) -> &'a str {
        self.catalog.resolve_locale(&self.active)
    }

    /// Whether the active locale is missing and the fallback is on display.
    pub fn is_fallback_active(&self) -> bool {
        !self.catalog.contains_locale(&self.active)
    }

    /// Entries for the active locale.
    pub fn entries(&self) -> &'a [ReferenceEntry] {
        self.catalog.entries(&self.active)
    }

    /// Entries for an explicit locale, ignoring the active one.
    pub fn entries_for(&self, locale: &str) -> &'a [ReferenceEntry] {
        self.catalog.entries(locale)
    }

    /// One entry of the active locale.
    pub fn entry(&self, id: RuleId) -> Option<&'a ReferenceEntry> {
        self.entries().iter().find(|entry| entry.id == id)
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_requested_locale() {
        let catalog = Catalog::builtin();
        let localizer = Localizer::new(&catalog, "de");
        assert_eq!(localizer.active_locale(), "de");
        assert_eq!(localizer.served_locale(), "de");
        assert_eq!(localizer.entries()[0].title, "Anfang des Strings oder der Zeile");
    }

    #[test]
    fn set_active_locale_changes_subsequent_lookups() {
        let catalog = Catalog::builtin();
        let mut localizer = Localizer::with_fallback(&catalog);
        assert_eq!(localizer.entries()[0].title, "Start of string or line");

        localizer.set_active_locale("de");
        assert_eq!(localizer.entries()[0].title, "Anfang des Strings oder der Zeile");
        assert_eq!(localizer.entry(3).map(|e| &*e.title), Some("Sternchen"));
    }

    #[test]
    fn unloaded_active_locale_uses_fallback() {
        let catalog = Catalog::builtin();
        let mut localizer = Localizer::new(&catalog, "de");
        localizer.set_active_locale("fr");
        assert_eq!(localizer.active_locale(), "fr");
        assert_eq!(localizer.served_locale(), "en");
        assert!(localizer.is_fallback_active());
        assert_eq!(localizer.entries(), catalog.entries("en"));
    }

    #[test]
    fn explicit_locale_ignores_active() {
        let catalog = Catalog::builtin();
        let localizer = Localizer::new(&catalog, "en");
        assert_eq!(localizer.entries_for("de")[1].title, "Ende des Strings oder der Zeile");
        assert_eq!(localizer.active_locale(), "en");
    }
}
