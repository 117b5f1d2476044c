// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for regex-rule

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Identifier of a reference rule. Stable across locales.
pub type RuleId = u32;

/// One documented regex syntax rule.
///
/// Text fields are `Cow<'static, str>` so the built-in tables can live in
/// static memory while catalogs loaded from disk own their strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: RuleId,
    pub title: Cow<'static, str>,
    pub character: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub example: Cow<'static, str>,
}

impl ReferenceEntry {
    /// Build an entry from static text (used by the built-in tables).
    pub const fn borrowed(
        id: RuleId,
        title: &'static str,
        character: &'static str,
        description: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            id,
            title: Cow::Borrowed(title),
            character: Cow::Borrowed(character),
            description: Cow::Borrowed(description),
            example: Cow::Borrowed(example),
        }
    }

    /// Build an entry from owned text.
    pub fn new(
        id: RuleId,
        title: impl Into<String>,
        character: impl Into<String>,
        description: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: Cow::Owned(title.into()),
            character: Cow::Owned(character.into()),
            description: Cow::Owned(description.into()),
            example: Cow::Owned(example.into()),
        }
    }
}

/// The message block of a single locale, as stored in data files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleMessages {
    #[serde(rename = "regexItems", default)]
    pub regex_items: Vec<ReferenceEntry>,
}

impl LocaleMessages {
    pub fn new(regex_items: Vec<ReferenceEntry>) -> Self {
        Self { regex_items }
    }
}

/// Locale code -> message block. Ordered so output is deterministic.
pub type Messages = BTreeMap<String, LocaleMessages>;
