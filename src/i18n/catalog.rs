// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in reference tables for regex-rule.
//!
//! Every supported language carries the same canonical rule set as a
//! compile-time static table. Ids run from 1 in display order and the
//! `character` column is identical in every table; only the prose is
//! translated.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add a `Lang::Xx => "xx"` arm to `Lang::code()`
//! 3. Add a `"xx" => Some(Lang::Xx)` arm to `Lang::from_code()`
//! 4. Create a `const XX: &[ReferenceEntry]` table below, same ids and
//!    characters as `EN`
//! 5. Add `Lang::Xx => XX` to the match in `builtin_entries()`

use crate::types::ReferenceEntry;

/// Languages with a built-in reference table.
///
/// Each variant maps to an ISO 639-1 two-letter code. English is the source
/// language and the default fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    De,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
        }
    }

    /// Parse an ISO 639-1 code into a built-in language.
    ///
    /// Returns `None` for codes without a built-in table. Case-sensitive.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "de" => Some(Lang::De),
            _ => None,
        }
    }

    /// All built-in languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::De]
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The built-in table for `lang`, in display order.
pub fn builtin_entries(lang: Lang) -> &'static [ReferenceEntry] {
    match lang {
        Lang::En => EN,
        Lang::De => DE,
    }
}

// ─── English (source language) ──────────────────────────────────────

const EN: &[ReferenceEntry] = &[
    ReferenceEntry::borrowed(
        1,
        "Start of string or line",
        "^",
        "Matches the beginning of the string or line.",
        "For example, /^A/ does not match the \"A\" in \"an A\", but does match the first \"A\" in \"An A\".",
    ),
    ReferenceEntry::borrowed(
        2,
        "End of string or line",
        "$",
        "Matches the end of the string or line.",
        "For example, /t$/ does not match the \"t\" in \"eater\", but does match it in \"eat\".",
    ),
    ReferenceEntry::borrowed(
        3,
        "Asterisk",
        "*",
        "Expression matches zero or more.",
        "For example, /bo*/ matches \"boooo\" in \"A ghost booooed\" and \"b\" in \"A bird warbled\", but nothing in \"A goat grunted\".",
    ),
    ReferenceEntry::borrowed(
        4,
        "Plus",
        "+",
        "Expression matches one or more.",
        "For example, /a+/ matches the \"a\" in \"candy\" and all the \"a\"s in \"caaaaaaandy\", but nothing in \"cndy\".",
    ),
    ReferenceEntry::borrowed(
        5,
        "Quantifier",
        "{n,m}",
        "Expression matches within specified ranges.",
        "For example, /a{1,3}/ matches nothing in \"cndy\", the \"a\" in \"candy\", the two \"a\"s in \"caandy\", and the first three \"a\"s in \"caaaaaaandy\".",
    ),
    ReferenceEntry::borrowed(
        6,
        "Character set",
        "[xyz]",
        "Matches any character in the set.",
        "For example, [abcd] is the same as [a-d]. They match the \"b\" in \"brisket\", and the \"c\" in \"chop\".",
    ),
    ReferenceEntry::borrowed(
        7,
        "Negated character set",
        "[^xyz]",
        "Matches any character not in the set.",
        "For example, [^abc] is the same as [^a-c]. They initially match \"o\" in \"bacon\" and \"h\" in \"chop\".",
    ),
    ReferenceEntry::borrowed(
        8,
        "Wildcard",
        ".",
        "Matches any character except line breaks.",
        "For example, /.y/ matches \"my\" and \"ay\", but not \"yes\", in \"yes make my day\", as there is no character before \"y\" in \"yes\".",
    ),
    ReferenceEntry::borrowed(
        9,
        "Word",
        "\\w",
        "Matches any alphanumeric character. Including the underline.",
        "For example, /\\w/ matches \"a\" in \"apple\", \"5\" in \"$5.28\", \"3\" in \"3D\" and \"m\" in \"Émanuel\".",
    ),
    ReferenceEntry::borrowed(
        10,
        "Digit",
        "\\d",
        "Matches any numeric character.",
        "For example, /\\d/ or /[0-9]/ matches \"2\" in \"B2 is the suite number\".",
    ),
];

// ─── German ─────────────────────────────────────────────────────────

const DE: &[ReferenceEntry] = &[
    ReferenceEntry::borrowed(
        1,
        "Anfang des Strings oder der Zeile",
        "^",
        "Findet den Anfang des Strings oder der Zeile.",
        "Zum Beispiel passt /^A/ nicht auf das \"A\" in \"ein A\", aber auf das erste \"A\" in \"Ein A\".",
    ),
    ReferenceEntry::borrowed(
        2,
        "Ende des Strings oder der Zeile",
        "$",
        "Findet das Ende des Strings oder der Zeile.",
        "Zum Beispiel passt /t$/ nicht auf das \"t\" in \"eater\", aber auf das \"t\" in \"eat\".",
    ),
    ReferenceEntry::borrowed(
        3,
        "Sternchen",
        "*",
        "Der Ausdruck passt auf null oder mehr Vorkommen.",
        "Zum Beispiel passt /bo*/ auf \"boooo\" in \"A ghost booooed\" und \"b\" in \"A bird warbled\", aber auf nichts in \"A goat grunted\".",
    ),
    ReferenceEntry::borrowed(
        4,
        "Plus",
        "+",
        "Der Ausdruck passt auf ein oder mehr Vorkommen.",
        "Zum Beispiel passt /a+/ auf das \"a\" in \"candy\" und alle \"a\"s in \"caaaaaaandy\", aber auf nichts in \"cndy\".",
    ),
    ReferenceEntry::borrowed(
        5,
        "Quantifizierer",
        "{n,m}",
        "Der Ausdruck passt innerhalb der angegebenen Bereiche.",
        "Zum Beispiel passt /a{1,3}/ auf nichts in \"cndy\", das \"a\" in \"candy\", die zwei \"a\"s in \"caandy\" und die ersten drei \"a\"s in \"caaaaaaandy\".",
    ),
    ReferenceEntry::borrowed(
        6,
        "Zeichensatz",
        "[xyz]",
        "Passt auf jedes Zeichen im Satz.",
        "Zum Beispiel ist [abcd] das gleiche wie [a-d]. Sie passen auf das \"b\" in \"brisket\" und das \"c\" in \"chop\".",
    ),
    ReferenceEntry::borrowed(
        7,
        "Negierter Zeichensatz",
        "[^xyz]",
        "Passt auf jedes Zeichen, das nicht im Satz ist.",
        "Zum Beispiel ist [^abc] das gleiche wie [^a-c]. Sie passen zunächst auf \"o\" in \"bacon\" und \"h\" in \"chop\".",
    ),
    ReferenceEntry::borrowed(
        8,
        "Platzhalter",
        ".",
        "Passt auf jedes Zeichen außer Zeilenumbrüchen.",
        "Zum Beispiel passt /.y/ auf \"my\" und \"ay\", aber nicht auf \"yes\" in \"yes make my day\", da es kein Zeichen vor \"y\" in \"yes\" gibt.",
    ),
    ReferenceEntry::borrowed(
        9,
        "Wortzeichen",
        "\\w",
        "Passt auf jedes alphanumerische Zeichen, einschließlich Unterstrich.",
        "Zum Beispiel passt /\\w/ auf \"a\" in \"apple\", \"5\" in \"$5.28\", \"3\" in \"3D\" und \"m\" in \"Émanuel\".",
    ),
    ReferenceEntry::borrowed(
        10,
        "Ziffer",
        "\\d",
        "Passt auf jedes numerische Zeichen.",
        "Zum Beispiel passt /\\d/ oder /[0-9]/ auf \"2\" in \"B2 is the suite number\".",
    ),
];
