// SPDX-License-Identifier: PMPL-1.0-or-later

//! Invariant checks over raw catalog data.
//!
//! The fallback locale is the reference: every other locale must carry the
//! same number of entries, with ids running 1..=n in order and the same
//! `character` at each id.

use crate::error::Violation;
use crate::types::{Messages, ReferenceEntry, RuleId};

/// Collect every invariant violation in `messages`, fallback first.
///
/// An empty result means the data can back a [`Catalog`](super::Catalog).
pub fn check(messages: &Messages, fallback: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (locale, block) in messages {
        if block.regex_items.is_empty() {
            violations.push(Violation::EmptyLocale {
                locale: locale.clone(),
            });
        }
        check_sequential(locale, &block.regex_items, &mut violations);
    }

    let Some(reference) = messages
        .get(fallback)
        .map(|block| block.regex_items.as_slice())
        .filter(|items| !items.is_empty())
    else {
        violations.insert(
            0,
            Violation::MissingFallback {
                fallback: fallback.to_string(),
            },
        );
        return violations;
    };

    for (locale, block) in messages {
        if locale == fallback {
            continue;
        }
        check_against_reference(locale, fallback, &block.regex_items, reference, &mut violations);
    }

    violations
}

fn check_sequential(locale: &str, entries: &[ReferenceEntry], out: &mut Vec<Violation>) {
    for (position, entry) in entries.iter().enumerate() {
        let expected = position as RuleId + 1;
        if entry.id != expected {
            out.push(Violation::NonSequentialId {
                locale: locale.to_string(),
                position,
                expected,
                found: entry.id,
            });
        }
    }
}

fn check_against_reference(
    locale: &str,
    fallback: &str,
    entries: &[ReferenceEntry],
    reference: &[ReferenceEntry],
    out: &mut Vec<Violation>,
) {
    if entries.len() != reference.len() {
        out.push(Violation::CountMismatch {
            locale: locale.to_string(),
            fallback: fallback.to_string(),
            expected: reference.len(),
            found: entries.len(),
        });
    }

    for entry in entries {
        // Match by id so a single misplaced entry doesn't cascade.
        if let Some(expected) = reference.iter().find(|r| r.id == entry.id) {
            if expected.character != entry.character {
                out.push(Violation::CharacterMismatch {
                    locale: locale.to_string(),
                    id: entry.id,
                    expected: expected.character.to_string(),
                    found: entry.character.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocaleMessages;

    fn entry(id: RuleId, character: &str) -> ReferenceEntry {
        ReferenceEntry::new(id, "title", character, "description", "example")
    }

    fn messages(blocks: &[(&str, Vec<ReferenceEntry>)]) -> Messages {
        blocks
            .iter()
            .map(|(locale, items)| (locale.to_string(), LocaleMessages::new(items.clone())))
            .collect()
    }

    #[test]
    fn consistent_data_has_no_violations() {
        let data = messages(&[
            ("en", vec![entry(1, "^"), entry(2, "$")]),
            ("de", vec![entry(1, "^"), entry(2, "$")]),
        ]);
        assert!(check(&data, "en").is_empty());
    }

    #[test]
    fn missing_fallback_reported_first() {
        let data = messages(&[("de", vec![entry(1, "^")])]);
        let violations = check(&data, "en");
        assert_eq!(
            violations,
            vec![Violation::MissingFallback {
                fallback: "en".into()
            }]
        );
    }

    #[test]
    fn empty_fallback_counts_as_missing() {
        let data = messages(&[("en", vec![])]);
        let violations = check(&data, "en");
        assert!(matches!(violations[0], Violation::MissingFallback { .. }));
        assert!(violations.contains(&Violation::EmptyLocale {
            locale: "en".into()
        }));
    }

    #[test]
    fn gap_in_ids_detected() {
        let data = messages(&[("en", vec![entry(1, "^"), entry(3, "$")])]);
        assert_eq!(
            check(&data, "en"),
            vec![Violation::NonSequentialId {
                locale: "en".into(),
                position: 1,
                expected: 2,
                found: 3,
            }]
        );
    }

    #[test]
    fn count_mismatch_detected() {
        let data = messages(&[
            ("en", vec![entry(1, "^"), entry(2, "$")]),
            ("de", vec![entry(1, "^")]),
        ]);
        assert_eq!(
            check(&data, "en"),
            vec![Violation::CountMismatch {
                locale: "de".into(),
                fallback: "en".into(),
                expected: 2,
                found: 1,
            }]
        );
    }

    #[test]
    fn character_mismatch_detected() {
        let data = messages(&[
            ("en", vec![entry(1, "^"), entry(2, "$")]),
            ("de", vec![entry(1, "^"), entry(2, "\\z")]),
        ]);
        assert_eq!(
            check(&data, "en"),
            vec![Violation::CharacterMismatch {
                locale: "de".into(),
                id: 2,
                expected: "$".into(),
                found: "\\z".into(),
            }]
        );
    }

    #[test]
    fn locale_keys_are_not_constrained() {
        let mut blocks = vec![("en", vec![entry(1, "^")])];
        for locale in ["es-419", "zh-Hant", "sr-Latn-RS", "en-us", "fil", "German"] {
            blocks.push((locale, vec![entry(1, "^")]));
        }
        assert!(check(&messages(&blocks), "en").is_empty());
    }
}
