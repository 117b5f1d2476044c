// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for catalog construction and loading.
//!
//! Lookups never fail: an unknown locale resolves to the fallback. Errors
//! only arise while a catalog is being built at start-up.

use crate::types::RuleId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported catalog file extension: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("fallback locale '{0}' is not defined in the catalog")]
    MissingFallback(String),

    #[error("no locale files found in {0}")]
    NoLocales(PathBuf),

    #[error("catalog rejected: {}", summarize(.0))]
    Invalid(Vec<Violation>),
}

/// A broken catalog invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("fallback locale '{fallback}' has no entries")]
    MissingFallback { fallback: String },

    #[error("locale '{locale}' has no entries")]
    EmptyLocale { locale: String },

    #[error("locale '{locale}' position {position}: expected id {expected}, found {found}")]
    NonSequentialId {
        locale: String,
        position: usize,
        expected: RuleId,
        found: RuleId,
    },

    #[error("locale '{locale}' has {found} entries, fallback '{fallback}' has {expected}")]
    CountMismatch {
        locale: String,
        fallback: String,
        expected: usize,
        found: usize,
    },

    #[error("locale '{locale}' id {id}: character '{found}' differs from fallback '{expected}'")]
    CharacterMismatch {
        locale: String,
        id: RuleId,
        expected: String,
        found: String,
    },
}

fn summarize(violations: &[Violation]) -> String {
    match violations {
        [] => "no violations recorded".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}
