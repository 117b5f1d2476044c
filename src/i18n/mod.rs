// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in languages for regex-rule.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | de   | German   | Deutsch     |
//!
//! ## Design
//!
//! The reference tables are embedded at compile time as static data: no
//! file I/O and no allocation until a catalog is assembled from them.
//! English is the source language; every other table is a translation of
//! the same rule set, so ids and tokens line up one to one.

mod catalog;
mod iso639;

pub use catalog::{builtin_entries, Lang};
pub use iso639::{is_valid_locale_tag, language_code, language_name, native_name};
