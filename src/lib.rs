// SPDX-License-Identifier: PMPL-1.0-or-later

//! regex-rule — a localized reference catalog of regular-expression syntax.
//!
//! Each supported language carries the same ordered rule set (token, title,
//! description, example). A view layer asks for the entries of its active
//! locale and gets the fallback locale's entries when that locale is not
//! loaded; a lookup never fails.
//!
//! ```
//! use regex_rule::{Catalog, Localizer};
//!
//! let catalog = Catalog::builtin();
//! let mut view = Localizer::new(&catalog, "en");
//! assert_eq!(view.entries()[0].character, "^");
//!
//! view.set_active_locale("de");
//! assert_eq!(view.entries()[0].title, "Anfang des Strings oder der Zeile");
//! ```

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod i18n;
pub mod locale;
pub mod report;
pub mod types;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, Violation};
pub use i18n::Lang;
pub use locale::Localizer;
pub use types::{LocaleMessages, Messages, ReferenceEntry, RuleId};
