// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data-driven catalog loader.
//!
//! Accepts a messages file (locale -> `{ regexItems }`), a catalog document
//! as written by `export`, or a directory holding one `<locale>.json|yaml`
//! file per locale.

use super::{Catalog, DEFAULT_FALLBACK};
use crate::error::CatalogError;
use crate::i18n::is_valid_locale_tag;
use crate::types::{LocaleMessages, Messages};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Format tag written into exported catalog documents.
pub const CATALOG_FORMAT: &str = "regex-rule.catalog.v1";

/// Self-describing catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(rename = "fallbackLocale", default, skip_serializing_if = "Option::is_none")]
    pub fallback_locale: Option<String>,
    pub messages: Messages,
}

/// Only the top-level `format` key, to tell documents from bare messages.
#[derive(Deserialize)]
struct FormatTag {
    #[serde(default)]
    format: Option<IgnoredAny>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Some(DataFormat::Json),
            Some("yaml") | Some("yml") => Some(DataFormat::Yaml),
            _ => None,
        }
    }

    /// Parse a messages file or catalog document into its messages and
    /// declared fallback. Errors come from the shape the file claims to be.
    fn parse_file(&self, path: &Path, data: &str) -> Result<(Messages, Option<String>), CatalogError> {
        let is_document = self
            .parse::<FormatTag>(path, data)
            .map(|tag| tag.format.is_some())
            .unwrap_or(false);
        if is_document {
            let doc: CatalogDocument = self.parse(path, data)?;
            Ok((doc.messages, doc.fallback_locale))
        } else {
            Ok((self.parse(path, data)?, None))
        }
    }

    fn parse<T: DeserializeOwned>(&self, path: &Path, data: &str) -> Result<T, CatalogError> {
        let parsed = match self {
            DataFormat::Json => serde_json::from_str(data).map_err(|err| err.to_string()),
            DataFormat::Yaml => serde_yaml::from_str(data).map_err(|err| err.to_string()),
        };
        parsed.map_err(|message| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Catalog {
    /// Load from a file or a locale directory.
    ///
    /// The fallback is `fallback` if given, else the document's
    /// `fallbackLocale`, else `"en"`.
    pub fn load(path: &Path, fallback: Option<&str>) -> Result<Self, CatalogError> {
        if path.is_dir() {
            Self::from_dir(path, fallback)
        } else {
            Self::from_file(path, fallback)
        }
    }

    /// Load a messages file or catalog document.
    pub fn from_file(path: &Path, fallback: Option<&str>) -> Result<Self, CatalogError> {
        let format = DataFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
        let data = read(path)?;
        let (messages, document_fallback) = format.parse_file(path, &data)?;

        let fallback = fallback
            .map(str::to_string)
            .or(document_fallback)
            .unwrap_or_else(|| DEFAULT_FALLBACK.to_string());
        let catalog = Self::new(messages, fallback)?;
        tracing::info!(
            path = %path.display(),
            locales = catalog.locales.len(),
            "loaded reference catalog"
        );
        Ok(catalog)
    }

    /// Load a directory of `<locale>.json|yaml|yml` files. Other files,
    /// including data files whose stem is not a locale tag (`package.json`),
    /// are ignored; subdirectories are not descended into.
    pub fn from_dir(dir: &Path, fallback: Option<&str>) -> Result<Self, CatalogError> {
        let mut messages = Messages::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| CatalogError::Io {
                path: dir.to_path_buf(),
                source: err.into(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(format) = DataFormat::from_path(path) else {
                tracing::debug!(path = %path.display(), "skipping non-catalog file");
                continue;
            };
            let Some(locale) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .filter(|stem| is_valid_locale_tag(stem))
            else {
                tracing::debug!(path = %path.display(), "skipping non-locale data file");
                continue;
            };

            let block: LocaleMessages = format.parse(path, &read(path)?)?;
            messages.insert(locale.to_string(), block);
        }

        if messages.is_empty() {
            return Err(CatalogError::NoLocales(dir.to_path_buf()));
        }

        let catalog = Self::new(messages, fallback.unwrap_or(DEFAULT_FALLBACK))?;
        tracing::info!(
            path = %dir.display(),
            locales = catalog.locales.len(),
            "loaded reference catalog directory"
        );
        Ok(catalog)
    }

    /// Wrap the catalog in a self-describing document.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            format: CATALOG_FORMAT.to_string(),
            generated_at: Some(chrono::Utc::now().to_rfc3339()),
            fallback_locale: Some(self.fallback.clone()),
            messages: self.to_messages(),
        }
    }
}
