// SPDX-License-Identifier: PMPL-1.0-or-later

//! Start-up configuration: display locale, fallback locale, catalog source.
//!
//! Precedence, lowest to highest: built-in defaults, config file,
//! `REGEX_RULE_*` environment variables, command-line flags.

use crate::catalog::{Catalog, DEFAULT_FALLBACK};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCALE_ENV: &str = "REGEX_RULE_LOCALE";
pub const FALLBACK_ENV: &str = "REGEX_RULE_FALLBACK_LOCALE";
pub const CATALOG_ENV: &str = "REGEX_RULE_CATALOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Locale shown on start-up.
    pub locale: String,
    /// Locale served when the requested one is not loaded.
    #[serde(alias = "fallback_locale")]
    pub fallback_locale: String,
    /// Data file or locale directory. `None` uses the built-in tables.
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_FALLBACK.to_string(),
            fallback_locale: DEFAULT_FALLBACK.to_string(),
            catalog: None,
        }
    }
}

impl Config {
    /// Read a YAML or JSON config file, chosen by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let mut config: Config = match ext.as_str() {
            "json" => serde_json::from_str(&data)
                .with_context(|| format!("parsing config {}", path.display()))?,
            "yaml" | "yml" => serde_yaml::from_str(&data)
                .with_context(|| format!("parsing config {}", path.display()))?,
            _ => return Err(anyhow!("unsupported config format: {}", path.display())),
        };

        // Relative catalog paths are relative to the config file.
        if let Some(parent) = path.parent() {
            config.catalog = config.catalog.take().map(|catalog| {
                if catalog.is_relative() {
                    parent.join(catalog)
                } else {
                    catalog
                }
            });
        }
        Ok(config)
    }

    /// Defaults, then `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| env::var(key).ok()))
    }

    /// Like [`Config::load`], but an unreadable or malformed config file
    /// leaves the defaults and environment in place instead of failing.
    /// Used by `check`, which reports the file problem itself.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            tracing::warn!(error = %format!("{:#}", err), "config file unusable, using defaults");
            Self::default().with_overrides(|key| env::var(key).ok())
        })
    }

    /// Apply `REGEX_RULE_*` overrides read through `lookup`. Blank values
    /// are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(locale) = read(LOCALE_ENV) {
            self.locale = locale.trim().to_string();
        }
        if let Some(fallback) = read(FALLBACK_ENV) {
            self.fallback_locale = fallback.trim().to_string();
        }
        if let Some(catalog) = read(CATALOG_ENV) {
            self.catalog = Some(PathBuf::from(catalog.trim()));
        }
        self
    }

    /// Build the catalog this configuration describes.
    pub fn build_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path, Some(self.fallback_locale.as_str()))
                .with_context(|| format!("loading catalog {}", path.display())),
            None => Catalog::builtin()
                .with_fallback(self.fallback_locale.as_str())
                .context("configuring built-in catalog"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_mirror_english_bootstrap() {
        let config = Config::default();
        assert_eq!(config.locale, "en");
        assert_eq!(config.fallback_locale, "en");
        assert!(config.catalog.is_none());
    }

    #[test]
    fn env_overrides_win() {
        let config = Config::default().with_overrides(env_of(&[
            (LOCALE_ENV, "de"),
            (CATALOG_ENV, "/tmp/catalog.json"),
        ]));
        assert_eq!(config.locale, "de");
        assert_eq!(config.fallback_locale, "en");
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn blank_env_values_ignored() {
        let config = Config::default().with_overrides(env_of(&[(LOCALE_ENV, "  ")]));
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn yaml_accepts_camel_and_snake_fallback_keys() {
        let camel: Config = serde_yaml::from_str("locale: de\nfallbackLocale: de\n").unwrap();
        let snake: Config = serde_yaml::from_str("fallback_locale: de\n").unwrap();
        assert_eq!(camel.fallback_locale, "de");
        assert_eq!(snake.fallback_locale, "de");
        assert_eq!(snake.locale, "en");
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let path = Path::new("/nonexistent/regex-rule/config.yaml");
        assert!(Config::load(Some(path)).is_err());
        let config = Config::load_or_default(Some(path));
        assert_eq!(config, Config::default().with_overrides(|key| env::var(key).ok()));
    }

    #[test]
    fn builtin_catalog_with_unknown_fallback_fails() {
        let config = Config {
            fallback_locale: "fr".into(),
            ..Config::default()
        };
        assert!(config.build_catalog().is_err());
    }

    #[test]
    fn builtin_catalog_honours_fallback() {
        let config = Config {
            fallback_locale: "de".into(),
            ..Config::default()
        };
        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.fallback_locale(), "de");
    }
}
