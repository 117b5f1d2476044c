// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-diagnostics over configuration and catalog data.

use crate::catalog::Catalog;
use crate::config::{Config, CATALOG_ENV, FALLBACK_ENV, LOCALE_ENV};
use crate::error::CatalogError;
use crate::i18n::{is_valid_locale_tag, native_name};
use anyhow::{anyhow, Result};
use std::env;
use std::path::Path;

pub fn run_self_diagnostics(config: &Config, config_path: Option<&Path>) -> Result<()> {
    println!("regex-rule self-diagnostics");

    let checks = collect(config, config_path);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(config: &Config, config_path: Option<&Path>) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("regex-rule {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(check_config_file(config_path));
    checks.push(check_env("locale override", LOCALE_ENV));
    checks.push(check_env("fallback override", FALLBACK_ENV));
    checks.push(check_env("catalog override", CATALOG_ENV));
    checks.push(check_locale_tag("display locale", &config.locale));
    checks.push(check_locale_tag("fallback locale", &config.fallback_locale));

    match config.catalog.as_deref() {
        Some(path) => {
            checks.push(check_catalog_path(path));
            match Catalog::load(path, Some(config.fallback_locale.as_str())) {
                Ok(catalog) => checks.extend(check_catalog(&catalog, config)),
                Err(err) => checks.extend(catalog_errors(err)),
            }
        }
        None => {
            checks.push(Diagnostic::ok("catalog source", "built-in tables".to_string()));
            match Catalog::builtin().with_fallback(config.fallback_locale.as_str()) {
                Ok(catalog) => checks.extend(check_catalog(&catalog, config)),
                Err(err) => checks.extend(catalog_errors(err)),
            }
        }
    }

    checks
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

fn check_config_file(path: Option<&Path>) -> Diagnostic {
    match path {
        None => Diagnostic::ok("config file", "none (using defaults)".to_string()),
        Some(path) if path.is_file() => match Config::from_file(path) {
            Ok(_) => Diagnostic::ok("config file", format!("{} exists", path.display())),
            Err(err) => Diagnostic::error("config file", format!("{:#}", err)),
        },
        Some(path) => Diagnostic::error("config file", format!("{} missing", path.display())),
    }
}

fn check_env(label: &'static str, env_key: &str) -> Diagnostic {
    match env::var(env_key) {
        Ok(value) if !value.trim().is_empty() => {
            Diagnostic::ok(label, format!("{}={}", env_key, value.trim()))
        }
        _ => Diagnostic::ok(label, format!("not set ({})", env_key)),
    }
}

fn check_locale_tag(label: &'static str, locale: &str) -> Diagnostic {
    if is_valid_locale_tag(locale) {
        Diagnostic::ok(label, locale.to_string())
    } else {
        Diagnostic::warning(label, format!("'{}' is not a BCP 47 language tag", locale))
    }
}

fn check_catalog_path(path: &Path) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok("catalog source", format!("{} (locale directory)", path.display()))
    } else if path.is_file() {
        Diagnostic::ok("catalog source", format!("{} (data file)", path.display()))
    } else {
        Diagnostic::error("catalog source", format!("{} missing", path.display()))
    }
}

fn check_catalog(catalog: &Catalog, config: &Config) -> Vec<Diagnostic> {
    let mut checks = vec![Diagnostic::ok(
        "catalog invariants",
        format!("{} rules aligned across locales", catalog.rule_count()),
    )];

    for locale in catalog.locales() {
        let name = native_name(locale)
            .map(str::to_string)
            .unwrap_or_else(|| "unknown language".to_string());
        let marker = if locale == catalog.fallback_locale() {
            " (fallback)"
        } else {
            ""
        };
        checks.push(Diagnostic::ok(
            "locale",
            format!("{} {}{}: {} entries", locale, name, marker, catalog.entries(locale).len()),
        ));
        if !is_valid_locale_tag(locale) {
            checks.push(check_locale_tag("loaded locale", locale));
        }
    }

    if catalog.contains_locale(&config.locale) {
        checks.push(Diagnostic::ok(
            "display locale loaded",
            config.locale.clone(),
        ));
    } else {
        checks.push(Diagnostic::warning(
            "display locale loaded",
            format!(
                "'{}' not loaded, '{}' will be shown",
                config.locale,
                catalog.fallback_locale()
            ),
        ));
    }
    checks
}

fn catalog_errors(err: CatalogError) -> Vec<Diagnostic> {
    match err {
        CatalogError::Invalid(violations) => violations
            .into_iter()
            .map(|violation| Diagnostic::error("catalog invariants", violation.to_string()))
            .collect(),
        other => vec![Diagnostic::error("catalog load", other.to_string())],
    }
}
