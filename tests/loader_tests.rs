// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading catalogs and configuration from disk

use regex_rule::catalog::CATALOG_FORMAT;
use regex_rule::report::OutputFormat;
use regex_rule::{export, Catalog, CatalogError, Config, Violation};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MESSAGES_JSON: &str = r#"{
    "en": {
        "regexItems": [
            { "id": 1, "title": "Digit", "character": "\\d", "description": "Any digit.", "example": "\"2\" in \"B2\"" },
            { "id": 2, "title": "Word", "character": "\\w", "description": "Any word character.", "example": "\"a\" in \"apple\"" }
        ]
    },
    "es": {
        "regexItems": [
            { "id": 1, "title": "Dígito", "character": "\\d", "description": "Cualquier dígito.", "example": "\"2\" en \"B2\"" },
            { "id": 2, "title": "Palabra", "character": "\\w", "description": "Cualquier carácter de palabra.", "example": "\"a\" en \"apple\"" }
        ]
    }
}"#;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn loads_messages_file() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "messages.json", MESSAGES_JSON);

    let catalog = Catalog::load(&path, None).expect("valid catalog");
    assert_eq!(catalog.fallback_locale(), "en");
    assert_eq!(catalog.entries("es")[0].title, "Dígito");
    assert_eq!(catalog.entries("de")[0].title, "Digit");
}

#[test]
fn loads_yaml_messages_file_with_explicit_fallback() {
    let dir = TempDir::new().unwrap();
    let yaml = r#"
en:
  regexItems:
    - { id: 1, title: Plus, character: "+", description: One or more., example: "/a+/" }
de:
  regexItems:
    - { id: 1, title: Plus, character: "+", description: Ein oder mehr., example: "/a+/" }
"#;
    let path = write(dir.path(), "messages.yml", yaml);

    let catalog = Catalog::load(&path, Some("de")).expect("valid catalog");
    assert_eq!(catalog.fallback_locale(), "de");
    assert_eq!(catalog.entries("it")[0].description, "Ein oder mehr.");
}

#[test]
fn loads_locale_directory() {
    let dir = TempDir::new().unwrap();
    let messages: serde_json::Value = serde_json::from_str(MESSAGES_JSON).unwrap();
    write(dir.path(), "en.json", &messages["en"].to_string());
    write(dir.path(), "es.json", &messages["es"].to_string());
    write(dir.path(), "README.md", "translator notes");

    let catalog = Catalog::load(dir.path(), None).expect("valid directory");
    let locales: Vec<&str> = catalog.locales().collect();
    assert_eq!(locales, vec!["en", "es"]);
    assert_eq!(catalog.entries("es")[1].title, "Palabra");
}

#[test]
fn bcp47_locale_keys_load() {
    let dir = TempDir::new().unwrap();
    let data = MESSAGES_JSON.replacen("\"es\":", "\"es-419\":", 1);
    let mut messages: serde_json::Value = serde_json::from_str(&data).unwrap();
    messages["zh-Hant"] = messages["en"].clone();
    let path = write(dir.path(), "messages.json", &messages.to_string());

    let catalog = Catalog::load(&path, None).expect("BCP 47 keys accepted");
    let locales: Vec<&str> = catalog.locales().collect();
    assert_eq!(locales, vec!["en", "es-419", "zh-Hant"]);
    assert_eq!(catalog.entries("es-419")[0].title, "Dígito");
    assert_eq!(catalog.resolve_locale("zh-Hant"), "zh-Hant");
}

#[test]
fn stray_data_files_in_locale_directory_skipped() {
    let dir = TempDir::new().unwrap();
    let messages: serde_json::Value = serde_json::from_str(MESSAGES_JSON).unwrap();
    write(dir.path(), "en.json", &messages["en"].to_string());
    write(dir.path(), "de.json", &messages["es"].to_string());
    write(dir.path(), "package.json", r#"{ "name": "translations", "version": "1.0.0" }"#);
    write(dir.path(), "_meta.yaml", "owner: docs-team\n");

    let catalog = Catalog::load(dir.path(), None).expect("stray files ignored");
    let locales: Vec<&str> = catalog.locales().collect();
    assert_eq!(locales, vec!["de", "en"]);
    assert!(!catalog.contains_locale("package"));
}

#[test]
fn directory_of_only_stray_files_has_no_locales() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "package.json", "{}");
    let err = Catalog::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, CatalogError::NoLocales(_)));
}

#[test]
fn bad_field_in_document_names_the_problem() {
    let dir = TempDir::new().unwrap();
    let doc = r#"{
  "format": "regex-rule.catalog.v1",
  "messages": {
    "en": { "regexItems": [ { "id": 1, "title": "Digit", "character": "\d", "description": "Any digit.", "example": 7 } ] }
  }
}"#;
    let path = write(dir.path(), "catalog.json", doc);
    let err = Catalog::load(&path, None).unwrap_err();
    let text = err.to_string();
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(text.contains("invalid type: integer `7`"), "{text}");
    assert!(text.contains("line 4"), "{text}");
}

#[test]
fn empty_directory_rejected() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, CatalogError::NoLocales(_)));
}

#[test]
fn inconsistent_characters_rejected() {
    let dir = TempDir::new().unwrap();
    let broken = MESSAGES_JSON.replacen(r#""character": "\\w", "description": "Cualquier"#, r#""character": "\\W", "description": "Cualquier"#, 1);
    let path = write(dir.path(), "messages.json", &broken);

    match Catalog::load(&path, None).unwrap_err() {
        CatalogError::Invalid(violations) => assert_eq!(
            violations,
            vec![Violation::CharacterMismatch {
                locale: "es".into(),
                id: 2,
                expected: "\\w".into(),
                found: "\\W".into(),
            }]
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "messages.json", "{ \"en\": ");
    let err = Catalog::load(&path, None).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[test]
fn export_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let builtin = Catalog::builtin();

    for name in ["catalog.json", "catalog.yaml"] {
        let path = dir.path().join(name);
        export::write_export(&builtin, &path, None).expect("export");

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(CATALOG_FORMAT));

        let loaded = Catalog::load(&path, None).expect("reload");
        assert_eq!(loaded, builtin, "{} did not round-trip", name);
    }
}

#[test]
fn exported_document_fallback_is_honoured() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    let german = Catalog::builtin().with_fallback("de").unwrap();
    export::write_export(&german, &path, Some(OutputFormat::Json)).unwrap();

    let loaded = Catalog::load(&path, None).unwrap();
    assert_eq!(loaded.fallback_locale(), "de");
    assert_eq!(loaded.entries("fr")[0].title, "Anfang des Strings oder der Zeile");
}

#[test]
fn config_file_points_at_catalog_relative_to_itself() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "messages.json", MESSAGES_JSON);
    let config_path = write(
        dir.path(),
        "regex-rule.yaml",
        "locale: es\nfallbackLocale: en\ncatalog: messages.json\n",
    );

    let config = Config::from_file(&config_path).expect("config");
    assert_eq!(config.locale, "es");
    assert_eq!(config.catalog.as_deref(), Some(dir.path().join("messages.json").as_path()));

    let catalog = config.build_catalog().expect("catalog");
    assert_eq!(catalog.entries(&config.locale)[0].title, "Dígito");
}

#[test]
fn config_fallback_missing_from_data_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "messages.json", MESSAGES_JSON);
    let config = Config {
        fallback_locale: "de".into(),
        catalog: Some(path),
        ..Config::default()
    };
    let err = config.build_catalog().unwrap_err();
    assert!(format!("{:#}", err).contains("fallback locale 'de'"));
}
