// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported catalogs

use crate::report::formatter::EntryFormatter;
use crate::types::ReferenceEntry;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Whether the output can be loaded back as catalog data.
    pub fn is_data(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }

    /// Render a locale's entries.
    pub fn render(&self, entries: &[ReferenceEntry], locale: &str) -> Result<String> {
        let formatter = EntryFormatter::new();
        match self {
            OutputFormat::Text => Ok(formatter.text(entries, locale)),
            OutputFormat::Markdown => Ok(formatter.markdown(entries, locale)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(entries)?),
        }
    }

    /// Render a single entry.
    pub fn render_entry(&self, entry: &ReferenceEntry, locale: &str) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(EntryFormatter::new().text_entry(entry)),
            OutputFormat::Markdown => self.render(std::slice::from_ref(entry), locale),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entry)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(entry)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn parse_aliases() {
        assert_eq!(OutputFormat::parse("MD"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::parse("yml"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("xml"), None);
    }

    #[test]
    fn json_output_is_entry_array() {
        let catalog = Catalog::builtin();
        let json = OutputFormat::Json.render(catalog.entries("en"), "en").unwrap();
        let parsed: Vec<ReferenceEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_slice(), catalog.entries("en"));
    }

    #[test]
    fn json_entry_uses_field_names() {
        let catalog = Catalog::builtin();
        let entry = catalog.entry("en", 1).unwrap();
        let json = OutputFormat::Json.render_entry(entry, "en").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["character"], "^");
        assert_eq!(value["title"], "Start of string or line");
    }

    #[test]
    fn yaml_entry_contains_token() {
        let catalog = Catalog::builtin();
        let entry = catalog.entry("de", 9).unwrap();
        let yaml = OutputFormat::Yaml.render_entry(entry, "de").unwrap();
        assert!(yaml.contains("Wortzeichen"));
    }
}
