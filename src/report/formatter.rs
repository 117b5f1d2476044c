// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable rendering of reference entries

use crate::types::ReferenceEntry;
use colored::*;

pub struct EntryFormatter;

impl Default for EntryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Terminal listing with a heading naming the locale.
    pub fn text(&self, entries: &[ReferenceEntry], locale: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{}\n\n",
            format!("=== REGEX REFERENCE [{}] ===", locale).bold().cyan()
        ));
        for entry in entries {
            out.push_str(&self.text_entry(entry));
            out.push('\n');
        }
        out
    }

    pub fn text_entry(&self, entry: &ReferenceEntry) -> String {
        format!(
            "{:>3}. {}  {}\n     {}\n     {}\n",
            entry.id,
            (&*entry.character).bold().yellow(),
            (&*entry.title).bold(),
            entry.description,
            (&*entry.example).dimmed()
        )
    }

    /// GitHub-flavoured Markdown table.
    pub fn markdown(&self, entries: &[ReferenceEntry], locale: &str) -> String {
        let mut lines = vec![
            format!("## Regex reference ({})", locale),
            String::new(),
            "| # | Token | Title | Description | Example |".to_string(),
            "|---|-------|-------|-------------|---------|".to_string(),
        ];
        lines.extend(entries.iter().map(|entry| {
            format!(
                "| {} | {} | {} | {} | {} |",
                entry.id,
                markdown_code(&entry.character),
                markdown_cell(&entry.title),
                markdown_cell(&entry.description),
                markdown_cell(&entry.example)
            )
        }));
        lines.push(String::new());
        lines.join("\n")
    }
}

fn markdown_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Code span for a regex token; pipes still need escaping inside tables.
fn markdown_code(token: &str) -> String {
    let fence = if token.contains('`') { "``" } else { "`" };
    format!("{fence}{}{fence}", token.replace('|', "\\|"))
}
