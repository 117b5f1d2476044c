// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog rendering module

pub mod formatter;
pub mod output;

pub use formatter::EntryFormatter;
pub use output::OutputFormat;

use crate::types::ReferenceEntry;
use anyhow::Result;

/// Print a locale's entries to stdout
pub fn print_entries(entries: &[ReferenceEntry], locale: &str, format: OutputFormat) -> Result<()> {
    let rendered = format.render(entries, locale)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
