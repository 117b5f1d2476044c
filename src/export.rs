// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog export helpers.
//!
//! Writes a catalog document that `Catalog::load` accepts back, so the
//! built-in tables can be handed to translators and returned as data.

use crate::catalog::{Catalog, CatalogDocument};
use crate::report::OutputFormat;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

pub fn serialize_document(document: &CatalogDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(document)?),
        other => Err(anyhow!(
            "catalog export needs json or yaml, not {}",
            other.extension()
        )),
    }
}

/// Write `catalog` to `output`. With no explicit format the extension decides.
pub fn write_export(catalog: &Catalog, output: &Path, format: Option<OutputFormat>) -> Result<()> {
    let format = match format {
        Some(format) => format,
        None => output
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(OutputFormat::parse)
            .filter(OutputFormat::is_data)
            .ok_or_else(|| {
                anyhow!(
                    "cannot infer export format from {}; use --format json|yaml",
                    output.display()
                )
            })?,
    };

    let payload = serialize_document(&catalog.to_document(), format)?;
    fs::write(output, payload)
        .with_context(|| format!("writing catalog export {}", output.display()))?;
    tracing::info!(path = %output.display(), format = format.extension(), "exported catalog");
    Ok(())
}
