// SPDX-License-Identifier: PMPL-1.0-or-later

//! regex-rule: browse the localized regex syntax reference from a terminal.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use regex_rule::config::Config;
use regex_rule::i18n::native_name;
use regex_rule::report::{self, OutputFormat};
use regex_rule::{diagnostics, export, Localizer, RuleId};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "regex-rule")]
#[command(version)]
#[command(about = "Localized reference for regular-expression syntax")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog data file or locale directory (overrides config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Display locale (overrides config)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every entry for the display locale
    List {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one entry by id
    Show {
        #[arg(value_name = "ID")]
        id: RuleId,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Look up the entry documenting a regex token, e.g. '\d'
    Find {
        #[arg(value_name = "TOKEN")]
        token: String,
    },

    /// List loaded locales
    Locales,

    /// Check configuration and catalog invariants
    Check,

    /// Write the catalog to a data file that can be loaded back
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// json or yaml (default: from the file extension)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "regex_rule=debug"
    } else {
        "regex_rule=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // `check` reports a broken config file instead of stopping at it.
    let mut config = match cli.command {
        Commands::Check => Config::load_or_default(cli.config.as_deref()),
        _ => Config::load(cli.config.as_deref())?,
    };
    if let Some(catalog) = cli.catalog {
        config.catalog = Some(catalog);
    }
    if let Some(lang) = cli.lang {
        config.locale = lang;
    }

    match cli.command {
        Commands::Check => diagnostics::run_self_diagnostics(&config, cli.config.as_deref()),

        Commands::List { format } => with_view(&config, |view| {
            report::print_entries(view.entries(), view.served_locale(), format)
        }),

        Commands::Show { id, format } => with_view(&config, |view| {
            let entry = view.entry(id).ok_or_else(|| {
                anyhow!(
                    "no entry with id {} (1..={})",
                    id,
                    view.catalog().rule_count()
                )
            })?;
            println!("{}", format.render_entry(entry, view.served_locale())?.trim_end());
            Ok(())
        }),

        Commands::Find { token } => with_view(&config, |view| {
            let entry = view
                .catalog()
                .find_by_character(view.served_locale(), &token)
                .ok_or_else(|| anyhow!("no entry documents '{}'", token.trim()))?;
            let rendered = OutputFormat::Text.render_entry(entry, view.served_locale())?;
            println!("{}", rendered.trim_end());
            Ok(())
        }),

        Commands::Locales => with_view(&config, |view| {
            let catalog = view.catalog();
            for locale in catalog.locales() {
                let name = native_name(locale).unwrap_or("?");
                let marker = if locale == catalog.fallback_locale() {
                    " (fallback)".dimmed().to_string()
                } else {
                    String::new()
                };
                let active = if locale == view.served_locale() { "*" } else { " " };
                println!("{} {:6} {}{}", active, locale.bold(), name, marker);
            }
            Ok(())
        }),

        Commands::Export { output, format } => {
            let catalog = config.build_catalog()?;
            export::write_export(&catalog, &output, format)?;
            println!("Catalog saved to: {}", output.display());
            Ok(())
        }
    }
}

/// Build the configured catalog and run `action` against a view on it.
fn with_view<F>(config: &Config, action: F) -> Result<()>
where
    F: FnOnce(&Localizer<'_>) -> Result<()>,
{
    let catalog = config.build_catalog()?;
    let view = Localizer::new(&catalog, config.locale.as_str());
    if view.is_fallback_active() {
        eprintln!(
            "{} locale '{}' not available, showing '{}'",
            "note:".yellow(),
            view.active_locale(),
            view.served_locale()
        );
    }
    action(&view)
}
