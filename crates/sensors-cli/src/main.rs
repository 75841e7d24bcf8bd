//! `sensors-catalog` — inspect the hardware monitoring register catalog.
//!
//! ```text
//! USAGE:
//!   sensors-catalog list                        List supported chips
//!   sensors-catalog features <prefix>           Feature table for one chip
//!   sensors-catalog lookup <prefix> <feature>   Register ID and access mode
//!   sensors-catalog check                       Verify catalog invariants
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use sensors_chips::Catalog;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sensors-catalog", about = "Hardware monitoring chip register catalog", version)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List all supported chips.
    List,
    /// Print the feature table of one chip.
    Features {
        /// Chip prefix (e.g. lm78, gl518sm-r00).
        prefix: String,
    },
    /// Print the register ID and access mode of one feature.
    Lookup {
        /// Chip prefix (e.g. w83781d).
        prefix: String,
        /// Feature name (e.g. TEMP3_OVER).
        feature: String,
    },
    /// Check the catalog for duplicate prefixes, names or register IDs.
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::global();

    match cli.command {
        Cmd::List => cmd_list(catalog),
        Cmd::Features { prefix } => cmd_features(catalog, &prefix)?,
        Cmd::Lookup { prefix, feature } => cmd_lookup(catalog, &prefix, &feature)?,
        Cmd::Check => cmd_check(catalog)?,
    }

    Ok(())
}

fn cmd_list(catalog: &Catalog) {
    println!("Supported chips: {}", catalog.len());
    println!();

    for chip in catalog.chips() {
        print!(
            "  {:12} {:3} features  {}",
            chip.prefix(),
            chip.len(),
            chip.description()
        );
        if let Some(alias) = chip.compatible_with() {
            print!("  (may use {alias} IDs)");
        }
        println!();
    }
}

fn cmd_features(catalog: &Catalog, prefix: &str) -> Result<()> {
    let chip = catalog.chip(prefix)?;

    println!("{}: {}", chip.prefix(), chip.description());
    println!("{}", "=".repeat(40));
    println!("  {:18} {:>4}  Access", "Feature", "ID");
    for f in catalog.features_of(prefix)? {
        println!("  {:18} {:>4}  {}", f.name(), f.id(), f.access());
    }

    Ok(())
}

fn cmd_lookup(catalog: &Catalog, prefix: &str, feature: &str) -> Result<()> {
    let (id, access) = catalog.lookup(prefix, feature)?;
    println!("{prefix}/{feature}: id={id} access={access}");
    Ok(())
}

fn cmd_check(catalog: &Catalog) -> Result<()> {
    let violations = catalog.violations();
    if violations.is_empty() {
        println!("Catalog OK: {} chips", catalog.len());
        return Ok(());
    }

    for v in &violations {
        println!("  {v}");
    }
    anyhow::bail!("{} catalog violations found", violations.len())
}
