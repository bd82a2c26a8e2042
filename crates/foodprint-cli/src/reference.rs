//! # Reference Subcommands
//!
//! Read-only views of the compiled-in tables, for checking which reference
//! product a catalog name will resolve to before running an update.
//!
//! ```bash
//! foodprint lookup "Bio Tomate rot"
//! foodprint list
//! ```

use std::io::Write;

use anyhow::Result;
use clap::Args;

use foodprint_core::{resolve, EmissionsEntry, ALIASES, REFERENCE_TABLE};

/// Exit code when `lookup` finds no alias in the name.
pub const EXIT_NO_MATCH: u8 = 1;

/// Arguments for the lookup subcommand.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct LookupArgs {
    /// Free-text product name as it appears in the catalog.
    pub name: String,
}

/// Execute the lookup subcommand.
pub fn run_lookup(args: &LookupArgs) -> Result<u8> {
    run_lookup_to(args, &mut std::io::stdout().lock())
}

pub fn run_lookup_to(args: &LookupArgs, out: &mut impl Write) -> Result<u8> {
    let Some(found) = resolve(&args.name) else {
        writeln!(out, "Kein CONCITO-Eintrag für {:?}", args.name)?;
        return Ok(EXIT_NO_MATCH);
    };

    writeln!(out, "  name:         {}", args.name)?;
    writeln!(out, "  alias:        {}", found.alias.key)?;
    writeln!(out, "  product:      {}", found.canonical())?;
    write_entry(found.entry, out)?;
    Ok(0)
}

fn write_entry(entry: &EmissionsEntry, out: &mut impl Write) -> Result<()> {
    let b = &entry.breakdown;
    writeln!(out, "  total:        {:.3} kg CO2e/kg", entry.total)?;
    for (label, value) in [
        ("agriculture", b.agriculture),
        ("iluc", b.iluc),
        ("processing", b.processing),
        ("packaging", b.packaging),
        ("transport", b.transport),
        ("retail", b.retail),
    ] {
        writeln!(out, "    {label:<12}{value:.3}")?;
    }
    Ok(())
}

/// Execute the list subcommand.
pub fn run_list() -> Result<u8> {
    run_list_to(&mut std::io::stdout().lock())
}

pub fn run_list_to(out: &mut impl Write) -> Result<u8> {
    writeln!(out, "CONCITO reference products:")?;
    writeln!(out)?;
    for (name, entry) in REFERENCE_TABLE {
        let aliases = ALIASES
            .iter()
            .filter(|a| a.canonical == *name)
            .map(|a| a.key)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "  {name:<14} {:>6.3}  (aliases: {aliases})", entry.total)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Total: {} products, {} aliases",
        REFERENCE_TABLE.len(),
        ALIASES.len()
    )?;
    Ok(0)
}
