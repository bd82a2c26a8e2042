//! # foodprint-cli: Catalog CO2 Maintenance
//!
//! The `foodprint` command-line interface over `foodprint-core`.
//!
//! ## Subcommands
//!
//! - `foodprint update` (default): Refresh CO2 figures in the catalog.
//! - `foodprint lookup <name>`: Show which reference product a name resolves to.
//! - `foodprint list`: Print the reference table and its aliases.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; matching and updating live in the core crate.
//! - Handlers return the process exit code as `u8`.

pub mod reference;
pub mod update;
