//! # Update Subcommand
//!
//! Refreshes the CO2 figures in the catalog from the CONCITO reference table
//! and prints one line per changed product.
//!
//! ```bash
//! foodprint                                   # same as `foodprint update`
//! foodprint update --path data/lebensmittel.json
//! foodprint update --dry-run
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Args;

use foodprint_core::{refresh, RefreshOptions, RefreshReport, DEFAULT_CATALOG_PATH};

/// Exit code when the catalog file does not exist.
pub const EXIT_NOT_FOUND: u8 = 2;

const RULE_WIDTH: usize = 70;

/// Arguments for the update subcommand.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct UpdateArgs {
    /// Catalog file to refresh.
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    pub path: PathBuf,

    /// Report what would change without writing the catalog or a backup.
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for UpdateArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
            dry_run: false,
        }
    }
}

/// Execute the update subcommand against the local clock.
pub fn run_update(args: &UpdateArgs) -> Result<u8> {
    let mut out = std::io::stdout().lock();
    run_update_at(args, Local::now().naive_local(), &mut out)
}

/// Execute the update subcommand with an explicit `now`, writing the
/// console report to `out`.
pub fn run_update_at(args: &UpdateArgs, now: NaiveDateTime, out: &mut impl Write) -> Result<u8> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "CONCITO CO2 Update Script")?;
    writeln!(out, "{rule}")?;

    let code = refresh_and_report(&args.path, now, args.dry_run, out)?;

    writeln!(out, "{rule}")?;
    Ok(code)
}

fn refresh_and_report(
    path: &Path,
    now: NaiveDateTime,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<u8> {
    writeln!(out, "🔄 Lade {}...", path.display())?;

    let options = RefreshOptions { dry_run };
    let report = match refresh(path, now, options) {
        Ok(report) => report,
        Err(e) if e.is_not_found() => {
            tracing::warn!("{e}");
            writeln!(out, "❌ Fehler: {} nicht gefunden!", path.display())?;
            writeln!(out, "   Führe das Script aus dem Root-Verzeichnis aus.")?;
            return Ok(EXIT_NOT_FOUND);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to refresh {}", path.display()));
        }
    };

    write_report(&report, dry_run, out)?;
    Ok(0)
}

/// Render the per-product change lines and the summary.
fn write_report(report: &RefreshReport, dry_run: bool, out: &mut impl Write) -> Result<()> {
    for change in &report.update.changes {
        writeln!(
            out,
            "  ✏️  {:<30}: {:.3} → {:.3} kg/kg",
            change.name, change.old_co2, change.new_co2
        )?;
    }

    if report.updated() == 0 {
        writeln!(out)?;
        writeln!(
            out,
            "✅ Alle {} Produkte sind bereits aktuell!",
            report.update.unchanged
        )?;
        return Ok(());
    }

    if dry_run {
        writeln!(out)?;
        writeln!(
            out,
            "🔍 Probelauf: {} Produkte würden aktualisiert, nichts geschrieben.",
            report.updated()
        )?;
        return Ok(());
    }

    if let Some(backup) = &report.backup {
        writeln!(out)?;
        writeln!(out, "💾 Backup erstellt: {}", backup.display())?;
    }
    writeln!(out)?;
    writeln!(out, "✅ {} Produkte aktualisiert!", report.updated())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(8, 0, 1)
            .unwrap()
    }

    fn run(args: &UpdateArgs) -> (u8, String) {
        let mut out = Vec::new();
        let code = run_update_at(args, now(), &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_args_point_at_project_catalog() {
        let args = UpdateArgs::default();
        assert_eq!(args.path, PathBuf::from("src/lib/data/lebensmittel.json"));
        assert!(!args.dry_run);
    }

    #[test]
    fn missing_catalog_reports_and_exits_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let args = UpdateArgs {
            path: dir.path().join("lebensmittel.json"),
            dry_run: false,
        };
        let (code, out) = run(&args);
        assert_eq!(code, EXIT_NOT_FOUND);
        assert!(out.contains("nicht gefunden!"));
        assert!(out.starts_with(&"=".repeat(70)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn changed_products_are_listed_with_old_and_new_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lebensmittel.json");
        std::fs::write(
            &path,
            r#"[{"name": "Bio Tomate rot", "regional_data": {"co2_per_kg": 0.5}}]"#,
        )
        .unwrap();

        let (code, out) = run(&UpdateArgs { path, dry_run: false });
        assert_eq!(code, 0);
        assert!(out.contains(&format!("  ✏️  {:<30}: 0.500 → 0.485 kg/kg", "Bio Tomate rot")));
        assert!(out.contains("💾 Backup erstellt: "));
        assert!(out.contains("lebensmittel_backup_20250307_080001.json"));
        assert!(out.contains("✅ 1 Produkte aktualisiert!"));
    }

    #[test]
    fn current_catalog_reports_unchanged_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lebensmittel.json");
        std::fs::write(
            &path,
            r#"[{"name": "Mehl", "regional_data": {"co2_per_kg": 0.58}}, {"name": "Apfel"}]"#,
        )
        .unwrap();

        let (code, out) = run(&UpdateArgs { path, dry_run: false });
        assert_eq!(code, 0);
        assert!(out.contains("✅ Alle 1 Produkte sind bereits aktuell!"));
        assert!(!out.contains("Backup"));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lebensmittel.json");
        let text = r#"[{"name": "Reis (Risotto)", "regional_data": {"co2_per_kg": 4.0}}]"#;
        std::fs::write(&path, text).unwrap();

        let (code, out) = run(&UpdateArgs {
            path: path.clone(),
            dry_run: true,
        });
        assert_eq!(code, 0);
        assert!(out.contains("Probelauf: 1 Produkte"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lebensmittel.json");
        std::fs::write(&path, "not json").unwrap();

        let mut out = Vec::new();
        let err = run_update_at(&UpdateArgs { path, dry_run: false }, now(), &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("malformed catalog"));
    }
}
