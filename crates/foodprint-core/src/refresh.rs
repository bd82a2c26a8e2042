//! # Refresh Pipeline
//!
//! One complete run: load the catalog, update it in memory, and, if any
//! record changed, write the backup and then the catalog itself.
//!
//! Load failures, and matched records whose `regional_data` has the wrong
//! shape, abort before anything is written. Nothing is retried.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::CatalogError;
use crate::store;
use crate::updater::{self, UpdateReport};

/// Knobs for a refresh run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshOptions {
    /// Compute and report changes without writing any file.
    pub dry_run: bool,
}

/// Result of a refresh run.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshReport {
    /// Number of records in the catalog.
    pub total: usize,
    pub update: UpdateReport,
    /// Backup location, if one was written.
    pub backup: Option<PathBuf>,
    /// Whether the catalog file was rewritten.
    pub saved: bool,
}

impl RefreshReport {
    pub fn updated(&self) -> usize {
        self.update.updated
    }
}

/// Refresh the catalog at `path` against the reference table.
///
/// `now` stamps `last_updated` (its date) and names the backup file.
///
/// When at least one record changed, the backup is written first and the
/// catalog second. The backup receives the same updated catalog that is
/// then saved.
pub fn refresh(
    path: &Path,
    now: NaiveDateTime,
    options: RefreshOptions,
) -> Result<RefreshReport, CatalogError> {
    let mut catalog = store::load(path)?;
    updater::check_matched(&catalog).map_err(|e| CatalogError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let update = updater::update(&mut catalog, now.date());

    let mut report = RefreshReport {
        total: catalog.len(),
        update,
        backup: None,
        saved: false,
    };

    if report.updated() == 0 {
        tracing::info!(unchanged = report.update.unchanged, "catalog already current");
        return Ok(report);
    }
    if options.dry_run {
        tracing::info!(updated = report.updated(), "dry run, nothing written");
        return Ok(report);
    }

    // Post-update state, not the file's previous contents.
    report.backup = Some(store::backup(&catalog, path, now)?);
    store::save(&catalog, path)?;
    report.saved = true;

    tracing::info!(
        path = %path.display(),
        updated = report.updated(),
        "catalog refreshed"
    );
    Ok(report)
}
