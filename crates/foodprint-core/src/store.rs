//! # Catalog Storage
//!
//! Whole-file load and save of the product catalog, plus the timestamped
//! sibling backup written before a save.
//!
//! Files are UTF-8 JSON, two-space indented, with non-ASCII characters
//! written literally. The catalog is serialized completely before the target
//! file is opened, so a serialization failure never leaves a half-written
//! file behind.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::CatalogError;
use crate::record::Catalog;

/// Catalog location used when the caller does not name one.
pub const DEFAULT_CATALOG_PATH: &str = "src/lib/data/lebensmittel.json";

/// Read and validate the catalog at `path`.
///
/// # Errors
///
/// - [`CatalogError::NotFound`] if the file does not exist. No empty catalog
///   is synthesized.
/// - [`CatalogError::Malformed`] if it is not a JSON array of records.
/// - [`CatalogError::Io`] for any other read failure.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| CatalogError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let catalog = Catalog::from_value(value).map_err(|e| CatalogError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), records = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Write the full catalog to `path`, replacing whatever is there.
pub fn save(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    write_catalog(catalog, path)?;
    tracing::debug!(path = %path.display(), records = catalog.len(), "catalog saved");
    Ok(())
}

/// Write `catalog` to the timestamped sibling of `path` and return the
/// backup location.
///
/// The caller passes the catalog it is about to save, so the backup holds
/// the already-updated data rather than the file's previous contents. It is
/// a copy of the new state, not a rollback point.
pub fn backup(
    catalog: &Catalog,
    path: &Path,
    at: NaiveDateTime,
) -> Result<PathBuf, CatalogError> {
    let target = backup_path(path, at);
    write_catalog(catalog, &target)?;
    tracing::debug!(path = %target.display(), "backup written");
    Ok(target)
}

/// Sibling path `<stem>_backup_<YYYYMMDD_HHMMSS>.<ext>` in the same
/// directory as `path`. A path without an extension gets no extension.
pub fn backup_path(path: &Path, at: NaiveDateTime) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stamp = at.format("%Y%m%d_%H%M%S");
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}_backup_{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}_backup_{stamp}"),
    };
    path.with_file_name(file_name)
}

fn write_catalog(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let text = catalog.to_pretty_json().map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    std::fs::write(path, text).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
