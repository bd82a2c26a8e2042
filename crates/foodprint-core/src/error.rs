//! # Error Types
//!
//! Errors raised while loading and persisting a product catalog. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! A record without `regional_data` is not an error: the updater skips it.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read, parse, or write a catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file does not exist. Nothing was read or written.
    #[error("catalog not found: {}", .path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file exists but is not a JSON array of product records.
    #[error("malformed catalog {}: {reason}", .path.display())]
    Malformed {
        /// Offending file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Reading or writing the file failed.
    #[error("io error on {}: {source}", .path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A catalog value that does not have the expected record shape.
///
/// Raised by [`Catalog::from_value`](crate::record::Catalog::from_value) and
/// [`updater::check_matched`](crate::updater::check_matched) before a file
/// path is known; callers wrap it into [`CatalogError::Malformed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("top-level value must be an array of records")]
    NotAnArray,

    #[error("record {index} is not an object")]
    RecordNotObject { index: usize },

    #[error("record {index} has no string `name`")]
    MissingName { index: usize },

    #[error("record {index} (`{name}`): `regional_data` must be an object")]
    RegionalDataNotObject { index: usize, name: String },

    #[error("record {index} (`{name}`): `co2_per_kg` must be a number")]
    Co2NotNumber { index: usize, name: String },
}

impl CatalogError {
    /// True for the missing-input case, which callers report rather than fail on.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
