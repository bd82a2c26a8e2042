//! # foodprint-core: CO2 Reference Data for the Food Catalog
//!
//! Keeps the per-product carbon footprints in `lebensmittel.json` in line
//! with the CONCITO Big Climate Database. The reference figures and the
//! aliases that map catalog names onto them are compiled in; a refresh is a
//! single synchronous pass over the catalog.
//!
//! ## Pipeline
//!
//! 1. [`store::load`] reads and validates the whole catalog.
//! 2. [`updater::update`] resolves each record name through
//!    [`matcher::resolve`] and rewrites the emissions fields of records whose
//!    stored value is off by more than [`updater::CHANGE_TOLERANCE`].
//! 3. If anything changed, [`store::backup`] and then [`store::save`] write
//!    the updated catalog.
//!
//! [`refresh::refresh`] runs all three.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Alias order is significant and must not be re-sorted.

pub mod alias;
pub mod emissions;
pub mod error;
pub mod matcher;
pub mod record;
pub mod refresh;
pub mod store;
pub mod updater;

pub use alias::{AliasEntry, ALIASES};
pub use emissions::{Co2Breakdown, EmissionsEntry, DATA_SOURCE, REFERENCE_TABLE};
pub use error::{CatalogError, ShapeError};
pub use matcher::{match_product, resolve, ProductMatch};
pub use record::{Catalog, ProductRecord};
pub use refresh::{refresh, RefreshOptions, RefreshReport};
pub use store::DEFAULT_CATALOG_PATH;
pub use updater::{update, Change, UpdateReport, CHANGE_TOLERANCE};
