//! # Product Matcher
//!
//! Resolves free-text product names to reference-table entries.
//!
//! The name is lowercased and the [`ALIASES`] are scanned in order; the
//! first alias key found anywhere in the name wins. There is no ranking by
//! match length, specificity, or position in the text.

use crate::alias::{AliasEntry, ALIASES};
use crate::emissions::{self, EmissionsEntry};

/// A successful match: the alias that fired and the figures it selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductMatch {
    pub alias: &'static AliasEntry,
    pub entry: &'static EmissionsEntry,
}

impl ProductMatch {
    /// Canonical reference-table name of the matched product.
    pub fn canonical(&self) -> &'static str {
        self.alias.canonical
    }
}

/// Find the first alias occurring in `product_name`, case-insensitively.
///
/// Returns `None` if no alias key occurs in the name. Resolution stops at
/// the first alias found; it does not fall through to later aliases.
pub fn resolve(product_name: &str) -> Option<ProductMatch> {
    let normalized = product_name.to_lowercase();
    let alias = ALIASES.iter().find(|a| normalized.contains(a.key))?;
    let entry = emissions::lookup(alias.canonical)?;
    Some(ProductMatch { alias, entry })
}

/// Emissions figures for `product_name`, or `None` when nothing matches.
pub fn match_product(product_name: &str) -> Option<&'static EmissionsEntry> {
    resolve(product_name).map(|m| m.entry)
}
