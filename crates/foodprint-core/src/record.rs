//! # Product Records
//!
//! The catalog is kept as order-preserving JSON objects rather than a fixed
//! struct, so fields this crate does not know about (seasons, regions,
//! nutrition, ...) are written back exactly as they were read, in the same
//! key order.
//!
//! Construction only checks that every record is an object with a string
//! `name`. The `regional_data` block is checked by
//! [`ProductRecord::check_regional_data`], and only for records the updater
//! will touch; other records pass through whatever they contain.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ShapeError;

/// Field names inside a record.
pub mod keys {
    pub const NAME: &str = "name";
    /// The nested block the updater reads and writes.
    pub const REGIONAL_DATA: &str = "regional_data";
    pub const CO2_PER_KG: &str = "co2_per_kg";
    pub const CO2_BREAKDOWN: &str = "co2_breakdown";
    pub const DATA_SOURCE: &str = "data_source";
    pub const LAST_UPDATED: &str = "last_updated";
}

/// One food product from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductRecord(Map<String, Value>);

impl ProductRecord {
    fn from_value(index: usize, value: Value) -> Result<Self, ShapeError> {
        let Value::Object(fields) = value else {
            return Err(ShapeError::RecordNotObject { index });
        };
        if !matches!(fields.get(keys::NAME), Some(Value::String(_))) {
            return Err(ShapeError::MissingName { index });
        }
        Ok(Self(fields))
    }

    /// Check that `regional_data`, if present, is an object and that its
    /// `co2_per_kg`, if present, is a number. `index` is only used for the
    /// error.
    pub fn check_regional_data(&self, index: usize) -> Result<(), ShapeError> {
        let name = || self.name().to_string();
        match self.0.get(keys::REGIONAL_DATA) {
            None => Ok(()),
            Some(Value::Object(regional)) => match regional.get(keys::CO2_PER_KG) {
                Some(co2) if !co2.is_number() => Err(ShapeError::Co2NotNumber {
                    index,
                    name: name(),
                }),
                _ => Ok(()),
            },
            Some(_) => Err(ShapeError::RegionalDataNotObject {
                index,
                name: name(),
            }),
        }
    }

    /// Display name, case preserved.
    pub fn name(&self) -> &str {
        self.0.get(keys::NAME).and_then(Value::as_str).unwrap_or("")
    }

    /// The `regional_data` block, if the record has one.
    pub fn regional_data(&self) -> Option<&Map<String, Value>> {
        self.0.get(keys::REGIONAL_DATA).and_then(Value::as_object)
    }

    pub fn regional_data_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.0.get_mut(keys::REGIONAL_DATA).and_then(Value::as_object_mut)
    }

    /// Current footprint. `None` when there is no `regional_data` block;
    /// a block without `co2_per_kg` reads as `0.0`.
    pub fn co2_per_kg(&self) -> Option<f64> {
        self.regional_data()
            .map(|r| r.get(keys::CO2_PER_KG).and_then(Value::as_f64).unwrap_or(0.0))
    }

    /// Raw field access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// An ordered collection of product records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<ProductRecord>,
}

impl Catalog {
    /// Build a catalog from a parsed JSON value, validating record shape.
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        let Value::Array(items) = value else {
            return Err(ShapeError::NotAnArray);
        };
        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| ProductRecord::from_value(index, item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    /// Serialize as two-space indented JSON with non-ASCII characters
    /// written literally and no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [ProductRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(value: Value) -> Catalog {
        Catalog::from_value(value).unwrap()
    }

    #[test]
    fn accessors_read_record_fields() {
        let c = catalog(json!([
            {"name": "Bio Tomate rot", "regional_data": {"co2_per_kg": 0.5}}
        ]));
        let r = &c.records()[0];
        assert_eq!(r.name(), "Bio Tomate rot");
        assert_eq!(r.co2_per_kg(), Some(0.5));
        assert!(r.regional_data().is_some());
    }

    #[test]
    fn missing_co2_reads_as_zero() {
        let c = catalog(json!([{"name": "Apfel", "regional_data": {"origin": "DE"}}]));
        assert_eq!(c.records()[0].co2_per_kg(), Some(0.0));
    }

    #[test]
    fn integer_co2_is_accepted() {
        let c = catalog(json!([{"name": "Apfel", "regional_data": {"co2_per_kg": 1}}]));
        assert_eq!(c.records()[0].co2_per_kg(), Some(1.0));
    }

    #[test]
    fn record_without_regional_data() {
        let c = catalog(json!([{"name": "Apfel"}]));
        assert_eq!(c.records()[0].co2_per_kg(), None);
        assert!(c.records()[0].regional_data().is_none());
    }

    #[test]
    fn rejects_non_array() {
        assert_eq!(
            Catalog::from_value(json!({"name": "Apfel"})),
            Err(ShapeError::NotAnArray)
        );
    }

    #[test]
    fn rejects_non_object_record() {
        assert_eq!(
            Catalog::from_value(json!([{"name": "Apfel"}, 42])),
            Err(ShapeError::RecordNotObject { index: 1 })
        );
    }

    #[test]
    fn rejects_missing_or_non_string_name() {
        assert_eq!(
            Catalog::from_value(json!([{"title": "Apfel"}])),
            Err(ShapeError::MissingName { index: 0 })
        );
        assert_eq!(
            Catalog::from_value(json!([{"name": 7}])),
            Err(ShapeError::MissingName { index: 0 })
        );
    }

    #[test]
    fn construction_accepts_any_regional_data() {
        let c = catalog(json!([
            {"name": "Mysterious Fruit", "regional_data": null},
            {"name": "Ananas", "regional_data": {"co2_per_kg": null}}
        ]));
        assert_eq!(c.records()[0].co2_per_kg(), None);
        assert_eq!(c.records()[1].co2_per_kg(), Some(0.0));
    }

    #[test]
    fn check_regional_data_rejects_bad_shapes() {
        let c = catalog(json!([
            {"name": "Apfel", "regional_data": [1, 2]},
            {"name": "Birne", "regional_data": null},
            {"name": "Kirsche", "regional_data": {"co2_per_kg": "0.4"}},
            {"name": "Pflaume", "regional_data": {"co2_per_kg": null}}
        ]));
        let r = c.records();
        assert!(matches!(
            r[0].check_regional_data(0),
            Err(ShapeError::RegionalDataNotObject { index: 0, .. })
        ));
        assert!(matches!(
            r[1].check_regional_data(1),
            Err(ShapeError::RegionalDataNotObject { index: 1, .. })
        ));
        assert_eq!(
            r[2].check_regional_data(2),
            Err(ShapeError::Co2NotNumber { index: 2, name: "Kirsche".into() })
        );
        assert!(matches!(
            r[3].check_regional_data(3),
            Err(ShapeError::Co2NotNumber { index: 3, .. })
        ));
    }

    #[test]
    fn check_regional_data_accepts_valid_shapes() {
        let c = catalog(json!([
            {"name": "Apfel"},
            {"name": "Birne", "regional_data": {"origin": "DE"}},
            {"name": "Kirsche", "regional_data": {"co2_per_kg": 0.786}}
        ]));
        for (i, r) in c.records().iter().enumerate() {
            assert_eq!(r.check_regional_data(i), Ok(()));
        }
    }

    #[test]
    fn pretty_json_preserves_key_order_and_umlauts() {
        let text = r#"[{"name":"Kürbis","saison":{"monate":[9,10]},"id":3}]"#;
        let c = catalog(serde_json::from_str(text).unwrap());
        let out = c.to_pretty_json().unwrap();
        assert_eq!(
            out,
            "[\n  {\n    \"name\": \"Kürbis\",\n    \"saison\": {\n      \"monate\": [\n        9,\n        10\n      ]\n    },\n    \"id\": 3\n  }\n]"
        );
    }

    #[test]
    fn empty_catalog() {
        let c = catalog(json!([]));
        assert!(c.is_empty());
        assert_eq!(c.to_pretty_json().unwrap(), "[]");
    }
}
