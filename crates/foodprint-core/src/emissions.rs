//! # Emissions Reference Table
//!
//! Per-product carbon footprints from the CONCITO Big Climate Database,
//! compiled into the binary as an ordered static table.
//!
//! All figures are kilograms CO2-equivalent per kilogram of product. The
//! six sub-components are informational detail copied from the source data
//! and do not necessarily sum to `total`.

use serde::Serialize;
use serde_json::{json, Value};

/// Provenance label written to every record the updater touches.
pub const DATA_SOURCE: &str = "CONCITO Big Climate Database v1.2";

/// One row of the reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionsEntry {
    /// Total footprint (kg CO2e / kg).
    pub total: f64,
    /// Sub-component contributions to the total.
    pub breakdown: Co2Breakdown,
}

/// The six sub-components of an emissions figure.
///
/// Field order matches the order the `co2_breakdown` block is written in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Co2Breakdown {
    pub agriculture: f64,
    /// Indirect land-use change.
    pub iluc: f64,
    pub processing: f64,
    pub packaging: f64,
    pub transport: f64,
    pub retail: f64,
}

impl Co2Breakdown {
    /// The `co2_breakdown` object as written into a record.
    pub fn to_json(&self) -> Value {
        json!({
            "agriculture": self.agriculture,
            "iluc": self.iluc,
            "processing": self.processing,
            "packaging": self.packaging,
            "transport": self.transport,
            "retail": self.retail,
        })
    }
}

const fn entry(
    total: f64,
    agriculture: f64,
    iluc: f64,
    processing: f64,
    packaging: f64,
    transport: f64,
    retail: f64,
) -> EmissionsEntry {
    EmissionsEntry {
        total,
        breakdown: Co2Breakdown {
            agriculture,
            iluc,
            processing,
            packaging,
            transport,
            retail,
        },
    }
}

/// Canonical product name to emissions figures, in table order.
///
/// Columns: total, agriculture, iluc, processing, packaging, transport, retail.
pub static REFERENCE_TABLE: &[(&str, EmissionsEntry)] = &[
    // Gemüse
    ("Tomate", entry(0.485, 0.214, 0.014, 0.0, 0.140, 0.110, 0.006)),
    ("Gurke", entry(0.395, 0.154, 0.013, 0.0, 0.140, 0.082, 0.006)),
    ("Salatgurke", entry(0.395, 0.154, 0.013, 0.0, 0.140, 0.082, 0.006)),
    ("Paprika", entry(1.071, 0.610, 0.037, 0.0, 0.140, 0.278, 0.006)),
    ("Aubergine", entry(0.986, 0.513, 0.027, 0.0, 0.140, 0.299, 0.006)),
    ("Zucchini", entry(0.842, 0.482, 0.040, 0.0, 0.065, 0.249, 0.006)),
    ("Kürbis", entry(0.842, 0.482, 0.040, 0.0, 0.065, 0.249, 0.006)),
    ("Kartoffel", entry(0.173, 0.073, 0.010, 0.0, 0.029, 0.055, 0.006)),
    ("Möhre", entry(0.165, 0.074, 0.010, 0.0, 0.029, 0.046, 0.006)),
    ("Zwiebel", entry(0.180, 0.084, 0.010, 0.0, 0.029, 0.051, 0.006)),
    ("Knoblauch", entry(0.180, 0.084, 0.010, 0.0, 0.029, 0.051, 0.006)),
    ("Spargel", entry(0.682, 0.406, 0.062, 0.0, 0.074, 0.134, 0.006)),
    ("Brokkoli", entry(0.463, 0.215, 0.026, 0.0, 0.074, 0.142, 0.006)),
    ("Blumenkohl", entry(0.463, 0.215, 0.026, 0.0, 0.074, 0.142, 0.006)),
    ("Kohlrabi", entry(0.270, 0.097, 0.012, 0.0, 0.074, 0.081, 0.006)),
    ("Rote Bete", entry(0.195, 0.089, 0.012, 0.0, 0.029, 0.059, 0.006)),
    ("Lauch", entry(0.350, 0.144, 0.016, 0.0, 0.074, 0.110, 0.006)),
    ("Spinat", entry(0.363, 0.157, 0.026, 0.0, 0.065, 0.109, 0.006)),
    ("Feldsalat", entry(0.363, 0.157, 0.026, 0.0, 0.065, 0.109, 0.006)),
    ("Radieschen", entry(0.270, 0.097, 0.012, 0.0, 0.074, 0.081, 0.006)),
    ("Mais", entry(0.430, 0.215, 0.025, 0.0, 0.074, 0.110, 0.006)),
    // Obst
    ("Apfel", entry(0.407, 0.184, 0.026, 0.0, 0.140, 0.051, 0.006)),
    ("Birne", entry(0.440, 0.206, 0.033, 0.0, 0.140, 0.055, 0.006)),
    ("Erdbeere", entry(0.653, 0.388, 0.075, 0.0, 0.100, 0.084, 0.006)),
    ("Himbeere", entry(2.070, 1.757, 0.080, 0.0, 0.100, 0.127, 0.006)),
    ("Johannisbeere", entry(1.350, 1.104, 0.076, 0.0, 0.100, 0.064, 0.006)),
    ("Pflaume", entry(0.613, 0.312, 0.054, 0.0, 0.140, 0.101, 0.006)),
    ("Kirsche", entry(0.786, 0.427, 0.087, 0.0, 0.140, 0.126, 0.006)),
    ("Zitrone", entry(0.610, 0.235, 0.031, 0.0, 0.140, 0.198, 0.006)),
    ("Limette", entry(0.720, 0.235, 0.031, 0.0, 0.140, 0.308, 0.006)),
    ("Avocado", entry(0.846, 0.323, 0.041, 0.0, 0.140, 0.336, 0.006)),
    // Kräuter
    ("Basilikum", entry(2.350, 1.912, 0.077, 0.0, 0.065, 0.290, 0.006)),
    ("Petersilie", entry(0.363, 0.157, 0.026, 0.0, 0.065, 0.109, 0.006)),
    ("Schnittlauch", entry(0.350, 0.144, 0.016, 0.0, 0.074, 0.110, 0.006)),
    ("Dill", entry(0.363, 0.157, 0.026, 0.0, 0.065, 0.109, 0.006)),
    // Pilze
    ("Champignon", entry(1.580, 1.228, 0.038, 0.0, 0.140, 0.168, 0.006)),
    // Nüsse
    ("Walnuss", entry(0.700, 0.377, 0.034, 0.036, 0.029, 0.218, 0.006)),
    ("Haselnuss", entry(0.850, 0.465, 0.047, 0.036, 0.029, 0.267, 0.006)),
    ("Cashewkerne", entry(2.750, 1.450, 0.285, 0.520, 0.140, 0.349, 0.006)),
    // Getreide
    ("Mehl", entry(0.580, 0.280, 0.042, 0.120, 0.050, 0.082, 0.006)),
    ("Reis", entry(2.680, 1.892, 0.358, 0.180, 0.050, 0.194, 0.006)),
    ("Quinoa", entry(1.620, 0.815, 0.142, 0.210, 0.050, 0.397, 0.006)),
    // Öle
    ("Olivenöl", entry(3.230, 2.152, 0.312, 0.420, 0.140, 0.200, 0.006)),
    // Gewürze
    ("Ingwer", entry(0.850, 0.320, 0.045, 0.0, 0.140, 0.339, 0.006)),
];

/// Look up a canonical product name (exact, case-sensitive).
pub fn lookup(canonical: &str) -> Option<&'static EmissionsEntry> {
    REFERENCE_TABLE
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, e)| e)
}
