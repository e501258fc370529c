use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Source column names
// ---------------------------------------------------------------------------

/// Column names as they appear in the registry export header.
pub const COL_MAKE: &str = "Make";
pub const COL_MODEL_YEAR: &str = "Model Year";
pub const COL_ELECTRIC_RANGE: &str = "Electric Range";
pub const COL_VEHICLE_TYPE: &str = "Electric Vehicle Type";

// ---------------------------------------------------------------------------
// RawRecord – one unvalidated row from the source
// ---------------------------------------------------------------------------

/// A loosely-typed source row: column name → cell text.
///
/// An absent key and an empty-string value both count as "missing" for the
/// normalizer's presence gate, but loaders keep the distinction (CSV stores
/// empty cells as `""`, JSON/Parquet nulls omit the key entirely).
pub type RawRecord = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// VehicleRecord – one normalized row
// ---------------------------------------------------------------------------

/// A single vehicle surviving normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    /// Manufacturer name; always non-empty.
    pub manufacturer: String,
    /// Model year; defaulted to the current calendar year when the source
    /// value is present but unparseable.
    pub model_year: i32,
    /// Electric range in miles; 0.0 when the source value is absent or
    /// unparseable.
    pub electric_range_miles: f64,
    /// Vehicle type category (e.g. BEV / PHEV); `None` when the source
    /// column is absent or empty.
    pub vehicle_type: Option<String>,
    /// Remaining source columns (model name, VIN, DOL id, census tract, …)
    /// carried through untouched for display.
    pub details: BTreeMap<String, String>,
}

impl VehicleRecord {
    /// Look up a passthrough display column, empty string when not recorded.
    pub fn detail(&self, column: &str) -> &str {
        self.details.get(column).map(String::as_str).unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// VehicleDataset – the complete normalized population
// ---------------------------------------------------------------------------

/// The full normalized record set, in source order, with the ordered list of
/// passthrough columns observed across it.
#[derive(Debug, Clone, Default)]
pub struct VehicleDataset {
    /// All vehicles (rows), source order preserved.
    pub records: Vec<VehicleRecord>,
    /// Passthrough column names in first-seen order (drives the table view).
    pub detail_columns: Vec<String>,
}

impl VehicleDataset {
    /// Build the column index from normalized records.
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        let mut detail_columns: Vec<String> = Vec::new();
        for rec in &records {
            for col in rec.details.keys() {
                if !detail_columns.iter().any(|c| c == col) {
                    detail_columns.push(col.clone());
                }
            }
        }
        VehicleDataset {
            records,
            detail_columns,
        }
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(details: &[(&str, &str)]) -> VehicleRecord {
        VehicleRecord {
            manufacturer: "TESLA".to_string(),
            model_year: 2020,
            electric_range_miles: 250.0,
            vehicle_type: None,
            details: details
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn detail_columns_keep_first_seen_order() {
        let ds = VehicleDataset::from_records(vec![
            rec(&[("Model", "Model 3"), ("VIN", "5YJ3")]),
            rec(&[("County", "King"), ("Model", "Model Y")]),
        ]);
        // BTreeMap iteration is alphabetical per record; County only shows
        // up with the second record and lands after the first record's set.
        assert_eq!(ds.detail_columns, vec!["Model", "VIN", "County"]);
    }

    #[test]
    fn detail_lookup_defaults_to_empty() {
        let r = rec(&[("Model", "Leaf")]);
        assert_eq!(r.detail("Model"), "Leaf");
        assert_eq!(r.detail("VIN"), "");
    }
}
