use chrono::Datelike;

use super::model::{
    RawRecord, VehicleRecord, COL_ELECTRIC_RANGE, COL_MAKE, COL_MODEL_YEAR, COL_VEHICLE_TYPE,
};

// ---------------------------------------------------------------------------
// Record normalization: raw rows → typed vehicle records
// ---------------------------------------------------------------------------

/// Convert raw source rows into typed vehicle records.
///
/// A row is admitted iff its `Make` and `Model Year` fields are both present
/// and non-empty. Presence, not parseability, gates inclusion: a surviving
/// row whose year fails to parse gets the current calendar year, and an
/// absent or unparseable electric range degrades to 0.0. Output order equals
/// input order restricted to survivors.
pub fn normalize(rows: &[RawRecord]) -> Vec<VehicleRecord> {
    normalize_with_year(rows, current_year())
}

/// [`normalize`] with the fallback model year injected, so the gate and
/// defaulting stay deterministic under test.
pub fn normalize_with_year(rows: &[RawRecord], fallback_year: i32) -> Vec<VehicleRecord> {
    rows.iter()
        .filter(|row| field_present(row, COL_MAKE) && field_present(row, COL_MODEL_YEAR))
        .map(|row| {
            let manufacturer = row[COL_MAKE].clone();
            let model_year = parse_year(&row[COL_MODEL_YEAR], fallback_year);
            let electric_range_miles = row
                .get(COL_ELECTRIC_RANGE)
                .map(|v| parse_range(v))
                .unwrap_or(0.0);
            let vehicle_type = row
                .get(COL_VEHICLE_TYPE)
                .filter(|v| !v.is_empty())
                .cloned();

            let details = row
                .iter()
                .filter(|(col, _)| {
                    let col = col.as_str();
                    col != COL_MAKE
                        && col != COL_MODEL_YEAR
                        && col != COL_ELECTRIC_RANGE
                        && col != COL_VEHICLE_TYPE
                })
                .map(|(col, val)| (col.clone(), val.clone()))
                .collect();

            VehicleRecord {
                manufacturer,
                model_year,
                electric_range_miles,
                vehicle_type,
                details,
            }
        })
        .collect()
}

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// A field counts as present only when the key exists and the value is
/// non-empty.
fn field_present(row: &RawRecord, column: &str) -> bool {
    row.get(column).is_some_and(|v| !v.is_empty())
}

/// Parse a model year, falling back on any parse failure.
fn parse_year(value: &str, fallback: i32) -> i32 {
    value.trim().parse().unwrap_or(fallback)
}

/// Parse an electric range in miles; unparseable values degrade to 0.0.
fn parse_range(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}
