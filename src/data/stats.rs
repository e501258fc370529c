use indexmap::IndexMap;
use serde::Serialize;

use super::model::VehicleRecord;
use super::normalize::current_year;

// ---------------------------------------------------------------------------
// SummaryStatistics – scalar aggregates over the normalized population
// ---------------------------------------------------------------------------

/// Scalar summary of the full normalized record set. Pure derivation;
/// recomputed wholesale whenever the dataset changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub total_vehicles: usize,
    /// Mean electric range in miles; 0.0 for an empty population.
    pub average_electric_range: f64,
    /// Sum of electric ranges in miles.
    pub total_electric_range: f64,
    /// Current year minus the mean model year; 0.0 for an empty population.
    pub average_vehicle_age: f64,
    /// Manufacturer with the highest record count; ties go to the one seen
    /// first in record order. "N/A" for an empty population.
    pub most_common_manufacturer: String,
}

impl Default for SummaryStatistics {
    fn default() -> Self {
        SummaryStatistics {
            total_vehicles: 0,
            average_electric_range: 0.0,
            total_electric_range: 0.0,
            average_vehicle_age: 0.0,
            most_common_manufacturer: "N/A".to_string(),
        }
    }
}

/// Compute summary statistics over the normalized record set.
pub fn summarize(records: &[VehicleRecord]) -> SummaryStatistics {
    summarize_with_year(records, current_year())
}

/// [`summarize`] with the reference year injected for deterministic tests.
pub fn summarize_with_year(records: &[VehicleRecord], year: i32) -> SummaryStatistics {
    let total_vehicles = records.len();
    if total_vehicles == 0 {
        return SummaryStatistics::default();
    }

    let total_electric_range: f64 = records.iter().map(|r| r.electric_range_miles).sum();
    let year_sum: f64 = records.iter().map(|r| f64::from(r.model_year)).sum();
    let n = total_vehicles as f64;

    SummaryStatistics {
        total_vehicles,
        average_electric_range: total_electric_range / n,
        total_electric_range,
        average_vehicle_age: f64::from(year) - year_sum / n,
        most_common_manufacturer: most_common_manufacturer(records),
    }
}

/// Highest-count manufacturer; strict `>` over an insertion-ordered count
/// map keeps the first-encountered one on ties.
fn most_common_manufacturer(records: &[VehicleRecord]) -> String {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for rec in records {
        *counts.entry(rec.manufacturer.as_str()).or_insert(0) += 1;
    }

    let mut best: (&str, usize) = ("N/A", 0);
    for (make, count) in counts {
        if count > best.1 {
            best = (make, count);
        }
    }
    best.0.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const YEAR: i32 = 2024;

    fn rec(make: &str, year: i32, range: f64) -> VehicleRecord {
        VehicleRecord {
            manufacturer: make.to_string(),
            model_year: year,
            electric_range_miles: range,
            vehicle_type: None,
            details: BTreeMap::new(),
        }
    }

    #[test]
    fn empty_population_yields_defaults() {
        let s = summarize_with_year(&[], YEAR);
        assert_eq!(s.total_vehicles, 0);
        assert_eq!(s.average_electric_range, 0.0);
        assert_eq!(s.total_electric_range, 0.0);
        assert_eq!(s.average_vehicle_age, 0.0);
        assert_eq!(s.most_common_manufacturer, "N/A");
    }

    #[test]
    fn averages_and_totals_are_consistent() {
        let records = vec![
            rec("TESLA", 2020, 250.0),
            rec("NISSAN", 2018, 150.0),
            rec("TESLA", 2022, 300.0),
        ];
        let s = summarize_with_year(&records, YEAR);
        assert_eq!(s.total_vehicles, 3);
        assert_eq!(s.total_electric_range, 700.0);
        let mean = s.total_electric_range / s.total_vehicles as f64;
        assert!((s.average_electric_range - mean).abs() < 1e-9);
    }

    #[test]
    fn vehicle_age_is_year_minus_mean_model_year() {
        let records = vec![rec("A", 2020, 0.0), rec("B", 2022, 0.0)];
        let s = summarize_with_year(&records, YEAR);
        assert!((s.average_vehicle_age - 3.0).abs() < 1e-9);
    }

    #[test]
    fn most_common_make_wins_by_count() {
        let records = vec![
            rec("NISSAN", 2020, 0.0),
            rec("TESLA", 2020, 0.0),
            rec("TESLA", 2021, 0.0),
        ];
        let s = summarize_with_year(&records, YEAR);
        assert_eq!(s.most_common_manufacturer, "TESLA");
    }

    #[test]
    fn ties_go_to_first_encountered_make() {
        let records = vec![
            rec("ZEBRA MOTORS", 2020, 0.0),
            rec("ACME EV", 2020, 0.0),
            rec("ACME EV", 2021, 0.0),
            rec("ZEBRA MOTORS", 2021, 0.0),
        ];
        let s = summarize_with_year(&records, YEAR);
        // Both have two records; ZEBRA MOTORS appeared first.
        assert_eq!(s.most_common_manufacturer, "ZEBRA MOTORS");
    }
}
