use indexmap::IndexMap;
use serde::Serialize;

use super::model::VehicleRecord;

// ---------------------------------------------------------------------------
// DistributionEntry – one category in a grouped count
// ---------------------------------------------------------------------------

/// One category of a grouped distribution. `percentage` is populated only
/// for dimensions that define a percentage view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry {
    pub category: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// How many manufacturers the ranked distribution keeps.
pub const TOP_MANUFACTURERS: usize = 10;

// ---------------------------------------------------------------------------
// Manufacturer distribution – ranked, truncated, no percentages
// ---------------------------------------------------------------------------

/// Group the population by manufacturer, rank descending by count, and keep
/// the top [`TOP_MANUFACTURERS`]. The sort is stable, so manufacturers with
/// equal counts stay in first-seen order and truncation drops the
/// later-seen ones.
pub fn manufacturer_distribution(records: &[VehicleRecord]) -> Vec<DistributionEntry> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for rec in records {
        *counts.entry(rec.manufacturer.as_str()).or_insert(0) += 1;
    }

    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(make, count)| DistributionEntry {
            category: make.to_string(),
            count,
            percentage: None,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(TOP_MANUFACTURERS);
    entries
}

// ---------------------------------------------------------------------------
// Vehicle-type distribution – encounter order, with percentages
// ---------------------------------------------------------------------------

/// Group the population by vehicle type, in encounter order, skipping
/// records with no recorded type. The percentage denominator is the FULL
/// population, not the typed subset, so percentages sum below 100% whenever
/// some vehicles carry no type; that matches the summary-card semantics
/// upstream of this view.
pub fn type_distribution(records: &[VehicleRecord]) -> Vec<DistributionEntry> {
    let total = records.len();
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for rec in records {
        if let Some(vtype) = rec.vehicle_type.as_deref() {
            *counts.entry(vtype).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(vtype, count)| DistributionEntry {
            category: vtype.to_string(),
            count,
            percentage: Some(round_to_tenth(count as f64 / total as f64 * 100.0)),
        })
        .collect()
}

/// Round to one decimal place, halves away from zero (`12.25` → `12.3`).
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn rec(make: &str, vtype: Option<&str>) -> VehicleRecord {
        VehicleRecord {
            manufacturer: make.to_string(),
            model_year: 2020,
            electric_range_miles: 0.0,
            vehicle_type: vtype.map(str::to_string),
            details: BTreeMap::new(),
        }
    }

    #[test]
    fn manufacturers_rank_descending_by_count() {
        let records = vec![
            rec("NISSAN", None),
            rec("TESLA", None),
            rec("TESLA", None),
            rec("KIA", None),
            rec("TESLA", None),
            rec("KIA", None),
        ];
        let dist = manufacturer_distribution(&records);
        let counts: Vec<usize> = dist.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![3, 2, 1]);
        assert_eq!(dist[0].category, "TESLA");
        assert!(dist.iter().all(|e| e.percentage.is_none()));
        for pair in counts.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn eleven_singleton_makes_truncate_to_ten_stably() {
        let makes: Vec<String> = (0..11).map(|i| format!("MAKE-{i:02}")).collect();
        let records: Vec<VehicleRecord> = makes.iter().map(|m| rec(m, None)).collect();
        let dist = manufacturer_distribution(&records);
        assert_eq!(dist.len(), TOP_MANUFACTURERS);
        // All counts tie at 1, so the stable ranking keeps insertion order
        // and the eleventh-inserted make is the one dropped.
        let kept: Vec<&str> = dist.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(kept, makes[..10].iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn typeless_records_shrink_counts_but_not_the_denominator() {
        let records = vec![
            rec("A", Some("Battery Electric Vehicle (BEV)")),
            rec("B", Some("Battery Electric Vehicle (BEV)")),
            rec("C", Some("Plug-in Hybrid Electric Vehicle (PHEV)")),
            rec("D", None),
        ];
        let dist = type_distribution(&records);
        assert_eq!(dist.len(), 2);
        let counted: usize = dist.iter().map(|e| e.count).sum();
        assert!(counted < records.len());
        // Percentages are over all four records: 2/4 and 1/4.
        assert_eq!(dist[0].percentage, Some(50.0));
        assert_eq!(dist[1].percentage, Some(25.0));
    }

    #[test]
    fn type_categories_appear_in_encounter_order() {
        let records = vec![
            rec("A", Some("PHEV")),
            rec("B", Some("BEV")),
            rec("C", Some("PHEV")),
        ];
        let dist = type_distribution(&records);
        let cats: Vec<&str> = dist.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(cats, vec!["PHEV", "BEV"]);
    }

    #[test]
    fn percentages_round_halves_away_from_zero() {
        // 1 of 8 = 12.5% exactly; half away from zero keeps the 5.
        let mut records = vec![rec("A", Some("BEV"))];
        records.extend((0..7).map(|_| rec("B", None)));
        let dist = type_distribution(&records);
        assert_eq!(dist[0].percentage, Some(12.5));

        // 1 of 3 = 33.333…% → 33.3.
        let records = vec![
            rec("A", Some("BEV")),
            rec("B", Some("PHEV")),
            rec("C", Some("PHEV")),
        ];
        let dist = type_distribution(&records);
        assert_eq!(dist[0].percentage, Some(33.3));
        assert_eq!(dist[1].percentage, Some(66.7));

        assert_eq!(round_to_tenth(12.25), 12.3);
        assert_eq!(round_to_tenth(-12.25), -12.3);
    }

    #[test]
    fn empty_population_produces_empty_distributions() {
        assert!(manufacturer_distribution(&[]).is_empty());
        assert!(type_distribution(&[]).is_empty());
    }
}
