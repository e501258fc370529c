use crate::color::ColorMap;
use crate::data::distribution::{manufacturer_distribution, type_distribution, DistributionEntry};
use crate::data::model::{VehicleDataset, VehicleRecord};
use crate::data::page::{page, total_pages, DEFAULT_PAGE_SIZE};
use crate::data::stats::{summarize, SummaryStatistics};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded population (None until the user opens a file).
    pub dataset: Option<VehicleDataset>,

    /// Summary statistics over the full population (cached).
    pub summary: SummaryStatistics,

    /// Top manufacturers by record count (cached).
    pub make_distribution: Vec<DistributionEntry>,

    /// Vehicle-type breakdown with percentages (cached).
    pub type_distribution: Vec<DistributionEntry>,

    /// Colours for the manufacturer chart, in rank order.
    pub make_colors: ColorMap,

    /// Colours for the type chart, in encounter order.
    pub type_colors: ColorMap,

    /// 1-based page shown in the vehicle table.
    pub current_page: usize,

    /// Rows per table page.
    pub page_size: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            summary: SummaryStatistics::default(),
            make_distribution: Vec::new(),
            type_distribution: Vec::new(),
            make_colors: ColorMap::default(),
            type_colors: ColorMap::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Install a newly loaded population and recompute every derived
    /// product from it. Derivations are full recomputations over the new
    /// snapshot; nothing is updated incrementally.
    pub fn set_dataset(&mut self, dataset: VehicleDataset) {
        self.summary = summarize(&dataset.records);
        self.make_distribution = manufacturer_distribution(&dataset.records);
        self.type_distribution = type_distribution(&dataset.records);
        self.make_colors =
            ColorMap::new(self.make_distribution.iter().map(|e| e.category.as_str()));
        self.type_colors =
            ColorMap::new(self.type_distribution.iter().map(|e| e.category.as_str()));

        self.current_page = 1;
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Records on the current table page.
    pub fn page_records(&self) -> &[VehicleRecord] {
        match &self.dataset {
            Some(ds) => page(&ds.records, self.current_page, self.page_size),
            None => &[],
        }
    }

    /// Total table pages for the loaded population (0 when empty).
    pub fn total_pages(&self) -> usize {
        self.dataset
            .as_ref()
            .map(|ds| total_pages(ds.len(), self.page_size))
            .unwrap_or(0)
    }

    /// Advance one page; a no-op on the last page.
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    /// Go back one page; a no-op on page 1.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn dataset(n: usize) -> VehicleDataset {
        let records = (0..n)
            .map(|i| VehicleRecord {
                manufacturer: format!("MAKE-{i}"),
                model_year: 2020,
                electric_range_miles: 100.0,
                vehicle_type: None,
                details: BTreeMap::new(),
            })
            .collect();
        VehicleDataset::from_records(records)
    }

    #[test]
    fn installing_a_dataset_recomputes_derived_products() {
        let mut state = AppState::default();
        state.current_page = 7;
        state.set_dataset(dataset(25));
        assert_eq!(state.summary.total_vehicles, 25);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page_records().len(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut state = AppState::default();
        state.set_dataset(dataset(25));

        state.prev_page();
        assert_eq!(state.current_page, 1);

        state.next_page();
        state.next_page();
        assert_eq!(state.current_page, 3);
        state.next_page();
        assert_eq!(state.current_page, 3);
        assert_eq!(state.page_records().len(), 5);
    }

    #[test]
    fn empty_dataset_has_no_pages() {
        let mut state = AppState::default();
        state.set_dataset(dataset(0));
        assert_eq!(state.total_pages(), 0);
        assert!(state.page_records().is_empty());
        state.next_page();
        assert_eq!(state.current_page, 1);
    }
}
