use super::model::VehicleRecord;

// ---------------------------------------------------------------------------
// Pagination: fixed-size windows over the normalized record set
// ---------------------------------------------------------------------------

/// Rows shown per table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Return the 1-based page `page_index` of `records`, `page_size` rows per
/// page, clipped to bounds. A page index past the end yields an empty slice
/// rather than an error; index 0 is treated as page 1.
pub fn page(records: &[VehicleRecord], page_index: usize, page_size: usize) -> &[VehicleRecord] {
    let start = page_index.saturating_sub(1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = (start + page_size).min(records.len());
    &records[start..end]
}

/// Number of pages needed to show `len` records; 0 when there are none.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}
