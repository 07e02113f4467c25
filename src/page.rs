// ============================================================================
// src/page.rs - pagination with page-index renormalization
// ============================================================================

use crate::core::Record;

/// `(currentPage, itemsPerPage)`, both kept ≥ 1 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
}

impl PageState {
    pub fn new(current_page: usize, items_per_page: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn set_items_per_page(&mut self, size: usize) {
        self.items_per_page = size.max(1);
    }

    /// Enforce `1 ≤ current_page ≤ total_pages(count)`. Every operation
    /// that can shrink the filtered count goes through here.
    pub fn clamp(&mut self, filtered_count: usize) {
        let pages = total_pages(filtered_count, self.items_per_page);
        if self.current_page > pages {
            self.current_page = pages;
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// `max(1, ceil(count / per_page))`: an empty collection still has one
/// (empty) page.
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    let per = items_per_page.max(1);
    count.div_ceil(per).max(1)
}

/// The window of records to render, plus everything a pager widget needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice {
    pub records: Vec<Record>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    /// Absolute index of the first record in the slice ("showing X–Y of Z").
    pub offset: usize,
}

impl PageSlice {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Slice the window `[(page-1)*per, page*per)` out of the ordered
/// collection, clamping `page` first (renormalization happens on every
/// call, never only after mutations).
pub fn paginate(records: &[Record], page: &mut PageState) -> PageSlice {
    page.clamp(records.len());

    let per = page.items_per_page();
    let current = page.current_page();
    let offset = (current - 1) * per;
    let end = (offset + per).min(records.len());
    let window = if offset < records.len() {
        records[offset..end].to_vec()
    } else {
        Vec::new()
    };

    PageSlice {
        records: window,
        current_page: current,
        total_pages: total_pages(records.len(), per),
        total_filtered: records.len(),
        offset,
    }
}
