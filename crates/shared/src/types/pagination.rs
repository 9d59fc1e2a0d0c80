//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of items per page.
pub const DEFAULT_LIMIT: u32 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-indexed).
    #[serde(default)]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    /// Creates a page request.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Calculates the number of items to skip.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }

    /// Returns the maximum number of items in the page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.limit)
    }
}

/// A page of items plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in the current page.
    pub items: Vec<T>,
    /// Pagination metadata.
    #[serde(rename = "_meta")]
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Number of items in this page.
    pub elements: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Requested page (0-indexed).
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of items across all pages.
    pub total_elements: u64,
}

impl PageMeta {
    /// Builds metadata for a page holding `elements` items out of `total_elements`.
    ///
    /// `total_pages` is `ceil(total_elements / page_size)`, so an empty
    /// collection has zero pages.
    #[must_use]
    pub fn new(elements: usize, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(request.limit().max(1));

        Self {
            elements: u32::try_from(elements).unwrap_or(u32::MAX),
            page_size: request.limit,
            page: request.page,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
            total_elements,
        }
    }
}

impl<T> Page<T> {
    /// Assembles a page from the items returned by the store and the total
    /// element count the store reported alongside them.
    #[must_use]
    pub fn assemble(items: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let meta = PageMeta::new(items.len(), request, total_elements);
        Self { items, meta }
    }

    /// Converts the items, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
