//! Pagination resolution
//!
//! Every paginated list operation uses the same contract: a 1-based page
//! number and a page size, both falling back to defaults when absent or
//! non-positive, resolved into a limit/offset pair before the query runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default page number when the caller sends none (or a non-positive one)
pub const DEFAULT_PAGE: i32 = 1;
/// Default page size when the caller sends none (or a non-positive one)
pub const DEFAULT_LIMIT: i32 = 20;

/// Errors from total-page computation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PagingError {
    /// The page size must be positive to derive a page count
    #[error("limit must be positive, got {0}")]
    InvalidLimit(i32),

    /// The page count does not fit the 32-bit wire field
    #[error("page count {0} exceeds the representable range")]
    PageCountOverflow(i64),
}

/// Pagination half of a list request
///
/// Zero (the wire default for omitted fields) is non-positive, so missing
/// values fall back to the same defaults as explicit zeros.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// 1-based page number
    pub page: i32,
    /// Page size
    pub limit: i32,
}

impl PageRequest {
    /// Page number with the default applied for non-positive input
    pub fn effective_page(&self) -> i32 {
        if self.page > 0 {
            self.page
        } else {
            DEFAULT_PAGE
        }
    }

    /// Page size with the default applied for non-positive input
    pub fn effective_limit(&self) -> i32 {
        if self.limit > 0 {
            self.limit
        } else {
            DEFAULT_LIMIT
        }
    }
}

/// A resolved limit/offset pair, ready for a repository query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    pub limit: i32,
    pub offset: i32,
}

impl PageSlice {
    /// Resolves an optional page request into a limit/offset pair.
    ///
    /// A missing request, or one with non-positive fields, falls back to
    /// page 1 with a limit of 20. The offset is `(page - 1) * limit`,
    /// saturating at `i32::MAX` so an absurd page number lands past the
    /// end of the data instead of wrapping.
    pub fn resolve(request: Option<&PageRequest>) -> Self {
        let (page, limit) = match request {
            Some(r) => (r.effective_page(), r.effective_limit()),
            None => (DEFAULT_PAGE, DEFAULT_LIMIT),
        };

        Self {
            limit,
            offset: (page - 1).saturating_mul(limit),
        }
    }
}

/// Pagination half of a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: i32,
    pub limit: i32,
    pub total_items: i64,
    pub total_pages: i32,
}

impl PageInfo {
    /// Builds the page info for a non-empty result set.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::InvalidLimit`] when the resolved limit is not
    /// positive.
    pub fn for_count(
        request: Option<&PageRequest>,
        total_items: i64,
    ) -> Result<Self, PagingError> {
        let slice = PageSlice::resolve(request);
        Ok(Self {
            current_page: request.map_or(DEFAULT_PAGE, PageRequest::effective_page),
            limit: slice.limit,
            total_items,
            total_pages: total_pages(total_items, slice.limit)?,
        })
    }

    /// The all-zero page info returned when a count comes back empty and
    /// the paged fetch is skipped entirely.
    pub fn empty(request: Option<&PageRequest>) -> Self {
        let slice = PageSlice::resolve(request);
        Self {
            current_page: request.map_or(DEFAULT_PAGE, PageRequest::effective_page),
            limit: slice.limit,
            total_items: 0,
            total_pages: 0,
        }
    }
}

/// Computes `ceil(total_items / limit)` without going through floats.
///
/// # Errors
///
/// Returns [`PagingError::InvalidLimit`] for a non-positive limit, and
/// [`PagingError::PageCountOverflow`] when the count does not fit `i32`.
pub fn total_pages(total_items: i64, limit: i32) -> Result<i32, PagingError> {
    if limit <= 0 {
        return Err(PagingError::InvalidLimit(limit));
    }

    let limit = i64::from(limit);
    let mut pages = total_items / limit;
    if total_items % limit != 0 {
        pages += 1;
    }

    i32::try_from(pages).map_err(|_| PagingError::PageCountOverflow(pages))
}
