//! Limit/offset pagination.
//!
//! A [`PageRequest`] is validated once at the edge; after that the offset
//! arithmetic can't fail and out-of-range pages simply come back empty.
//!
//! The store applies the window in SQL (`LIMIT ? OFFSET ?`). [`paginate`] is
//! the same window over an in-memory slice; the database tests hold the two
//! against each other.

use crate::error::PaginationError;
use serde::Serialize;

/// A validated `(page, limit)` pair. Page 1 is the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Validate raw request parameters.
    ///
    /// # Errors
    /// Returns `PaginationError` if `page < 1`, `limit < 1` or
    /// `limit > max_limit`.
    pub fn new(page: i64, limit: i64, max_limit: u32) -> Result<Self, PaginationError> {
        let page = u32::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(PaginationError::InvalidPage(page))?;
        let limit = u32::try_from(limit)
            .ok()
            .filter(|l| (1..=max_limit).contains(l))
            .ok_or(PaginationError::InvalidLimit {
                limit,
                max: max_limit,
            })?;
        Ok(Self { page, limit })
    }

    /// Requested page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items skipped before this page: `(page - 1) * limit`.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// Return exactly the items in `[offset, offset + limit)`, clamped to the
/// slice. Pages past the end yield an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], request: PageRequest) -> &[T] {
    let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    if start >= items.len() {
        return &[];
    }
    let end = start
        .saturating_add(request.limit() as usize)
        .min(items.len());
    &items[start..end]
}
