//! Page-number pagination for catalog listings.
//!
//! Callers supply an optional 1-based `page` and an optional `limit`. The
//! window arithmetic here is shared by the repository (OFFSET / LIMIT) and
//! by the response metadata (`total`, `page`, `lastPage`).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Page size assumed when the caller omits `limit`.
pub const DEFAULT_LIMIT: i64 = 1;

/// Page value substituted into the skip computation when `page` is omitted.
///
/// Listings have always defaulted the *skip* to zero rather than to page one,
/// so an omitted page and an explicit `page` produce different windows:
/// `skip = page * limit` when present, `skip = 0` when absent.
pub const UNSET_PAGE: i64 = 0;

/// Pagination parameters (`?page=&limit=`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self { page, limit }
    }

    /// Reject non-positive values. Absent values are always valid.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_positive("page", self.page)?;
        validate_positive("limit", self.limit)
    }

    /// Number of matching rows to skip.
    pub fn skip(&self) -> i64 {
        skip_for(self.page, self.limit)
    }

    /// Maximum number of rows to return. `None` means no limit.
    pub fn take(&self) -> Option<i64> {
        self.limit
    }
}

/// Compute the row offset for a listing window.
///
/// This is `page.unwrap_or(UNSET_PAGE) * limit.unwrap_or(DEFAULT_LIMIT)`.
/// Note that an explicit `page = 1` skips one full page; only an omitted page
/// starts at the first row.
pub fn skip_for(page: Option<i64>, limit: Option<i64>) -> i64 {
    page.unwrap_or(UNSET_PAGE).saturating_mul(limit.unwrap_or(DEFAULT_LIMIT))
}

/// `ceil(total / limit)`, with `limit` defaulting to [`DEFAULT_LIMIT`].
pub fn last_page(total: i64, limit: Option<i64>) -> i64 {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);
    let total = total.max(0);
    total / limit + i64::from(total % limit != 0)
}

fn validate_positive(field: &str, value: Option<i64>) -> Result<(), CoreError> {
    match value {
        Some(v) if v < 1 => Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got {v}"
        ))),
        _ => Ok(()),
    }
}

/// Metadata describing a windowed result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Count of all rows matching the visibility predicate.
    pub total: i64,
    /// The requested page, echoed back; absent from the output when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    pub last_page: i64,
}

impl PageMeta {
    pub fn new(total: i64, pagination: &Pagination) -> Self {
        Self {
            total,
            page: pagination.page,
            last_page: last_page(total, pagination.limit),
        }
    }
}

/// A page of rows plus its metadata: `{ "data": [...], "meta": {...} }`.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
