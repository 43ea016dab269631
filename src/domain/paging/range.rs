// SPDX-License-Identifier: MPL-2.0
//! The "showing X-Y of Z" arithmetic.
//!
//! Both bounds are derived on demand from the current page, page size and
//! total; nothing here is stored.

use super::newtypes::{PageNumber, PageSize};

/// 1-based index of the first record on `page`.
#[must_use]
pub fn range_start(page: PageNumber, page_size: PageSize) -> u64 {
    (u64::from(page.value()) - 1) * u64::from(page_size.value()) + 1
}

/// 1-based index of the last record on `page`, capped by `total_items`.
#[must_use]
pub fn range_end(page: PageNumber, page_size: PageSize, total_items: u64) -> u64 {
    (u64::from(page.value()) * u64::from(page_size.value())).min(total_items)
}
