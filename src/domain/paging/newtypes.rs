// SPDX-License-Identifier: MPL-2.0
//! Pagination newtypes.
//!
//! Page numbers and page sizes are 1-based and can never hold zero; the
//! clamp happens at construction so no call site has to remember it.

// =============================================================================
// Page Bounds
// =============================================================================

/// Lower bounds and defaults for paging values.
pub mod page_bounds {
    /// First page number.
    pub const FIRST_PAGE: u32 = 1;
    /// Smallest accepted page size.
    pub const MIN_PAGE_SIZE: u32 = 1;
    /// Page size used until the user or the service says otherwise.
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
}

// =============================================================================
// PageNumber
// =============================================================================

/// 1-based page number.
///
/// # Example
///
/// ```
/// use iced_vitrine::domain::paging::PageNumber;
///
/// assert_eq!(PageNumber::new(0).value(), 1);
/// assert_eq!(PageNumber::new(7).value(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// Creates a page number, clamping zero to the first page.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.max(page_bounds::FIRST_PAGE))
    }

    /// The first page.
    #[must_use]
    pub fn first() -> Self {
        Self(page_bounds::FIRST_PAGE)
    }

    /// Returns the raw page number.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns whether this is the first page.
    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == page_bounds::FIRST_PAGE
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::first()
    }
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of records per page, never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a page size, clamping values below 1.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.max(page_bounds::MIN_PAGE_SIZE))
    }

    /// Builds a page size from signed user input, clamping anything below 1.
    #[must_use]
    pub fn from_input(value: i64) -> Self {
        Self::new(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
    }

    /// Returns the raw page size.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_bounds::DEFAULT_PAGE_SIZE)
    }
}

// =============================================================================
// RequestId
// =============================================================================

/// Monotonic tag attached to each outgoing page query.
///
/// Only the response carrying the most recently issued id is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the id that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Returns the raw sequence number.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

// =============================================================================
// Tests
// =============================================================================
