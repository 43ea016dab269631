// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Data grid**: Remote endpoint, page size and request timeout
//! - **Compositor**: Logo size and export file name
//! - **Diagnostics**: Event buffer capacity

use crate::domain::compositor::logo_size_bounds;
use crate::domain::paging::page_bounds;

// ==========================================================================
// Data Grid Defaults
// ==========================================================================

/// Paginated user directory queried by the data grid.
pub const DEFAULT_ENDPOINT: &str = "https://api.razzakfashion.com/";

/// Records per page on first launch.
pub const DEFAULT_PAGE_SIZE: u32 = page_bounds::DEFAULT_PAGE_SIZE;

/// HTTP timeout for a single page query (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Whether editing the search term jumps back to page 1.
pub const DEFAULT_RESET_PAGE_ON_SEARCH: bool = false;

// ==========================================================================
// Compositor Defaults
// ==========================================================================

/// Logo width when a logo is first placed (in pixels).
pub const DEFAULT_LOGO_SIZE: u32 = logo_size_bounds::DEFAULT;

/// File name every export is written under. Repeated exports overwrite it.
pub const EXPORT_FILE_NAME: &str = "tshirt-design.png";

/// Built-in stage width (in pixels).
pub const STAGE_WIDTH: u32 = 320;

/// Built-in stage height (in pixels).
pub const STAGE_HEIGHT: u32 = 384;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_PAGE_SIZE >= 1);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_LOGO_SIZE >= logo_size_bounds::MIN);
    assert!(DEFAULT_LOGO_SIZE <= logo_size_bounds::MAX);
    assert!(STAGE_WIDTH > logo_size_bounds::MAX);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
