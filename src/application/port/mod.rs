// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`page_source`]: Remote paginated query service
//! - [`raster`]: Scene-to-bitmap rasterization
//! - [`drag`]: Parent-bounded drag tracking
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - `PageSource` and `Rasterizer` are `Send + Sync` so the app can share
//!   them with background tasks behind an `Arc`
//! - `PageSource::fetch` hands back a boxed future; callers wrap it in an
//!   Iced `Task`

pub mod drag;
pub mod page_source;
pub mod raster;

pub use drag::DragCapability;
pub use page_source::{FetchError, FetchResult, PageSource};
pub use raster::{RasterError, Rasterizer};
