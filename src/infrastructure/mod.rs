// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Remote paging via `reqwest` (implements [`PageSource`])
//! - [`raster`]: CPU compositing via `image` (implements [`Rasterizer`])
//!
//! [`PageSource`]: crate::application::port::PageSource
//! [`Rasterizer`]: crate::application::port::Rasterizer

pub mod http;
pub mod raster;

pub use http::HttpPageSource;
pub use raster::SoftwareRasterizer;
