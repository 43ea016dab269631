// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`paging`]: Remote pagination types ([`PageQuery`](paging::PageQuery),
//!   [`PageEnvelope`](paging::PageEnvelope), [`Record`](paging::Record))
//! - [`compositor`]: Logo overlay types ([`LogoSize`](compositor::LogoSize),
//!   [`Offset`](compositor::Offset), [`Scene`](compositor::Scene))
//! - [`media`]: Bitmap type ([`RawImage`](media::RawImage))

pub mod compositor;
pub mod media;
pub mod paging;
