// SPDX-License-Identifier: MPL-2.0
//! Pagination domain types.
//!
//! The grid talks to the remote service exclusively through these types:
//! a [`PageQuery`] goes out, a [`PageEnvelope`] comes back.

mod newtypes;
mod range;
mod types;

pub use newtypes::{page_bounds, PageNumber, PageSize, RequestId};
pub use range::{range_end, range_start};
pub use types::{PageEnvelope, PageQuery, PageRequest, Record};
