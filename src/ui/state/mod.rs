// SPDX-License-Identifier: MPL-2.0
//! Reusable interaction state shared by UI components.

pub mod drag;

pub use drag::ParentBoundedDrag;
