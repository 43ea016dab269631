// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`data_grid`] - Searchable, remotely paginated table
//! - [`compositor`] - Logo placement on a T-shirt and PNG export
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable interaction state (parent-bounded drag)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Tabs switching between the two screens
//! - [`notifications`] - Toast notification system for user feedback

pub mod compositor;
pub mod data_grid;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
