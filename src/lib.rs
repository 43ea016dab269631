// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a small desktop app built with the Iced GUI framework.
//!
//! It offers two screens: a searchable data grid backed by a remote paginated
//! service, and a compositor that places an uploaded logo on a T-shirt
//! background and exports the result as PNG.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
