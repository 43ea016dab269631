// SPDX-License-Identifier: MPL-2.0
//! Image I/O for the compositor.
//!
//! Decoding uploaded logos, producing the stage background and writing
//! exported designs.

pub mod background;
pub mod data_uri;
pub mod export;
pub mod logo;
pub mod scale;

pub use export::{export_scene, write_png};
pub use logo::{load_logo, LOGO_EXTENSIONS};
