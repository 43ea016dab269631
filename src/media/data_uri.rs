// SPDX-License-Identifier: MPL-2.0
//! `data:` URI encoding for uploaded logos.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Builds `data:{mime};base64,{payload}`.
#[must_use]
pub fn encode(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
