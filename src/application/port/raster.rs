// SPDX-License-Identifier: MPL-2.0
//! Rasterization port.

use crate::domain::compositor::Scene;
use crate::domain::media::RawImage;
use std::fmt;

/// Errors that can occur while flattening a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The background has no pixels to draw on.
    EmptyBackground,

    /// A working buffer could not be allocated.
    Allocation {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::EmptyBackground => write!(f, "Background has zero area"),
            RasterError::Allocation { width, height } => {
                write!(f, "Cannot allocate a {width}x{height} buffer")
            }
        }
    }
}

impl std::error::Error for RasterError {}

impl From<RasterError> for crate::error::Error {
    fn from(err: RasterError) -> Self {
        crate::error::Error::Rasterization(err.to_string())
    }
}

/// Turns a [`Scene`] into a flat RGBA bitmap the size of its background.
///
/// Callers must not assume two renders of the same scene are bit-identical;
/// that is a property of the implementation, not of this contract.
pub trait Rasterizer: Send + Sync {
    fn render(&self, scene: &Scene) -> Result<RawImage, RasterError>;
}
