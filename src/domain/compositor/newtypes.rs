// SPDX-License-Identifier: MPL-2.0
//! Compositor newtypes.

// =============================================================================
// Logo Size Bounds
// =============================================================================

/// Logo width bounds in pixels (50 to 200).
pub mod logo_size_bounds {
    /// Smallest logo width.
    pub const MIN: u32 = 50;
    /// Largest logo width.
    pub const MAX: u32 = 200;
    /// Width used for a freshly placed logo.
    pub const DEFAULT: u32 = 100;
}

// =============================================================================
// LogoSize
// =============================================================================

/// Rendered logo width in pixels, guaranteed to be within 50–200.
///
/// Only the width is stored; the height is derived from the image's aspect
/// ratio at render time.
///
/// # Example
///
/// ```
/// use iced_vitrine::domain::compositor::LogoSize;
///
/// assert_eq!(LogoSize::new(300).value(), 200);
/// assert_eq!(LogoSize::new(120).value(), 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogoSize(u32);

impl LogoSize {
    /// Creates a logo size, clamping to the valid range.
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(logo_size_bounds::MIN, logo_size_bounds::MAX))
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns whether the size is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= logo_size_bounds::MIN
    }

    /// Returns whether the size is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= logo_size_bounds::MAX
    }
}

impl Default for LogoSize {
    fn default() -> Self {
        Self(logo_size_bounds::DEFAULT)
    }
}
