use thiserror::Error;

/// Errors reported by [`crate::ParallaxLayout`] and [`crate::LayoutConfig::validate`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// The drag interval must be finite and strictly positive.
    #[error("drag interval must be finite and > 0, got {0}")]
    InvalidDragInterval(f32),

    /// Heights must be finite, non-negative, and `compact <= focused`.
    #[error("invalid heights: focused={focused}, compact={compact}")]
    InvalidHeights { focused: f32, compact: f32 },

    /// Viewport dimensions must be finite and non-negative.
    #[error("invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Cover alphas must lie in `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidAlpha { name: &'static str, value: f32 },

    /// An item index at or past the item count.
    #[error("item index {index} out of bounds (count={count})")]
    IndexOutOfBounds { index: usize, count: usize },
}

pub type Result<T, E = LayoutError> = core::result::Result<T, E>;
