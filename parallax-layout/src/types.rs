use crate::{LayoutError, Result};

/// An axis-aligned rectangle in content coordinates (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect, and an empty
    /// rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// The focus point decomposed into the focused item and the progress toward its successor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Focus {
    /// Index of the focused item. Negative when scrolled above the top (overscroll bounce).
    pub index: i64,
    /// Fractional progress toward `index + 1`, in `[0, 1)`.
    pub interpolation: f32,
}

/// Geometry for a single item produced by a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemFrame {
    pub index: usize,
    /// Top edge in content coordinates.
    pub origin_y: f32,
    pub height: f32,
    pub width: f32,
    /// Draw order. Later items paint over earlier ones.
    pub z_order: usize,
}

impl ItemFrame {
    pub fn bottom(&self) -> f32 {
        self.origin_y + self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.origin_y, self.width, self.height)
    }
}

/// The output of [`crate::ParallaxLayout::compute_layout`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    pub frames: Vec<ItemFrame>,
    pub content_height: f32,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Result<&ItemFrame> {
        self.frames.get(index).ok_or(LayoutError::IndexOutOfBounds {
            index,
            count: self.frames.len(),
        })
    }

    /// Frames intersecting `rect`, in index order.
    pub fn visible_frames<'a>(&'a self, rect: &'a Rect) -> impl Iterator<Item = &'a ItemFrame> {
        self.frames.iter().filter(move |f| f.rect().intersects(rect))
    }

    /// Collects visible frames into `out` (clears `out` first).
    pub fn collect_visible_frames(&self, rect: &Rect, out: &mut Vec<ItemFrame>) {
        out.clear();
        out.extend(self.visible_frames(rect).copied());
    }
}

/// Styling values derived from an item's current height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleFactors {
    /// Title scale, never below the configured minimum.
    pub scale: f32,
    /// Detail label opacity.
    pub label_alpha: f32,
    /// Opacity of the darkening overlay on the card image.
    pub cover_alpha: f32,
}
