use crate::{LayoutError, Result};

/// Height of the focused card in the stock card list.
pub const DEFAULT_FOCUSED_HEIGHT: f32 = 240.0;
/// Height of a compact card in the stock card list.
pub const DEFAULT_COMPACT_HEIGHT: f32 = 88.0;
/// Scroll distance that advances the focus by one card.
pub const DEFAULT_DRAG_INTERVAL: f32 = 180.0;

/// Card styling constants used by [`crate::ParallaxLayout::style_factors`] and
/// [`crate::CardStyle`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleConfig {
    /// Image cover opacity for a fully compact card.
    pub compact_cover_alpha: f32,
    /// Image cover opacity for a fully focused card.
    pub focused_cover_alpha: f32,
    /// Horizontal inset of the detail label.
    pub text_padding: f32,
    /// Vertical distance from the title centre to the detail label centre.
    pub detail_label_offset: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            compact_cover_alpha: 0.5,
            focused_cover_alpha: 0.2,
            text_padding: 20.0,
            detail_label_offset: 40.0,
        }
    }
}

impl StyleConfig {
    pub fn with_cover_alphas(mut self, compact: f32, focused: f32) -> Self {
        self.compact_cover_alpha = compact;
        self.focused_cover_alpha = focused;
        self
    }

    pub fn with_text_padding(mut self, text_padding: f32) -> Self {
        self.text_padding = text_padding;
        self
    }

    pub fn with_detail_label_offset(mut self, offset: f32) -> Self {
        self.detail_label_offset = offset;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("compact_cover_alpha", self.compact_cover_alpha),
            ("focused_cover_alpha", self.focused_cover_alpha),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LayoutError::InvalidAlpha { name, value });
            }
        }
        Ok(())
    }
}

/// Configuration for [`crate::ParallaxLayout`].
///
/// This is the single source of truth for card geometry: build it once, validate it through
/// `ParallaxLayout::new`, and hand the same value to whatever renders the cards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub item_count: usize,
    /// Item width. Every frame spans the full viewport width.
    pub viewport_width: f32,
    /// Used for the content height so the last item can reach focus.
    pub viewport_height: f32,
    pub focused_height: f32,
    pub compact_height: f32,
    /// Scroll distance that moves the focus point by one full item. Must be `> 0`.
    pub drag_interval: f32,
    pub style: StyleConfig,
}

impl LayoutConfig {
    /// Creates a config with the stock card heights and drag interval.
    pub fn new(item_count: usize, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            item_count,
            viewport_width,
            viewport_height,
            focused_height: DEFAULT_FOCUSED_HEIGHT,
            compact_height: DEFAULT_COMPACT_HEIGHT,
            drag_interval: DEFAULT_DRAG_INTERVAL,
            style: StyleConfig::default(),
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_heights(mut self, focused_height: f32, compact_height: f32) -> Self {
        self.focused_height = focused_height;
        self.compact_height = compact_height;
        self
    }

    pub fn with_drag_interval(mut self, drag_interval: f32) -> Self {
        self.drag_interval = drag_interval;
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// The growth range between compact and focused heights.
    pub fn height_range(&self) -> f32 {
        self.focused_height - self.compact_height
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.drag_interval.is_finite() && self.drag_interval > 0.0) {
            return Err(LayoutError::InvalidDragInterval(self.drag_interval));
        }

        let heights_ok = self.focused_height.is_finite()
            && self.compact_height.is_finite()
            && self.compact_height >= 0.0
            && self.compact_height <= self.focused_height;
        if !heights_ok {
            return Err(LayoutError::InvalidHeights {
                focused: self.focused_height,
                compact: self.compact_height,
            });
        }

        let viewport_ok = self.viewport_width.is_finite()
            && self.viewport_height.is_finite()
            && self.viewport_width >= 0.0
            && self.viewport_height >= 0.0;
        if !viewport_ok {
            return Err(LayoutError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        self.style.validate()
    }
}
